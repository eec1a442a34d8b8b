//! Contact form, posted to `POST /feedback`.

use common::jobs::SubmissionState;
use common::model::feedback::{ContactCategory, ContactMessage, FeedbackStatus, Rating};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::helpers::{input_value, select_value, show_toast, textarea_value};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

pub enum Msg {
    Set(Field, String),
    SetCategory(ContactCategory),
    SetRating(u8),
    ToggleRequestPreview,
    Submit,
    Settled(Result<FeedbackStatus, String>),
}

#[derive(Default)]
pub struct ContactPanel {
    name: String,
    email: String,
    company: String,
    message: String,
    category: ContactCategory,
    rating: Rating,
    show_request: bool,
    submission: SubmissionState<FeedbackStatus>,
}

impl ContactPanel {
    fn draft(&self) -> ContactMessage {
        ContactMessage::new(
            &self.name,
            &self.email,
            &self.company,
            &self.message,
            self.rating,
            self.category,
        )
    }

    fn clear_form(&mut self) {
        self.name.clear();
        self.email.clear();
        self.company.clear();
        self.message.clear();
        self.category = ContactCategory::default();
        self.rating = Rating::default();
    }
}

impl Component for ContactPanel {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Set(field, value) => {
                match field {
                    Field::Name => self.name = value,
                    Field::Email => self.email = value,
                    Field::Company => self.company = value,
                    Field::Message => self.message = value,
                }
                self.show_request
            }
            Msg::SetCategory(category) => {
                self.category = category;
                true
            }
            Msg::SetRating(value) => match Rating::new(value) {
                Ok(rating) => {
                    self.rating = rating;
                    true
                }
                Err(_) => false,
            },
            Msg::ToggleRequestPreview => {
                self.show_request = !self.show_request;
                true
            }
            Msg::Submit => {
                let message = self.draft();
                if let Err(err) = message.validate() {
                    show_toast("Missing Information", &err.to_string(), true);
                    return false;
                }
                if !self.submission.begin() {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = match api::client() {
                        Ok(client) => client.submit_contact(&message).await,
                        Err(err) => Err(err),
                    };
                    link.send_message(Msg::Settled(outcome.map_err(|err| err.user_message())));
                });
                true
            }
            Msg::Settled(outcome) => {
                match &outcome {
                    Ok(_) => {
                        show_toast(
                            "Message Sent!",
                            "Thank you for your feedback. We'll get back to you soon.",
                            false,
                        );
                        self.clear_form();
                    }
                    Err(message) => show_toast("Error", message, true),
                }
                self.submission.settle(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let text_input = |field: Field, label: &'static str, kind: &'static str, value: &str| {
            let oninput = link.callback(move |e: InputEvent| Msg::Set(field, input_value(&e)));
            html! {
                <label>
                    { label }
                    <input
                        class="input"
                        type={kind}
                        value={value.to_string()}
                        oninput={oninput}
                    />
                </label>
            }
        };
        let on_category = link.callback(|e: Event| {
            Msg::SetCategory(ContactCategory::parse(&select_value(&e)).unwrap_or_default())
        });
        let on_message =
            link.callback(|e: InputEvent| Msg::Set(Field::Message, textarea_value(&e)));
        let on_toggle_request = link.callback(|_| Msg::ToggleRequestPreview);
        let busy = self.submission.is_busy();
        let toggle_label = if self.show_request {
            "Hide API request"
        } else {
            "Show API request"
        };

        html! {
            <section id="contact" class="panel">
                <div class="panel-heading">
                    <h2>{ "Get in Touch" }</h2>
                    <p class="muted">{ "Questions, feedback or a feature you need? Tell us." }</p>
                </div>
                <div class="card contact-form">
                    { text_input(Field::Name, "Name *", "text", &self.name) }
                    { text_input(Field::Email, "Email *", "email", &self.email) }
                    { text_input(Field::Company, "Company", "text", &self.company) }
                    <label>
                        { "Category" }
                        <select onchange={on_category}>
                            {
                                for ContactCategory::ALL.iter().map(|category| {
                                    let selected = *category == self.category;
                                    html! {
                                        <option value={category.value()} selected={selected}>
                                            { category.label() }
                                        </option>
                                    }
                                })
                            }
                        </select>
                    </label>
                    <label>
                        { "Message *" }
                        <textarea
                            value={self.message.clone()}
                            oninput={on_message}
                        />
                    </label>
                    <div class="star-row">
                        {
                            for (Rating::MIN..=Rating::MAX).map(|value| {
                                let filled = (value <= self.rating.get()).then_some("filled");
                                html! {
                                    <button
                                        class={classes!("star", filled)}
                                        onclick={link.callback(move |_| Msg::SetRating(value))}
                                    >
                                        { "★" }
                                    </button>
                                }
                            })
                        }
                    </div>
                    <div class="row">
                        <button
                            class="btn btn-primary"
                            disabled={busy}
                            onclick={link.callback(|_| Msg::Submit)}
                        >
                            { if busy { "Sending..." } else { "Send Message" } }
                        </button>
                        <button class="btn btn-outline" onclick={on_toggle_request}>
                            { toggle_label }
                        </button>
                    </div>
                    if self.show_request {
                        <pre class="code-block">{ self.request_preview() }</pre>
                    }
                </div>
            </section>
        }
    }
}

impl ContactPanel {
    fn request_preview(&self) -> String {
        let body = serde_json::to_string_pretty(&self.draft()).unwrap_or_default();
        format!("POST {}\n\n{body}", api::contact_url())
    }
}
