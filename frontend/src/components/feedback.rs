//! Rating card shown under a successful generation.

use common::jobs::SubmissionState;
use common::model::feedback::{FeedbackStatus, FeedbackSubmission, Rating};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::helpers::{show_toast, textarea_value};

#[derive(Properties, PartialEq, Clone)]
pub struct FeedbackProps {
    /// Identifier of the dataset being rated, one per generation.
    pub dataset_id: AttrValue,
}

pub enum Msg {
    SetRating(u8),
    SetComments(String),
    SetImprovements(String),
    Submit,
    Settled(Result<FeedbackStatus, String>),
}

pub struct FeedbackWidget {
    rating: Rating,
    comments: String,
    improvements: String,
    state: SubmissionState<FeedbackStatus>,
}

impl FeedbackWidget {
    fn blank() -> Self {
        Self {
            rating: Rating::default(),
            comments: String::new(),
            improvements: String::new(),
            state: SubmissionState::Idle,
        }
    }
}

impl Component for FeedbackWidget {
    type Message = Msg;
    type Properties = FeedbackProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::blank()
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().dataset_id != old_props.dataset_id {
            *self = Self::blank();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetRating(value) => match Rating::new(value) {
                Ok(rating) => {
                    self.rating = rating;
                    true
                }
                Err(_) => false,
            },
            Msg::SetComments(text) => {
                self.comments = text;
                false
            }
            Msg::SetImprovements(text) => {
                self.improvements = text;
                false
            }
            Msg::Submit => {
                if !self.state.begin() {
                    return false;
                }
                let submission = FeedbackSubmission::new(
                    ctx.props().dataset_id.to_string(),
                    self.rating,
                    &self.comments,
                    &self.improvements,
                );
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = match api::client() {
                        Ok(client) => client.submit_feedback(&submission).await,
                        Err(err) => Err(err),
                    };
                    link.send_message(Msg::Settled(outcome.map_err(|err| err.user_message())));
                });
                true
            }
            Msg::Settled(outcome) => {
                match &outcome {
                    Ok(_) => show_toast(
                        "Thank you!",
                        "Your feedback helps improve future datasets.",
                        false,
                    ),
                    Err(message) => show_toast("Feedback not sent", message, true),
                }
                self.state.settle(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if self.state.succeeded().is_some() {
            return html! {
                <div class="card feedback-card">
                    <p class="success-text">
                        { format!("Rated {} - thanks for the feedback.", self.rating) }
                    </p>
                </div>
            };
        }

        let on_comments = link.callback(|e: InputEvent| Msg::SetComments(textarea_value(&e)));
        let on_improvements =
            link.callback(|e: InputEvent| Msg::SetImprovements(textarea_value(&e)));
        html! {
            <div class="card feedback-card">
                <h4>{ "Rate this dataset" }</h4>
                <div class="star-row">
                    {
                        for (Rating::MIN..=Rating::MAX).map(|value| {
                            let filled = (value <= self.rating.get()).then_some("filled");
                            let onclick = link.callback(move |_| Msg::SetRating(value));
                            html! {
                                <button class={classes!("star", filled)} onclick={onclick}>
                                    { "★" }
                                </button>
                            }
                        })
                    }
                </div>
                <textarea
                    placeholder="Comments"
                    value={self.comments.clone()}
                    oninput={on_comments}
                />
                <textarea
                    placeholder="Suggested improvements (comma or line separated)"
                    value={self.improvements.clone()}
                    oninput={on_improvements}
                />
                <button
                    class="btn btn-secondary"
                    disabled={self.state.is_busy()}
                    onclick={link.callback(|_| Msg::Submit)}
                >
                    { if self.state.is_busy() { "Sending..." } else { "Submit feedback" } }
                </button>
            </div>
        }
    }
}
