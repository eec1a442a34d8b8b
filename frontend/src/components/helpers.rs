//! Small browser utilities shared by the panels.
//!
//! - **User feedback**: transient toasts for success and failure messages.
//! - **Form input**: reading values out of input, textarea and select events.
//! - **Formatting**: thousands separators for counters and currency.
//! - **Randomness**: uniform samples for the decorative timers and canvases.

use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::{
    Event, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent,
    MouseEvent,
};
use yew::html::TargetCast;
use yew::{html, Callback, Html};

const TOAST_LIFETIME_MS: u32 = 3000;

/// Displays a temporary notification at the bottom of the screen.
///
/// A styled `div` is injected into the body and removes itself after a few
/// seconds. Destructive toasts are shown in red and are used for every
/// failure a panel reports to the user.
///
/// # Arguments
/// * `title` - Bold first line of the toast.
/// * `description` - Message body, inserted as text.
/// * `destructive` - Whether the toast reports a failure.
pub fn show_toast(title: &str, description: &str, destructive: bool) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Ok(heading), Ok(body_text), Some(body)) = (
        document.create_element("div"),
        document.create_element("strong"),
        document.create_element("div"),
        document.body(),
    ) else {
        return;
    };

    heading.set_text_content(Some(title));
    body_text.set_text_content(Some(description));
    toast.append_child(&heading).ok();
    toast.append_child(&body_text).ok();

    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    let background = if destructive {
        "rgba(185, 28, 28, 0.95)"
    } else {
        "rgba(15, 23, 42, 0.9)"
    };
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "6px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("max-width", "90vw").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Current value of the `<input>` that fired `event`.
pub fn input_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlInputElement>().value()
}

/// Numeric value of a range or number input, `None` when it does not parse.
pub fn input_number(event: &InputEvent) -> Option<u32> {
    input_value(event).trim().parse().ok()
}

pub fn textarea_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(event: &Event) -> String {
    event.target_unchecked_into::<HtmlSelectElement>().value()
}

/// `12500` → `"12,500"`.
pub fn format_count(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Whole-dollar amount with separators, e.g. `"$40,000"`.
pub fn format_currency(amount: f64) -> String {
    format!("${}", format_count(amount.max(0.0).round() as u64))
}

/// Uniform sample in `[0, 1)`.
pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

/// Cosmetic progress bar shown while a generation is pending.
pub fn progress_bar(percent: u32) -> Html {
    html! {
        <div class="progress">
            <div class="progress-bar" style={format!("width: {percent}%;")} />
            <span class="muted">{ format!("{percent}%") }</span>
        </div>
    }
}

/// Preview and Download buttons of a success card.
pub fn preview_button_row(
    on_preview: Callback<MouseEvent>,
    on_download: Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="row">
            <button class="btn btn-outline" onclick={on_preview}>{ "Preview" }</button>
            <button class="btn btn-primary" onclick={on_download}>{ "Download" }</button>
        </div>
    }
}
