//! Fixed top bar. Sections are reached through `#anchor` links only.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub const SECTIONS: [(&str, &str); 6] = [
    ("dashboard", "Dashboard"),
    ("tabular", "Tabular Data"),
    ("qa", "Q&A Generator"),
    ("analytics", "Analytics"),
    ("security", "Security"),
    ("contact", "Contact"),
];

const SCROLLED_OFFSET: f64 = 50.0;

pub enum Msg {
    ToggleMenu,
    CloseMenu,
    Scrolled(bool),
}

/// Window `scroll` subscription, removed again on drop.
struct ScrollListener {
    closure: Closure<dyn Fn()>,
}

impl ScrollListener {
    fn attach(on_change: Callback<bool>) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn Fn()>::new(move || {
            let offset = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or_default();
            on_change.emit(offset > SCROLLED_OFFSET);
        });
        window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { closure })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let callback = self.closure.as_ref().unchecked_ref();
            window
                .remove_event_listener_with_callback("scroll", callback)
                .ok();
        }
    }
}

pub struct Navigation {
    menu_open: bool,
    scrolled: bool,
    _scroll: Option<ScrollListener>,
}

impl Component for Navigation {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            menu_open: false,
            scrolled: false,
            _scroll: ScrollListener::attach(ctx.link().callback(Msg::Scrolled)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            Msg::CloseMenu => std::mem::replace(&mut self.menu_open, false),
            Msg::Scrolled(scrolled) => {
                let changed = self.scrolled != scrolled;
                self.scrolled = scrolled;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let links = SECTIONS.iter().map(|(anchor, label)| {
            let onclick = link.callback(|_| Msg::CloseMenu);
            html! {
                <a class="nav-link" href={format!("#{anchor}")} onclick={onclick}>
                    { *label }
                </a>
            }
        });
        let on_toggle = link.callback(|_| Msg::ToggleMenu);
        html! {
            <nav class={classes!("navbar", self.scrolled.then_some("scrolled"))}>
                <a class="brand" href="#dashboard">{ "GeniQ" }</a>
                <button class="icon-btn menu-toggle" title="Menu" onclick={on_toggle}>
                    { if self.menu_open { "✕" } else { "☰" } }
                </button>
                <div class={classes!("nav-links", self.menu_open.then_some("open"))}>
                    { for links }
                </div>
            </nav>
        }
    }
}
