//! Tabular generator panel.
//!
//! The user builds a column list, picks a row count, use case and output
//! format, and submits it to `POST /generate/tabular`. A successful
//! generation can be previewed, downloaded and rated.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::TabularPanel;

impl Component for TabularPanel {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        TabularPanel::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
