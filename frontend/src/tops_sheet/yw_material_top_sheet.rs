use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Sheet that slides down over the page when its `show` class is set.
pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

const SHOW_CLASS: &str = "show";
const TRANSITION_DELAY_MS: u32 = 50;

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    toggle_later(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    toggle_later(top_sheet_ref, false);
}

// The delay lets a freshly mounted sheet render once before it transitions.
fn toggle_later(top_sheet_ref: NodeRef, show: bool) {
    Timeout::new(TRANSITION_DELAY_MS, move || {
        if let Some(sheet) = top_sheet_ref.cast::<web_sys::Element>() {
            let classes = sheet.class_list();
            let outcome = if show {
                classes.add_1(SHOW_CLASS)
            } else {
                classes.remove_1(SHOW_CLASS)
            };
            if let Err(err) = outcome {
                log::warn!("top sheet class change failed: {err:?}");
            }
        }
    })
    .forget();
}
