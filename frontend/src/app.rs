use crate::components::analytics::AnalyticsPanel;
use crate::components::contact::ContactPanel;
use crate::components::dashboard::Dashboard;
use crate::components::navigation::Navigation;
use crate::components::qa::QaPanel;
use crate::components::security::SecurityPanel;
use crate::components::tabular::TabularPanel;
use yew::{html, Component, Context, Html};

/// The whole single-page site. Panels share no state.
pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <Navigation />
                <main>
                    <Dashboard />
                    <TabularPanel />
                    <QaPanel />
                    <AnalyticsPanel />
                    <SecurityPanel />
                    <ContactPanel />
                </main>
                <footer class="footer">
                    <span class="muted">{ "© GeniQ SynthData Studio" }</span>
                </footer>
            </>
        }
    }
}
