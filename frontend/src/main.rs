use crate::app::App;

mod api;
mod app;
mod components;
mod logger;
mod tops_sheet;

fn main() {
    if let Err(err) = logger::init() {
        gloo_console::warn!(format!("console logger unavailable: {err}"));
    }
    yew::Renderer::<App>::new().render();
}
