use common::jobs::QA_TICK;
use common::model::generation::{DownloadHandle, Generation, GenerationResult};
use common::preview::DatasetPreview;
use gloo_timers::callback::Interval;
use log::info;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, download_name, save_file};
use crate::components::helpers::{random_unit, show_toast};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::messages::Msg;
use super::state::QaPanel;

pub fn update(component: &mut QaPanel, ctx: &Context<QaPanel>, msg: Msg) -> bool {
    match msg {
        Msg::SelectDomain(domain) => {
            component.domain = domain;
            true
        }
        Msg::SetPairs(pairs) => {
            component.num_pairs = pairs;
            true
        }
        Msg::SetComplexity(value) => {
            component.complexity = value;
            true
        }
        Msg::SetContext(text) => {
            component.context = text;
            false
        }
        Msg::ToggleConfidence => {
            component.show_confidence = !component.show_confidence;
            true
        }
        Msg::Generate => {
            if !component.submission.begin() {
                return false;
            }
            let request = component.request();
            info!(
                "generating {} {} pairs at {:?} level",
                request.num_pairs,
                request.domain.id(),
                request.complexity
            );

            component.progress.reset();
            let tick_link = ctx.link().clone();
            component.ticker = Some(Interval::new(QA_TICK.interval_ms, move || {
                tick_link.send_message(Msg::Tick)
            }));

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match api::client() {
                    Ok(client) => client.generate_qa(&request).await,
                    Err(err) => GenerationResult::Failed(err.user_message()),
                };
                link.send_message(Msg::Generated(Generation::new(request, result)));
            });
            true
        }
        Msg::Tick => {
            if !component.progress.advance(QA_TICK.step(random_unit())) {
                component.ticker = None;
            }
            true
        }
        Msg::Generated(generation) => {
            component.ticker = None;
            let response = generation.result.response();
            if response.success {
                component.preview = None;
                component.progress.finish();
                component.dataset_id = uuid::Uuid::new_v4().to_string();
                show_toast("Q&A Pairs Generated!", &generation.request.success_message(), false);
                component.submission.settle::<String>(Ok(generation));
            } else {
                let message = response.error.unwrap_or_default();
                component.progress.reset();
                show_toast("Generation Failed", &message, true);
                component.submission.settle::<String>(Err(message));
            }
            true
        }
        Msg::OpenPreview => {
            let Some((handle, _)) = saved_file(component) else {
                return false;
            };
            component.preview = Some(
                DatasetPreview::from_download(&handle).map_err(|err| err.to_string()),
            );
            open_top_sheet(component.preview_ref.clone());
            true
        }
        Msg::ClosePreview => {
            close_top_sheet(component.preview_ref.clone());
            false
        }
        Msg::Download => {
            let Some((handle, filename)) = saved_file(component) else {
                return false;
            };
            match save_file(&handle, &filename) {
                Ok(()) => show_toast(
                    "Download Started!",
                    &format!("Downloading {filename}"),
                    false,
                ),
                Err(err) => {
                    log::error!("saving {filename} failed: {err:?}");
                    show_toast("Download Failed", "The file could not be saved.", true);
                }
            }
            false
        }
    }
}

/// The successful download and the name to save it under.
fn saved_file(component: &QaPanel) -> Option<(DownloadHandle, String)> {
    let generation = component.submission.succeeded()?;
    let handle = generation.result.response().download?;
    let prefix = format!("qa_pairs_{}", generation.request.domain.id());
    let filename = download_name(&handle, &prefix, "json");
    Some((handle, filename))
}
