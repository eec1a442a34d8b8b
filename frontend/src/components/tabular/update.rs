//! Update function for the tabular generator panel.
//!
//! Editing messages mutate the column drafts in place. `Generate` validates
//! the request, starts the cosmetic progress timer and issues the call;
//! `Generated` stops the timer and settles the submission.

use common::jobs::TABULAR_TICK;
use common::model::generation::{DownloadHandle, Generation, GenerationResult};
use common::preview::DatasetPreview;
use gloo_timers::callback::Interval;
use log::info;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, download_name, save_file};
use crate::components::helpers::{random_unit, show_toast};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::messages::{ColumnField, Msg};
use super::state::{ColumnDraft, TabularPanel};

pub fn update(component: &mut TabularPanel, ctx: &Context<TabularPanel>, msg: Msg) -> bool {
    match msg {
        Msg::AddColumn => {
            component.columns.push(ColumnDraft::default());
            true
        }
        Msg::RemoveColumn(index) => {
            if index < component.columns.len() {
                component.columns.remove(index);
            }
            true
        }
        Msg::UpdateColumn(index, field) => {
            let Some(column) = component.columns.get_mut(index) else {
                return false;
            };
            match field {
                ColumnField::Name(name) => column.name = name,
                ColumnField::Type(dtype) => column.dtype = dtype,
                ColumnField::Description(text) => column.description = text,
                ColumnField::Validation(text) => column.validation = text,
                ColumnField::Options(text) => column.options = text,
            }
            true
        }
        Msg::SetRows(rows) => {
            component.num_rows = rows;
            true
        }
        Msg::SetUseCase(text) => {
            component.use_case = text;
            false
        }
        Msg::SetFormat(format) => {
            component.output_format = format;
            true
        }
        Msg::Generate => generate(component, ctx),
        Msg::Tick => {
            if !component.progress.advance(TABULAR_TICK.step(random_unit())) {
                component.ticker = None;
            }
            true
        }
        Msg::Generated(generation) => {
            component.ticker = None;
            component.preview = None;
            let response = generation.result.response();
            if response.success {
                component.progress.finish();
                component.dataset_id = uuid::Uuid::new_v4().to_string();
                show_toast("Dataset Generated!", &generation.request.success_message(), false);
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

fn generate(component: &mut TabularPanel, ctx: &Context<TabularPanel>) -> bool {
    let request = component.request();
    if let Err(err) = request.validate() {
        show_toast("Validation Error", &err.to_string(), true);
        return false;
    }
    if !component.submission.begin() {
        return false;
    }

    info!(
        "generating {} rows over {} columns as {:?}",
        request.num_rows,
        request.columns.len(),
        request.output_format
    );
    component.progress.reset();
    let tick_link = ctx.link().clone();
    component.ticker = Some(Interval::new(TABULAR_TICK.interval_ms, move || {
        tick_link.send_message(Msg::Tick)
    }));

    let link = ctx.link().clone();
    spawn_local(async move {
        let result = match api::client() {
            Ok(client) => client.generate_tabular(&request).await,
            Err(err) => GenerationResult::Failed(err.user_message()),
        };
        link.send_message(Msg::Generated(Generation::new(request, result)));
    });
    true
}

/// The successful download and the name to save it under.
fn saved_file(component: &TabularPanel) -> Option<(DownloadHandle, String)> {
    let generation = component.submission.succeeded()?;
    let handle = generation.result.response().download?;
    let extension = generation.request.output_format.extension();
    let filename = download_name(&handle, "tabular_dataset", extension);
    Some((handle, filename))
}
