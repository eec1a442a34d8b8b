//! View rendering for the tabular generator panel.
//!
//! Left: the column builder and generation settings. Right: a live preview
//! of the table shape, then the progress bar or the success card.

use common::jobs::SubmissionState;
use common::model::tabular::{
    sample_cell, ColumnType, OutputFormat, ROW_COUNT_MAX, ROW_COUNT_MIN, ROW_COUNT_STEP,
};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::feedback::FeedbackWidget;
use crate::components::helpers::{
    format_count, input_number, input_value, preview_button_row, progress_bar, select_value,
};
use crate::components::preview::preview_sheet;

use super::messages::{ColumnField, Msg};
use super::state::{ColumnDraft, TabularPanel};

const LIVE_PREVIEW_ROWS: usize = 3;

pub fn view(component: &TabularPanel, ctx: &Context<TabularPanel>) -> Html {
    let link = ctx.link();
    html! {
        <section id="tabular" class="panel">
            <div class="panel-heading">
                <h2>{ "Tabular Data Generator" }</h2>
                <p class="muted">
                    { "Design a schema and generate privacy-safe synthetic rows." }
                </p>
            </div>
            <div class="panel-grid">
                <div class="card">
                    { build_column_builder(component, link) }
                    { build_settings(component, link) }
                    { build_generate_button(component, link) }
                </div>
                <div class="card">
                    { build_live_preview(component) }
                    { build_outcome(component, link) }
                </div>
            </div>
            {
                preview_sheet(
                    component.preview_ref.clone(),
                    "Dataset preview",
                    component.preview.as_ref(),
                    link.callback(|_| Msg::ClosePreview),
                )
            }
        </section>
    }
}

fn build_column_builder(component: &TabularPanel, link: &Scope<TabularPanel>) -> Html {
    let rows = component
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| build_column_row(index, column, link));
    html! {
        <div class="column-builder">
            <div class="row-between">
                <h3>{ "Columns" }</h3>
                <button class="btn btn-outline" onclick={link.callback(|_| Msg::AddColumn)}>
                    { "+ Add column" }
                </button>
            </div>
            { for rows }
        </div>
    }
}

fn build_column_row(index: usize, column: &ColumnDraft, link: &Scope<TabularPanel>) -> Html {
    let field = move |make: fn(String) -> ColumnField| {
        link.callback(move |e: InputEvent| Msg::UpdateColumn(index, make(input_value(&e))))
    };
    let on_type = link.callback(move |e: Event| {
        let dtype = ColumnType::parse(&select_value(&e)).unwrap_or_default();
        Msg::UpdateColumn(index, ColumnField::Type(dtype))
    });
    let on_remove = link.callback(move |_| Msg::RemoveColumn(index));
    let needs_options = matches!(
        column.dtype,
        ColumnType::Str | ColumnType::Int | ColumnType::Float
    );

    html! {
        <div class="column-row">
            <input
                class={classes!("input", column.name.trim().is_empty().then_some("input-invalid"))}
                placeholder="Column name"
                value={column.name.clone()}
                oninput={field(ColumnField::Name)}
            />
            <select onchange={on_type}>
                {
                    for ColumnType::ALL.iter().map(|dtype| html! {
                        <option value={dtype.as_str()} selected={*dtype == column.dtype}>
                            { dtype.as_str() }
                        </option>
                    })
                }
            </select>
            <input
                class="input"
                placeholder="Description"
                value={column.description.clone()}
                oninput={field(ColumnField::Description)}
            />
            <input
                class="input"
                placeholder="Validation (e.g. email format)"
                value={column.validation.clone()}
                oninput={field(ColumnField::Validation)}
            />
            if needs_options {
                <input
                    class="input"
                    placeholder="Options, comma separated"
                    value={column.options.clone()}
                    oninput={field(ColumnField::Options)}
                />
            }
            <button class="icon-btn" title="Remove column" onclick={on_remove}>
                { "✕" }
            </button>
        </div>
    }
}

fn build_settings(component: &TabularPanel, link: &Scope<TabularPanel>) -> Html {
    let on_rows = link.batch_callback(|e: InputEvent| input_number(&e).map(Msg::SetRows));
    let on_format = link.callback(|e: Event| {
        Msg::SetFormat(OutputFormat::parse(&select_value(&e)).unwrap_or_default())
    });

    html! {
        <div class="settings">
            <label>
                { format!("Rows: {}", format_count(u64::from(component.num_rows))) }
                <input
                    type="range"
                    min={ROW_COUNT_MIN.to_string()}
                    max={ROW_COUNT_MAX.to_string()}
                    step={ROW_COUNT_STEP.to_string()}
                    value={component.num_rows.to_string()}
                    oninput={on_rows}
                />
            </label>
            <label>
                { "Use case" }
                <input
                    class="input"
                    placeholder="e.g. Customer churn analysis"
                    value={component.use_case.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetUseCase(input_value(&e)))}
                />
            </label>
            <label>
                { "Output format" }
                <select onchange={on_format}>
                    {
                        for OutputFormat::ALL.iter().map(|format| {
                            let selected = *format == component.output_format;
                            html! {
                                <option value={format.extension()} selected={selected}>
                                    { format.extension().to_uppercase() }
                                </option>
                            }
                        })
                    }
                </select>
            </label>
        </div>
    }
}

fn build_generate_button(component: &TabularPanel, link: &Scope<TabularPanel>) -> Html {
    let busy = component.submission.is_busy();
    html! {
        <button class="btn btn-primary" disabled={busy} onclick={link.callback(|_| Msg::Generate)}>
            { if busy { "Generating..." } else { "Generate Dataset" } }
        </button>
    }
}

fn build_live_preview(component: &TabularPanel) -> Html {
    let columns: Vec<&ColumnDraft> = component.named_columns().collect();
    if columns.is_empty() {
        return html! { <p class="muted">{ "Name a column to see the table shape." }</p> };
    }

    html! {
        <div class="table-scroll">
            <table class="data-table">
                <thead>
                    <tr>
                        {
                            for columns.iter().map(|c| html! {
                                <th>{ c.name.trim().to_string() }</th>
                            })
                        }
                    </tr>
                </thead>
                <tbody>
                    {
                        for (0..LIVE_PREVIEW_ROWS).map(|row| html! {
                            <tr>
                                {
                                    for columns.iter().map(|c| html! {
                                        <td>{ sample_cell(c.dtype, row) }</td>
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        </div>
    }
}

fn build_outcome(component: &TabularPanel, link: &Scope<TabularPanel>) -> Html {
    match &component.submission {
        SubmissionState::Idle => html! {},
        SubmissionState::InProgress => progress_bar(component.progress.percent()),
        SubmissionState::Failed(message) => html! { <p class="error-text">{ message.clone() }</p> },
        SubmissionState::Succeeded(generation) => {
            let rows = format_count(u64::from(generation.request.num_rows));
            let quality = generation
                .result
                .metadata()
                .and_then(|meta| meta.quality_report)
                .map(|report| format!("Overall quality score: {:.0}%", report.overall_score));
            html! {
                <div class="success-card">
                    <h4>{ "Dataset ready" }</h4>
                    <p>{ format!("{rows} rows of synthetic data generated.") }</p>
                    if let Some(quality) = quality {
                        <p class="muted">{ quality }</p>
                    }
                    {
                        preview_button_row(
                            link.callback(|_| Msg::OpenPreview),
                            link.callback(|_| Msg::Download),
                        )
                    }
                    <FeedbackWidget dataset_id={component.dataset_id.clone()} />
                </div>
            }
        }
    }
}
