//! Top sheet showing the first records of a generated dataset.

use common::preview::{DatasetPreview, PREVIEW_ROWS};
use yew::prelude::*;

use crate::components::helpers::format_count;
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

/// `preview` is `None` until the user asks for one.
pub fn preview_sheet(
    sheet_ref: NodeRef,
    title: &str,
    preview: Option<&Result<DatasetPreview, String>>,
    on_close: Callback<MouseEvent>,
) -> Html {
    html! {
        <YwMaterialTopSheet node_ref={sheet_ref}>
            <div class="preview-overlay">
                <div class="preview-panel">
                    <div class="preview-header">
                        <h3>{ title.to_string() }</h3>
                        <button class="icon-btn" onclick={on_close} title="Close preview">
                            { "✕" }
                        </button>
                    </div>
                    {
                        match preview {
                            Some(Ok(preview)) => preview_table(preview),
                            Some(Err(message)) => html! {
                                <p class="preview-error">{ message.clone() }</p>
                            },
                            None => html! {},
                        }
                    }
                </div>
            </div>
        </YwMaterialTopSheet>
    }
}

fn preview_table(preview: &DatasetPreview) -> Html {
    html! {
        <>
            <p class="muted">
                { format!(
                    "Showing {} of {} records",
                    preview.rows.len().min(PREVIEW_ROWS),
                    format_count(preview.total_rows as u64)
                ) }
            </p>
            <div class="table-scroll">
                <table class="data-table">
                    <thead>
                        <tr>
                            { for preview.headers.iter().map(|h| html! { <th>{ h.clone() }</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for preview.rows.iter().map(|row| html! {
                                <tr>
                                    {
                                        for row.iter().map(|cell| html! {
                                            <td>{ cell.clone() }</td>
                                        })
                                    }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        </>
    }
}
