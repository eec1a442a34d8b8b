//! State of the tabular generator panel.

use common::jobs::{DecorativeProgress, SubmissionState};
use common::model::generation::Generation;
use common::model::tabular::{
    default_columns, ColumnDefinition, ColumnType, OutputFormat, TabularRequest,
    ROW_COUNT_DEFAULT,
};
use common::preview::DatasetPreview;
use gloo_timers::callback::Interval;
use yew::NodeRef;

/// Raw text of one row of the column builder.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ColumnDraft {
    pub name: String,
    pub dtype: ColumnType,
    pub description: String,
    pub validation: String,
    pub options: String,
}

impl ColumnDraft {
    pub fn definition(&self) -> ColumnDefinition {
        ColumnDefinition::from_form(
            &self.name,
            self.dtype,
            &self.description,
            &self.validation,
            &self.options,
        )
    }
}

impl From<ColumnDefinition> for ColumnDraft {
    fn from(column: ColumnDefinition) -> Self {
        Self {
            name: column.name,
            dtype: column.dtype,
            description: column.description,
            ..Self::default()
        }
    }
}

pub struct TabularPanel {
    pub columns: Vec<ColumnDraft>,
    pub num_rows: u32,
    pub use_case: String,
    pub output_format: OutputFormat,

    /// Holds the submitted request and its result once the call succeeds.
    pub submission: SubmissionState<Generation<TabularRequest>>,

    /// Cosmetic bar shown while the request is pending.
    pub progress: DecorativeProgress,

    /// Drives `progress`. Dropping it stops the timer.
    pub ticker: Option<Interval>,

    /// Fresh identifier for each successful generation, used when rating it.
    pub dataset_id: String,

    pub preview: Option<Result<DatasetPreview, String>>,
    pub preview_ref: NodeRef,
}

impl TabularPanel {
    pub fn new() -> Self {
        Self {
            columns: default_columns().into_iter().map(ColumnDraft::from).collect(),
            num_rows: ROW_COUNT_DEFAULT,
            use_case: String::new(),
            output_format: OutputFormat::default(),
            submission: SubmissionState::Idle,
            progress: DecorativeProgress::default(),
            ticker: None,
            dataset_id: String::new(),
            preview: None,
            preview_ref: NodeRef::default(),
        }
    }

    pub fn request(&self) -> TabularRequest {
        TabularRequest::new(
            self.columns.iter().map(ColumnDraft::definition).collect(),
            self.num_rows,
            &self.use_case,
            self.output_format,
        )
    }

    pub fn named_columns(&self) -> impl Iterator<Item = &ColumnDraft> {
        self.columns.iter().filter(|c| !c.name.trim().is_empty())
    }
}
