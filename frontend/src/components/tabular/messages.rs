use common::model::generation::Generation;
use common::model::tabular::{ColumnType, OutputFormat, TabularRequest};

/// One editable field of a column draft.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnField {
    Name(String),
    Type(ColumnType),
    Description(String),
    Validation(String),
    Options(String),
}

pub enum Msg {
    AddColumn,
    RemoveColumn(usize),
    UpdateColumn(usize, ColumnField),
    SetRows(u32),
    SetUseCase(String),
    SetFormat(OutputFormat),
    Generate,
    Tick,
    Generated(Generation<TabularRequest>),
    OpenPreview,
    ClosePreview,
    Download,
}
