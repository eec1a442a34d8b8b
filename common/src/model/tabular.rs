use std::fmt;

use serde::{Deserialize, Serialize};

use super::ModelError;

pub const ROW_COUNT_MIN: u32 = 5;
pub const ROW_COUNT_MAX: u32 = 50;
pub const ROW_COUNT_STEP: u32 = 5;
pub const ROW_COUNT_DEFAULT: u32 = 50;

/// Used when the user leaves the use case blank.
pub const DEFAULT_USE_CASE: &str = "General data generation";

/// Data type tag of a generated column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int,
    Float,
    #[default]
    Str,
    Bool,
    Datetime,
}

impl ColumnType {
    pub const ALL: [ColumnType; 5] = [
        ColumnType::Int,
        ColumnType::Float,
        ColumnType::Str,
        ColumnType::Bool,
        ColumnType::Datetime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::Str => "str",
            ColumnType::Bool => "bool",
            ColumnType::Datetime => "datetime",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One categorical value a column is allowed to take.
///
/// The backend accepts strings and numbers mixed in the same list, so the
/// variants are untagged on the wire. Integers are tried before floats when
/// decoding so `3` stays an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl OptionValue {
    /// Parses a comma separated list typed by the user. Blank entries are dropped.
    pub fn parse_list(input: &str) -> Vec<OptionValue> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Ok(i) = s.parse::<i64>() {
                    OptionValue::Integer(i)
                } else if let Ok(f) = s.parse::<f64>() {
                    OptionValue::Float(f)
                } else {
                    OptionValue::Text(s.to_string())
                }
            })
            .collect()
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Integer(i) => write!(f, "{i}"),
            OptionValue::Float(x) => write!(f, "{x}"),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub dtype: ColumnType,
    pub description: String,
    /// Free-form rule evaluated by the backend, e.g. `>=18 and <=100`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionValue>>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, dtype: ColumnType, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dtype,
            description: description.into(),
            validation: None,
            options: None,
        }
    }

    /// Builds a definition from the raw text of the column builder.
    /// Blank validation and option inputs become absent fields.
    pub fn from_form(
        name: &str,
        dtype: ColumnType,
        description: &str,
        validation: &str,
        options: &str,
    ) -> Self {
        let validation = validation.trim();
        let options = OptionValue::parse_list(options);
        Self {
            name: name.trim().to_string(),
            dtype,
            description: description.trim().to_string(),
            validation: (!validation.is_empty()).then(|| validation.to_string()),
            options: (!options.is_empty()).then_some(options),
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Csv, OutputFormat::Json];

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.extension() == tag)
    }
}

/// Body of `POST /generate/tabular`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularRequest {
    pub columns: Vec<ColumnDefinition>,
    pub num_rows: u32,
    pub description: String,
    pub use_case: String,
    pub output_format: OutputFormat,
}

impl TabularRequest {
    pub fn new(
        columns: Vec<ColumnDefinition>,
        num_rows: u32,
        use_case: &str,
        output_format: OutputFormat,
    ) -> Self {
        let use_case = use_case.trim();
        Self {
            columns,
            num_rows,
            description: format!("Generated dataset with {num_rows} rows"),
            use_case: if use_case.is_empty() {
                DEFAULT_USE_CASE.to_string()
            } else {
                use_case.to_string()
            },
            output_format,
        }
    }

    /// Every column must be named before the request may leave the client.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self.columns.iter().position(|c| !c.has_name()) {
            Some(position) => Err(ModelError::UnnamedColumn { position }),
            None => Ok(()),
        }
    }

    pub fn success_message(&self) -> String {
        format!(
            "Successfully generated {} rows of synthetic data.",
            self.num_rows
        )
    }
}

/// Columns the builder starts with.
pub fn default_columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::new("User ID", ColumnType::Int, "Unique user identifier"),
        ColumnDefinition::new("Email", ColumnType::Str, "User email address"),
    ]
}

/// Placeholder cell of the live preview table, `row` is zero-based.
pub fn sample_cell(dtype: ColumnType, row: usize) -> String {
    match dtype {
        ColumnType::Str => format!("Sample {}", row + 1),
        ColumnType::Int => (1000 + row).to_string(),
        ColumnType::Float => format!("{}", 1000.5 + row as f64),
        ColumnType::Bool => if row % 2 == 0 { "True" } else { "False" }.to_string(),
        ColumnType::Datetime => "Sample data".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::generation::{DownloadHandle, Generation, GenerationResult};
    use serde_json::json;

    #[test]
    fn validate_accepts_all_named_columns() {
        let request = TabularRequest::new(default_columns(), 10, "", OutputFormat::Csv);
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn validate_flags_first_blank_column() {
        let mut columns = default_columns();
        columns.push(ColumnDefinition::new("   ", ColumnType::Str, ""));
        columns.push(ColumnDefinition::new("", ColumnType::Int, ""));
        let request = TabularRequest::new(columns, 10, "", OutputFormat::Csv);
        assert_eq!(request.validate(), Err(ModelError::UnnamedColumn { position: 2 }));
    }

    #[test]
    fn empty_column_list_is_not_blocked() {
        let request = TabularRequest::new(Vec::new(), 10, "", OutputFormat::Csv);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn success_message_reports_submitted_rows() {
        let request = TabularRequest::new(default_columns(), 100, "", OutputFormat::Csv);
        let generation = Generation::new(
            request.clone(),
            GenerationResult::Download(DownloadHandle::new(Vec::new(), "text/csv", None)),
        );
        assert_eq!(
            generation.request.success_message(),
            "Successfully generated 100 rows of synthetic data."
        );
    }

    #[test]
    fn blank_use_case_falls_back() {
        let request = TabularRequest::new(default_columns(), 25, "  ", OutputFormat::Json);
        assert_eq!(request.use_case, DEFAULT_USE_CASE);
        assert_eq!(request.description, "Generated dataset with 25 rows");
    }

    #[test]
    fn optional_column_fields_are_omitted() {
        let column = ColumnDefinition::from_form("Age", ColumnType::Int, "Age in years", " ", "");
        assert_eq!(
            serde_json::to_value(&column).unwrap(),
            json!({"name": "Age", "dtype": "int", "description": "Age in years"})
        );
    }

    #[test]
    fn options_keep_mixed_types() {
        let column =
            ColumnDefinition::from_form("Tier", ColumnType::Str, "", ">0", "Gold, 2, 3.5,, ");
        assert_eq!(column.validation.as_deref(), Some(">0"));
        assert_eq!(
            serde_json::to_value(&column.options).unwrap(),
            json!(["Gold", 2, 3.5])
        );
    }

    #[test]
    fn sample_cells_follow_dtype() {
        assert_eq!(sample_cell(ColumnType::Str, 0), "Sample 1");
        assert_eq!(sample_cell(ColumnType::Int, 2), "1002");
        assert_eq!(sample_cell(ColumnType::Float, 1), "1001.5");
        assert_eq!(sample_cell(ColumnType::Bool, 1), "False");
    }

    #[test]
    fn column_type_tags_parse() {
        for dtype in ColumnType::ALL {
            assert_eq!(ColumnType::parse(dtype.as_str()), Some(dtype));
        }
        assert_eq!(ColumnType::parse("decimal"), None);
    }
}
