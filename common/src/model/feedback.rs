//! Feedback and contact messages sent back to the backend.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ModelError;

/// Satisfaction score, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, ModelError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::RatingOutOfRange(value))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<u8> for Rating {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Body of `POST /submit-feedback`.
///
/// `submitted_at` is stamped on construction and kept client-side, the
/// endpoint only accepts `{dataset_id, rating, comments, improvements}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackSubmission {
    pub dataset_id: String,
    pub rating: Rating,
    pub comments: String,
    pub improvements: Vec<String>,
    #[serde(skip)]
    pub submitted_at: DateTime<Utc>,
}

impl FeedbackSubmission {
    pub fn new(
        dataset_id: impl Into<String>,
        rating: Rating,
        comments: &str,
        improvements: &str,
    ) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            rating,
            comments: comments.trim().to_string(),
            improvements: derive_improvements(improvements),
            submitted_at: Utc::now(),
        }
    }
}

/// Splits free text into improvement tags.
///
/// Commas, semicolons and newlines separate tags. Tags are trimmed, blanks
/// dropped, and repeats (ignoring case) keep only their first spelling.
pub fn derive_improvements(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split([',', ';', '\n'])
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct FeedbackStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Aggregate statistics from `GET /feedback-report`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct FeedbackReport {
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_submissions: u64,
    #[serde(default)]
    pub improvement_suggestions: Vec<String>,
    /// Shape is owned by the backend; see [`FeedbackReport::quality_series`].
    #[serde(default)]
    pub quality_trends: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QualityPoint {
    pub label: String,
    pub quality: f64,
}

impl FeedbackReport {
    /// Reads `quality_trends` when it is an array of `{label|month, quality|value}`
    /// points. Entries missing either field are skipped.
    pub fn quality_series(&self) -> Vec<QualityPoint> {
        let Some(points) = self.quality_trends.as_array() else {
            return Vec::new();
        };
        points
            .iter()
            .filter_map(|point| {
                let label = point.get("label").or_else(|| point.get("month"))?.as_str()?;
                let quality = point.get("quality").or_else(|| point.get("value"))?.as_f64()?;
                Some(QualityPoint {
                    label: label.to_string(),
                    quality,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactCategory {
    #[default]
    General,
    Support,
    Feature,
    Bug,
    Feedback,
}

impl ContactCategory {
    pub const ALL: [ContactCategory; 5] = [
        ContactCategory::General,
        ContactCategory::Support,
        ContactCategory::Feature,
        ContactCategory::Bug,
        ContactCategory::Feedback,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            ContactCategory::General => "general",
            ContactCategory::Support => "support",
            ContactCategory::Feature => "feature",
            ContactCategory::Bug => "bug",
            ContactCategory::Feedback => "feedback",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactCategory::General => "General Inquiry",
            ContactCategory::Support => "Technical Support",
            ContactCategory::Feature => "Feature Request",
            ContactCategory::Bug => "Bug Report",
            ContactCategory::Feedback => "Product Feedback",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

pub const CONTACT_SOURCE: &str = "web_contact_form";

/// Body of `POST /feedback`, sent by the contact form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub rating: Rating,
    pub category: ContactCategory,
    pub timestamp: DateTime<Utc>,
    pub source: &'static str,
}

impl ContactMessage {
    pub fn new(
        name: &str,
        email: &str,
        company: &str,
        message: &str,
        rating: Rating,
        category: ContactCategory,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            company: company.trim().to_string(),
            message: message.trim().to_string(),
            rating,
            category,
            timestamp: Utc::now(),
            source: CONTACT_SOURCE,
        }
    }

    /// Name, email and message are required.
    pub fn validate(&self) -> Result<(), ModelError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(label, _)| label)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ModelError::MissingFields(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rating_is_bounded() {
        assert!(Rating::new(0).is_err());
        assert_eq!(Rating::new(1).map(|r| r.get()), Ok(1));
        assert_eq!(Rating::new(5).map(|r| r.get()), Ok(5));
        assert_eq!(Rating::new(6), Err(ModelError::RatingOutOfRange(6)));
        assert!(serde_json::from_value::<Rating>(json!(9)).is_err());
    }

    #[test]
    fn improvements_are_split_and_deduplicated() {
        assert_eq!(
            derive_improvements("More formats, faster exports;\nmore formats\n , Parquet"),
            vec!["More formats", "faster exports", "Parquet"]
        );
        assert!(derive_improvements(" ,; \n").is_empty());
    }

    #[test]
    fn submission_wire_body_has_no_timestamp() {
        let rating = Rating::new(4).unwrap();
        let submission = FeedbackSubmission::new("ds-1", rating, " great ", "csv, json");
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({
                "dataset_id": "ds-1",
                "rating": 4,
                "comments": "great",
                "improvements": ["csv", "json"]
            })
        );
    }

    #[test]
    fn contact_requires_name_email_message() {
        let bug = ContactCategory::Bug;
        let message = ContactMessage::new(" ", "a@b.c", "", "", Rating::default(), bug);
        assert_eq!(
            message.validate(),
            Err(ModelError::MissingFields(vec!["name", "message"]))
        );
        let message = ContactMessage::new("Ana", "a@b.c", "", "Hi", Rating::default(), bug);
        assert!(message.validate().is_ok());
        let body = serde_json::to_value(&message).unwrap();
        assert_eq!(body["category"], "bug");
        assert_eq!(body["source"], CONTACT_SOURCE);
        assert_eq!(body["rating"], 5);
    }

    #[test]
    fn quality_series_reads_points() {
        let report: FeedbackReport = serde_json::from_value(json!({
            "average_rating": 4.2,
            "total_submissions": 12,
            "quality_trends": [
                {"month": "Jan", "quality": 78},
                {"label": "Feb", "value": 82.5},
                {"month": "Mar"}
            ]
        }))
        .unwrap();
        let series = report.quality_series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].label, "Feb");
        assert_eq!(series[1].quality, 82.5);
        assert!(report.improvement_suggestions.is_empty());
    }

    #[test]
    fn non_array_trends_yield_no_series() {
        let report = FeedbackReport {
            quality_trends: json!({"trend": "up"}),
            ..FeedbackReport::default()
        };
        assert!(report.quality_series().is_empty());
    }
}
