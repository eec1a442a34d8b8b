//! Figures behind the analytics hub. All client-side arithmetic or static.

use crate::model::feedback::{FeedbackReport, QualityPoint};

pub const TEAM_SIZE_MIN: u32 = 1;
pub const TEAM_SIZE_MAX: u32 = 50;
pub const TEAM_SIZE_DEFAULT: u32 = 5;

pub const MONTHLY_COST_PER_PERSON: f64 = 8000.0;
pub const TIME_SAVINGS_RATIO: f64 = 0.4;
pub const ANNUAL_ROI_PERCENT: u32 = 340;
const MAX_BADGES: usize = 5;

/// Savings estimate of the ROI calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiEstimate {
    pub team_size: u32,
    pub monthly_cost: f64,
    pub monthly_savings: f64,
}

impl RoiEstimate {
    pub fn for_team(team_size: u32) -> Self {
        let team_size = team_size.clamp(TEAM_SIZE_MIN, TEAM_SIZE_MAX);
        let monthly_cost = f64::from(team_size) * MONTHLY_COST_PER_PERSON;
        Self {
            team_size,
            monthly_cost,
            monthly_savings: monthly_cost * TIME_SAVINGS_RATIO,
        }
    }

    pub fn time_saved_percent(&self) -> u32 {
        (TIME_SAVINGS_RATIO * 100.0).round() as u32
    }

    pub fn annual_roi_percent(&self) -> u32 {
        ANNUAL_ROI_PERCENT
    }

    /// Number of dollar badges to animate, one per $10k saved, at most five.
    pub fn badge_count(&self) -> usize {
        ((self.monthly_savings / 10_000.0).floor() as usize).min(MAX_BADGES)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthMetric {
    pub name: &'static str,
    pub value: u32,
    pub description: &'static str,
}

pub const HEALTH_METRICS: [HealthMetric; 3] = [
    HealthMetric {
        name: "Completeness",
        value: 98,
        description: "All required fields populated with valid data",
    },
    HealthMetric {
        name: "Validity",
        value: 94,
        description: "Data follows specified formats and constraints",
    },
    HealthMetric {
        name: "Specificity",
        value: 87,
        description: "Domain-specific patterns and relationships maintained",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseCaseImpact {
    pub title: &'static str,
    pub impact: Impact,
    pub time_reduction: &'static str,
    pub description: &'static str,
}

pub const USE_CASES: [UseCaseImpact; 3] = [
    UseCaseImpact {
        title: "ML Model Training",
        impact: Impact::High,
        time_reduction: "60%",
        description: "Faster model development with quality synthetic data",
    },
    UseCaseImpact {
        title: "Testing & Validation",
        impact: Impact::Medium,
        time_reduction: "45%",
        description: "Comprehensive test coverage without privacy concerns",
    },
    UseCaseImpact {
        title: "Development Environment",
        impact: Impact::High,
        time_reduction: "70%",
        description: "Instant data availability for development teams",
    },
];

const STATIC_TIMELINE: [(&str, f64); 6] = [
    ("Jan", 78.0),
    ("Feb", 82.0),
    ("Mar", 85.0),
    ("Apr", 89.0),
    ("May", 92.0),
    ("Jun", 95.0),
];

/// Quality series for the timeline card: the report's when it has one,
/// the static six-month series otherwise.
pub fn quality_timeline(report: Option<&FeedbackReport>) -> Vec<QualityPoint> {
    let series = report.map(FeedbackReport::quality_series).unwrap_or_default();
    if !series.is_empty() {
        return series;
    }
    STATIC_TIMELINE
        .iter()
        .map(|(label, quality)| QualityPoint {
            label: label.to_string(),
            quality: *quality,
        })
        .collect()
}

/// Percentage points gained between the first and last point.
pub fn quality_gain(points: &[QualityPoint]) -> f64 {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => last.quality - first.quality,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roi_for_default_team() {
        let roi = RoiEstimate::for_team(TEAM_SIZE_DEFAULT);
        assert_eq!(roi.monthly_cost, 40_000.0);
        assert_eq!(roi.monthly_savings, 16_000.0);
        assert_eq!(roi.badge_count(), 1);
        assert_eq!(roi.time_saved_percent(), 40);
    }

    #[test]
    fn badges_are_capped() {
        assert_eq!(RoiEstimate::for_team(50).badge_count(), 5);
        assert_eq!(RoiEstimate::for_team(1).badge_count(), 0);
    }

    #[test]
    fn team_size_is_clamped() {
        assert_eq!(RoiEstimate::for_team(0).team_size, TEAM_SIZE_MIN);
        assert_eq!(RoiEstimate::for_team(500).team_size, TEAM_SIZE_MAX);
    }

    #[test]
    fn timeline_prefers_report_series() {
        let report = FeedbackReport {
            quality_trends: json!([{"label": "W1", "quality": 70}, {"label": "W2", "quality": 75}]),
            ..FeedbackReport::default()
        };
        let points = quality_timeline(Some(&report));
        assert_eq!(points.len(), 2);
        assert_eq!(quality_gain(&points), 5.0);
    }

    #[test]
    fn timeline_falls_back_to_static_series() {
        let points = quality_timeline(None);
        assert_eq!(points.len(), 6);
        assert_eq!(quality_gain(&points), 17.0);
        assert_eq!(quality_timeline(Some(&FeedbackReport::default())).len(), 6);
    }
}
