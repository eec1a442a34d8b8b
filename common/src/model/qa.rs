use std::fmt;

use serde::{Deserialize, Serialize};

pub const PAIR_COUNT_MIN: u32 = 10;
pub const PAIR_COUNT_MAX: u32 = 500;
pub const PAIR_COUNT_STEP: u32 = 10;
pub const PAIR_COUNT_DEFAULT: u32 = 50;

pub const COMPLEXITY_SLIDER_MAX: u32 = 100;
pub const COMPLEXITY_SLIDER_DEFAULT: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    #[default]
    Healthcare,
    Finance,
    Education,
    Business,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Healthcare,
        Domain::Finance,
        Domain::Education,
        Domain::Business,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Domain::Healthcare => "healthcare",
            Domain::Finance => "finance",
            Domain::Education => "education",
            Domain::Business => "business",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Domain::Healthcare => "Healthcare",
            Domain::Finance => "Finance",
            Domain::Education => "Education",
            Domain::Business => "Business",
        }
    }

    /// Content constraints sent with every request for this domain.
    pub fn constraints(&self) -> &'static [&'static str] {
        match self {
            Domain::Healthcare => &[
                "Medical accuracy",
                "Evidence-based",
                "Patient-friendly",
                "Clinical guidelines",
            ],
            Domain::Finance => &[
                "Regulatory compliance",
                "Numerical accuracy",
                "Risk disclosure",
                "Plain language",
            ],
            Domain::Education => &[
                "Age-appropriate",
                "Curriculum-aligned",
                "Factual accuracy",
                "Clear explanations",
            ],
            Domain::Business => &[
                "Industry terminology",
                "Actionable insights",
                "Professional tone",
                "Current practices",
            ],
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
}

impl Complexity {
    /// Maps the 0..=100 complexity slider onto the three backend levels.
    pub fn from_slider(value: u32) -> Self {
        if value < 30 {
            Complexity::Beginner
        } else if value < 70 {
            Complexity::Intermediate
        } else {
            Complexity::Advanced
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Complexity::Beginner => "Basic terminology and concepts",
            Complexity::Intermediate => "Intermediate technical depth",
            Complexity::Advanced => "Advanced expert-level content",
        }
    }
}

/// Body of `POST /generate/qa`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaRequest {
    pub domain: Domain,
    pub complexity: Complexity,
    pub num_pairs: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
}

impl QaRequest {
    /// `num_pairs` is taken verbatim from the slider.
    pub fn new(domain: Domain, complexity_slider: u32, num_pairs: u32, context: &str) -> Self {
        let context = context.trim();
        let constraints = domain.constraints().join(", ");
        Self {
            domain,
            complexity: Complexity::from_slider(complexity_slider),
            num_pairs,
            context: (!context.is_empty()).then(|| context.to_string()),
            constraints: (!constraints.is_empty()).then_some(constraints),
        }
    }

    pub fn success_message(&self) -> String {
        format!(
            "Successfully generated {} {} Q&A pairs.",
            self.num_pairs,
            self.domain.label()
        )
    }
}

/// A canned pair shown in the "Sample Output" card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePair {
    pub question: &'static str,
    pub answer: &'static str,
    pub confidence: u8,
}

pub const SAMPLE_PAIRS: [SamplePair; 3] = [
    SamplePair {
        question: "What are the primary symptoms of Type 2 diabetes?",
        answer: "The primary symptoms include increased thirst, frequent urination, \
                 increased hunger, unintended weight loss, fatigue, and blurred vision.",
        confidence: 94,
    },
    SamplePair {
        question: "How is diabetes diagnosed?",
        answer: "Diabetes is typically diagnosed through blood tests measuring glucose \
                 levels, including fasting glucose, random glucose, or HbA1c tests.",
        confidence: 97,
    },
    SamplePair {
        question: "What lifestyle changes help manage diabetes?",
        answer: "Key lifestyle changes include maintaining a healthy diet, regular \
                 exercise, weight management, monitoring blood sugar, and taking \
                 medications as prescribed.",
        confidence: 92,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complexity_thresholds() {
        assert_eq!(Complexity::from_slider(0), Complexity::Beginner);
        assert_eq!(Complexity::from_slider(29), Complexity::Beginner);
        assert_eq!(Complexity::from_slider(30), Complexity::Intermediate);
        assert_eq!(Complexity::from_slider(69), Complexity::Intermediate);
        assert_eq!(Complexity::from_slider(70), Complexity::Advanced);
        assert_eq!(Complexity::from_slider(100), Complexity::Advanced);
    }

    #[test]
    fn pair_count_matches_every_slider_position() {
        for value in (PAIR_COUNT_MIN..=PAIR_COUNT_MAX).step_by(PAIR_COUNT_STEP as usize) {
            let request = QaRequest::new(Domain::Finance, 50, value, "");
            assert_eq!(request.num_pairs, value);
            let body = serde_json::to_value(&request).unwrap();
            assert_eq!(body["num_pairs"], json!(value));
        }
    }

    #[test]
    fn success_message_names_submitted_domain_and_count() {
        let request = QaRequest::new(Domain::Finance, 20, 120, "");
        assert_eq!(
            request.success_message(),
            "Successfully generated 120 Finance Q&A pairs."
        );
    }

    #[test]
    fn blank_context_is_omitted() {
        let request = QaRequest::new(Domain::Healthcare, 50, 30, "   ");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "domain": "healthcare",
                "complexity": "intermediate",
                "num_pairs": 30,
                "constraints":
                    "Medical accuracy, Evidence-based, Patient-friendly, Clinical guidelines"
            })
        );
    }

    #[test]
    fn context_is_trimmed() {
        let request = QaRequest::new(Domain::Education, 90, 10, " Focus on algebra \n");
        assert_eq!(request.context.as_deref(), Some("Focus on algebra"));
        assert_eq!(request.complexity, Complexity::Advanced);
    }
}
