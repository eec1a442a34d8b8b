//! Mock data of the security and guardrails dashboard.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guardrail {
    AnonymizeData,
    BalanceDemographics,
    ContentModeration,
    BiasDetection,
}

impl Guardrail {
    pub const ALL: [Guardrail; 4] = [
        Guardrail::AnonymizeData,
        Guardrail::BalanceDemographics,
        Guardrail::ContentModeration,
        Guardrail::BiasDetection,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Guardrail::AnonymizeData => "Anonymize Data",
            Guardrail::BalanceDemographics => "Balance Demographics",
            Guardrail::ContentModeration => "Content Moderation",
            Guardrail::BiasDetection => "Bias Detection",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Guardrail::AnonymizeData => "Strip or mask personally identifiable information",
            Guardrail::BalanceDemographics => "Keep demographic distributions representative",
            Guardrail::ContentModeration => "Filter harmful or inappropriate content",
            Guardrail::BiasDetection => "Flag skewed or unfair patterns in generated data",
        }
    }
}

/// Guardrail switches. All enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardrailSettings {
    pub anonymize_data: bool,
    pub balance_demographics: bool,
    pub content_moderation: bool,
    pub bias_detection: bool,
}

impl Default for GuardrailSettings {
    fn default() -> Self {
        Self {
            anonymize_data: true,
            balance_demographics: true,
            content_moderation: true,
            bias_detection: true,
        }
    }
}

impl GuardrailSettings {
    pub fn is_enabled(&self, guardrail: Guardrail) -> bool {
        match guardrail {
            Guardrail::AnonymizeData => self.anonymize_data,
            Guardrail::BalanceDemographics => self.balance_demographics,
            Guardrail::ContentModeration => self.content_moderation,
            Guardrail::BiasDetection => self.bias_detection,
        }
    }

    pub fn toggle(&mut self, guardrail: Guardrail) {
        let flag = match guardrail {
            Guardrail::AnonymizeData => &mut self.anonymize_data,
            Guardrail::BalanceDemographics => &mut self.balance_demographics,
            Guardrail::ContentModeration => &mut self.content_moderation,
            Guardrail::BiasDetection => &mut self.bias_detection,
        };
        *flag = !*flag;
    }

    pub fn enabled_count(&self) -> usize {
        Guardrail::ALL.iter().filter(|g| self.is_enabled(**g)).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationStatus {
    Resolved,
    Reviewing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub kind: &'static str,
    pub time: &'static str,
    pub status: ViolationStatus,
    pub severity: Severity,
}

pub const VIOLATIONS: [Violation; 3] = [
    Violation {
        kind: "PII Detected",
        time: "2 min ago",
        status: ViolationStatus::Resolved,
        severity: Severity::High,
    },
    Violation {
        kind: "Bias Found",
        time: "15 min ago",
        status: ViolationStatus::Resolved,
        severity: Severity::Medium,
    },
    Violation {
        kind: "Content Flag",
        time: "1 hour ago",
        status: ViolationStatus::Reviewing,
        severity: Severity::Low,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplianceStandard {
    pub name: &'static str,
    pub compliant: bool,
    pub description: &'static str,
}

pub const COMPLIANCE_STANDARDS: [ComplianceStandard; 4] = [
    ComplianceStandard {
        name: "GDPR",
        compliant: true,
        description: "General Data Protection Regulation",
    },
    ComplianceStandard {
        name: "HIPAA",
        compliant: true,
        description: "Health Insurance Portability and Accountability Act",
    },
    ComplianceStandard {
        name: "PCI DSS",
        compliant: true,
        description: "Payment Card Industry Data Security Standard",
    },
    ComplianceStandard {
        name: "SOC 2",
        compliant: true,
        description: "Service Organization Control 2",
    },
];

pub const DEFAULT_RISK_SCORE: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u32) -> Self {
        if score < 20 {
            RiskLevel::Low
        } else if score < 50 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_bands() {
        assert_eq!(RiskLevel::from_score(DEFAULT_RISK_SCORE), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(19), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(20), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(49), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(50), RiskLevel::High);
    }

    #[test]
    fn toggle_flips_only_one_guardrail() {
        let mut settings = GuardrailSettings::default();
        assert_eq!(settings.enabled_count(), 4);
        settings.toggle(Guardrail::BiasDetection);
        assert!(!settings.is_enabled(Guardrail::BiasDetection));
        assert!(settings.is_enabled(Guardrail::ContentModeration));
        assert_eq!(settings.enabled_count(), 3);
        settings.toggle(Guardrail::BiasDetection);
        assert_eq!(settings, GuardrailSettings::default());
    }
}
