use serde::{Deserialize, Serialize};

/// Outcome of scoring one consent notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u8,
    pub label: RiskLabel,
    pub bullets: Vec<String>,
}

impl AnalysisResult {
    pub fn no_content() -> Self {
        Self {
            score: 0,
            label: RiskLabel::NoContent,
            bullets: Vec::new(),
        }
    }
}

/// Risk tiers, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLabel {
    NoContent,
    Good,
    Low,
    Caution,
    Danger,
}

impl RiskLabel {
    /// Map a clamped score onto its tier.
    ///
    /// | score  | label   |
    /// |--------|---------|
    /// | < 30   | good    |
    /// | 30–59  | low     |
    /// | 60–89  | caution |
    /// | >= 90  | danger  |
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => RiskLabel::Good,
            30..=59 => RiskLabel::Low,
            60..=89 => RiskLabel::Caution,
            _ => RiskLabel::Danger,
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLabel::NoContent => write!(f, "no-content"),
            RiskLabel::Good => write!(f, "good"),
            RiskLabel::Low => write!(f, "low"),
            RiskLabel::Caution => write!(f, "caution"),
            RiskLabel::Danger => write!(f, "danger"),
        }
    }
}

/// How long the notice says collected data is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionTerm {
    Indefinite,
    AtLeastYears(u32),
    WithinYears(u32),
    UntilPurposeFulfilled,
    Unspecified,
}

impl std::fmt::Display for RetentionTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetentionTerm::Indefinite => write!(f, "indefinite/unclear"),
            RetentionTerm::AtLeastYears(n) => write!(f, "{}+ years", n),
            RetentionTerm::WithinYears(n) => write!(f, "within {} years", n),
            RetentionTerm::UntilPurposeFulfilled => {
                write!(f, "destroyed upon purpose fulfillment/termination")
            }
            RetentionTerm::Unspecified => write!(f, "unspecified/general"),
        }
    }
}

/// Per-signal breakdown that an [`AnalysisResult`] is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Findings {
    /// Total third-party keyword hits (uncapped).
    pub third_party_hits: usize,
    pub third_party_points: i32,
    /// Business-entity markers; reported, never scored.
    pub named_recipients: usize,
    pub sensitive: bool,
    pub sensitive_points: i32,
    pub marketing: bool,
    pub marketing_points: i32,
    pub data_categories: usize,
    pub data_category_points: i32,
    pub retention: RetentionTerm,
    pub retention_points: i32,
    pub opt_out: bool,
    pub opt_out_points: i32,
    pub anonymized: bool,
    pub anonymization_points: i32,
    pub short_text: bool,
    pub short_text_points: i32,
}

impl Findings {
    /// Signed sum of all contributions before clamping.
    pub fn raw_total(&self) -> i32 {
        self.third_party_points
            + self.sensitive_points
            + self.marketing_points
            + self.data_category_points
            + self.retention_points
            + self.opt_out_points
            + self.anonymization_points
            + self.short_text_points
    }

    pub fn score(&self) -> u8 {
        self.raw_total().clamp(0, 100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_boundaries() {
        assert_eq!(RiskLabel::from_score(0), RiskLabel::Good);
        assert_eq!(RiskLabel::from_score(29), RiskLabel::Good);
        assert_eq!(RiskLabel::from_score(30), RiskLabel::Low);
        assert_eq!(RiskLabel::from_score(59), RiskLabel::Low);
        assert_eq!(RiskLabel::from_score(60), RiskLabel::Caution);
        assert_eq!(RiskLabel::from_score(89), RiskLabel::Caution);
        assert_eq!(RiskLabel::from_score(90), RiskLabel::Danger);
        assert_eq!(RiskLabel::from_score(100), RiskLabel::Danger);
    }

    #[test]
    fn test_label_ordering() {
        assert!(RiskLabel::NoContent < RiskLabel::Good);
        assert!(RiskLabel::Caution < RiskLabel::Danger);
    }

    #[test]
    fn test_label_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&RiskLabel::NoContent).unwrap(),
            "\"no-content\""
        );
        assert_eq!(serde_json::to_string(&RiskLabel::Danger).unwrap(), "\"danger\"");
    }

    #[test]
    fn test_retention_descriptors() {
        assert_eq!(RetentionTerm::AtLeastYears(5).to_string(), "5+ years");
        assert_eq!(RetentionTerm::WithinYears(1).to_string(), "within 1 years");
        assert_eq!(RetentionTerm::Unspecified.to_string(), "unspecified/general");
    }
}
