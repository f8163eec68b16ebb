use crate::models::{AnalysisResult, Findings, RiskLabel};
use crate::scoring::retention;
use crate::scoring::rules::{count_occurrences, RuleSet, RULES};

/// Score a consent notice against the canonical [`RULES`].
///
/// Empty or whitespace-only input yields [`AnalysisResult::no_content`].
pub fn score(text: &str) -> AnalysisResult {
    score_with(text, &RULES)
}

pub fn score_with(text: &str, rules: &RuleSet) -> AnalysisResult {
    if text.trim().is_empty() {
        return AnalysisResult::no_content();
    }

    let findings = evaluate_with(text, rules);
    let score = findings.score();

    AnalysisResult {
        score,
        label: RiskLabel::from_score(score),
        bullets: bullets(&findings),
    }
}

/// Evaluate every signal without collapsing them into a score.
pub fn evaluate(text: &str) -> Findings {
    evaluate_with(text, &RULES)
}

pub fn evaluate_with(text: &str, rules: &RuleSet) -> Findings {
    let third_party = rules.third_party.evaluate(text);
    let sensitive = rules.sensitive.evaluate(text);
    let marketing = rules.marketing.evaluate(text);
    let categories = rules.data_categories.evaluate(text);
    let (retention, retention_points) = retention::assess(text, &rules.retention);
    let opt_out = rules.opt_out.evaluate(text);
    let anonymization = rules.anonymization.evaluate(text);

    let short_text = text.chars().count() < rules.short_text.min_chars;

    Findings {
        third_party_hits: third_party.hits,
        third_party_points: third_party.points,
        named_recipients: count_occurrences(text, rules.corporate_markers),
        sensitive: sensitive.hits > 0,
        sensitive_points: sensitive.points,
        marketing: marketing.hits > 0,
        marketing_points: marketing.points,
        data_categories: categories.hits,
        data_category_points: categories.points,
        retention,
        retention_points,
        opt_out: opt_out.hits > 0,
        opt_out_points: opt_out.points,
        anonymized: anonymization.hits > 0,
        anonymization_points: anonymization.points,
        short_text,
        short_text_points: if short_text { rules.short_text.penalty } else { 0 },
    }
}

/// One line per signal group in fixed order, plus a mitigation line when any fired.
pub fn bullets(findings: &Findings) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Third-party disclosure/outsourcing: {} (named recipients: ~{})",
            if findings.third_party_hits > 0 { "present" } else { "absent" },
            findings.named_recipients
        ),
        format!("Sensitive data: {}", yes_no(findings.sensitive)),
        format!("Marketing use: {}", yes_no(findings.marketing)),
        format!("Personal data categories detected: {}", findings.data_categories),
        format!("Retention: {}", findings.retention),
    ];

    let mut mitigations = Vec::new();
    if findings.opt_out {
        mitigations.push("opt-out/withdrawal");
    }
    if findings.anonymized {
        mitigations.push("anonymization/pseudonymization");
    }
    if !mitigations.is_empty() {
        lines.push(format!("Mitigating factors: {}", mitigations.join(", ")));
    }

    lines
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
