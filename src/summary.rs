use serde::Serialize;

use crate::models::{AnalysisResult, RiskLabel};
use crate::scoring;

/// Display-oriented wrapper around an [`AnalysisResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub score: u8,
    pub label: RiskLabel,
    pub bullets: Vec<String>,
    /// First `preview_chars` characters of the input.
    pub preview: String,
    pub truncated: bool,
    pub used_chars: usize,
    pub total_chars: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Score the full text and attach a capped preview plus an optional result link.
///
/// Truncation only affects `preview`; the score always covers the whole input.
pub fn summarize(text: &str, preview_chars: usize, frontend_base_url: Option<&str>) -> Summary {
    let AnalysisResult {
        score,
        label,
        bullets,
    } = scoring::score(text);

    let total_chars = text.chars().count();
    let used_chars = total_chars.min(preview_chars);
    let preview: String = text.chars().take(used_chars).collect();

    Summary {
        score,
        label,
        bullets,
        preview,
        truncated: total_chars > preview_chars,
        used_chars,
        total_chars,
        link: frontend_base_url.and_then(|base| result_link(base, text)),
    }
}

/// `{base}/?text=...` with trailing slashes stripped from `base`.
pub fn result_link(base: &str, text: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        return None;
    }
    Some(format!("{}/?text={}", base, urlencoding::encode(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTICE: &str = "당사는 귀하의 이름, 이메일, 전화번호를 마케팅 목적으로 제3자에게 제공할 수 있습니다. 보유기간은 영구입니다.";

    #[test]
    fn test_truncation_keeps_full_score() {
        let full = summarize(NOTICE, 10_000, None);
        let capped = summarize(NOTICE, 10, None);

        assert!(!full.truncated);
        assert!(capped.truncated);
        assert_eq!(capped.preview.chars().count(), 10);
        assert_eq!(capped.used_chars, 10);
        assert_eq!(capped.total_chars, NOTICE.chars().count());
        assert_eq!(capped.score, full.score);
        assert_eq!(capped.bullets, full.bullets);
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let summary = summarize("개인정보", 2, None);
        assert_eq!(summary.preview, "개인");
        assert_eq!(summary.used_chars, 2);
    }

    #[test]
    fn test_exact_length_is_not_truncated() {
        let summary = summarize("abcde", 5, None);
        assert!(!summary.truncated);
        assert_eq!(summary.used_chars, 5);
    }

    #[test]
    fn test_link_strips_trailing_slash() {
        assert_eq!(
            result_link("https://example.com/", "a b").as_deref(),
            Some("https://example.com/?text=a%20b")
        );
        assert_eq!(
            result_link("https://example.com///", "x").as_deref(),
            Some("https://example.com/?text=x")
        );
    }

    #[test]
    fn test_link_omitted_without_base() {
        assert_eq!(summarize(NOTICE, 100, None).link, None);
        assert_eq!(summarize(NOTICE, 100, Some("  ")).link, None);
    }

    #[test]
    fn test_link_encodes_full_text() {
        let summary = summarize("영구", 1, Some("https://example.com"));
        assert_eq!(
            summary.link.as_deref(),
            Some("https://example.com/?text=%EC%98%81%EA%B5%AC")
        );
    }

    #[test]
    fn test_empty_input() {
        let summary = summarize("", 100, Some("https://example.com"));
        assert_eq!(summary.label, RiskLabel::NoContent);
        assert!(summary.bullets.is_empty());
        assert!(!summary.truncated);
    }

    #[test]
    fn test_link_skipped_in_json_when_absent() {
        let json = serde_json::to_value(summarize("abc", 10, None)).unwrap();
        assert!(json.get("link").is_none());
        assert_eq!(json["label"], "good");
    }
}
