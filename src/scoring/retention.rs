use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::RetentionTerm;
use crate::scoring::rules::{contains_any, RetentionRule};

/// A run of digits immediately followed by the year unit.
static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)년").unwrap());

/// Classify how long the notice retains data and how many points that adds.
///
/// Indefinite phrasing wins outright. Otherwise the longest "N년" duration
/// decides the points, and event-driven wording (purpose fulfilled, account
/// closed, destruction) replaces the descriptor without refunding them.
pub fn assess(text: &str, rule: &RetentionRule) -> (RetentionTerm, i32) {
    if contains_any(text, rule.indefinite) {
        return (RetentionTerm::Indefinite, rule.indefinite_points);
    }

    let (mut term, points) = match max_duration_years(text, rule.calendar_year_floor) {
        Some(years) if years >= rule.long_min_years => {
            (RetentionTerm::AtLeastYears(years), rule.long_points)
        }
        Some(years) if years >= 1 => (RetentionTerm::WithinYears(years), rule.short_points),
        _ => (RetentionTerm::Unspecified, 0),
    };

    if contains_any(text, rule.event_driven) {
        term = RetentionTerm::UntilPurposeFulfilled;
    }

    (term, points)
}

/// Largest "N년" value below `calendar_year_floor`.
///
/// Values at or above the floor ("2020년") are dates, not durations. Digit
/// runs too long for `u32` are dropped for the same reason.
pub fn max_duration_years(text: &str, calendar_year_floor: u32) -> Option<u32> {
    YEAR_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .filter(|n| *n < calendar_year_floor)
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::rules::RULES;

    fn assess_default(text: &str) -> (RetentionTerm, i32) {
        assess(text, &RULES.retention)
    }

    #[test]
    fn test_calendar_year_is_not_a_duration() {
        assert_eq!(max_duration_years("2020년에 수집", 100), None);
        assert_eq!(
            assess_default("개인정보는 2020년에 수집되었습니다"),
            (RetentionTerm::Unspecified, 0)
        );
    }

    #[test]
    fn test_calendar_year_ignored_alongside_duration() {
        assert_eq!(
            assess_default("2023년 개정, 보유기간 2년"),
            (RetentionTerm::WithinYears(2), 5)
        );
    }

    #[test]
    fn test_long_duration() {
        assert_eq!(
            assess_default("1년 또는 5년간 보관합니다"),
            (RetentionTerm::AtLeastYears(5), 10)
        );
        assert_eq!(assess_default("3년"), (RetentionTerm::AtLeastYears(3), 10));
    }

    #[test]
    fn test_zero_years_is_unspecified() {
        assert_eq!(assess_default("0년"), (RetentionTerm::Unspecified, 0));
    }

    #[test]
    fn test_indefinite_short_circuits_numeric_scan() {
        assert_eq!(
            assess_default("영구 보관하며 5년마다 재동의를 받습니다"),
            (RetentionTerm::Indefinite, 20)
        );
    }

    #[test]
    fn test_event_driven_overrides_descriptor_keeps_points() {
        assert_eq!(
            assess_default("5년 보관 후 목적 달성 시 파기합니다"),
            (RetentionTerm::UntilPurposeFulfilled, 10)
        );
        assert_eq!(
            assess_default("회원 탈퇴 시 지체 없이 파기합니다"),
            (RetentionTerm::UntilPurposeFulfilled, 0)
        );
    }

    #[test]
    fn test_overlong_digit_run_discarded() {
        assert_eq!(max_duration_years("99999999999999999999년", 100), None);
        assert_eq!(max_duration_years("99999999999999999999년 2년", 100), Some(2));
    }
}
