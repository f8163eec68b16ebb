//! Canonical rule tables. Every weight and cap used by the scorer lives here.

/// How a keyword category turns matches into points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every occurrence of every keyword counts.
    Count { per_hit: i32, cap: i32 },
    /// Fixed points if any keyword occurs at least once.
    Presence { points: i32 },
    /// Each keyword counts once, however often it repeats.
    Distinct { per_keyword: i32, cap: i32 },
}

/// A keyword category together with its scoring mode.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub mode: Mode,
}

/// Result of evaluating one [`Rule`] against a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleHit {
    /// Total occurrences for `Count`, 0/1 for `Presence`, distinct keywords for `Distinct`.
    pub hits: usize,
    pub points: i32,
}

impl Rule {
    pub fn evaluate(&self, text: &str) -> RuleHit {
        match self.mode {
            Mode::Count { per_hit, cap } => {
                let hits = count_occurrences(text, self.keywords);
                let points = (hits.min(i32::MAX as usize) as i32)
                    .saturating_mul(per_hit)
                    .min(cap);
                RuleHit { hits, points }
            }
            Mode::Presence { points } => {
                if contains_any(text, self.keywords) {
                    RuleHit { hits: 1, points }
                } else {
                    RuleHit { hits: 0, points: 0 }
                }
            }
            Mode::Distinct { per_keyword, cap } => {
                let hits = self.keywords.iter().filter(|k| text.contains(**k)).count();
                RuleHit {
                    hits,
                    points: (hits as i32 * per_keyword).min(cap),
                }
            }
        }
    }
}

/// Retention-period rule: phrase tiers plus the numeric year scan.
#[derive(Debug, Clone, Copy)]
pub struct RetentionRule {
    pub indefinite: &'static [&'static str],
    pub indefinite_points: i32,
    pub event_driven: &'static [&'static str],
    /// Numbers at or above this are calendar years, not durations.
    pub calendar_year_floor: u32,
    pub long_min_years: u32,
    pub long_points: i32,
    pub short_points: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct ShortTextRule {
    pub min_chars: usize,
    pub penalty: i32,
}

/// The full, immutable rule set.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub third_party: Rule,
    pub corporate_markers: &'static [&'static str],
    pub sensitive: Rule,
    pub marketing: Rule,
    pub data_categories: Rule,
    pub retention: RetentionRule,
    pub opt_out: Rule,
    pub anonymization: Rule,
    pub short_text: ShortTextRule,
}

pub static RULES: RuleSet = RuleSet {
    third_party: Rule {
        keywords: &["제3자", "제 3자", "제삼자", "제공", "위탁", "공유"],
        mode: Mode::Count { per_hit: 5, cap: 30 },
    },
    corporate_markers: &["(주)", "㈜", "주식회사", "유한회사", "Inc.", "Corp.", "Ltd.", "LLC"],
    sensitive: Rule {
        keywords: &[
            "주민등록번호",
            "주민번호",
            "외국인등록번호",
            "여권번호",
            "운전면허",
            "생체",
            "지문",
            "홍채",
            "안면",
            "건강",
            "의료",
            "병력",
            "유전",
            "범죄",
            "종교",
            "정치",
            "성생활",
        ],
        mode: Mode::Presence { points: 25 },
    },
    marketing: Rule {
        keywords: &["마케팅", "광고", "홍보", "프로모션", "이벤트", "맞춤형", "뉴스레터"],
        mode: Mode::Presence { points: 15 },
    },
    data_categories: Rule {
        keywords: &[
            "이름",
            "성명",
            "생년월일",
            "성별",
            "주소",
            "전화번호",
            "휴대폰",
            "이메일",
            "계좌",
            "위치",
            "쿠키",
            "기기",
            "IP",
            "접속기록",
            "로그",
        ],
        mode: Mode::Distinct { per_keyword: 2, cap: 20 },
    },
    retention: RetentionRule {
        indefinite: &["영구", "무기한", "기한 없이", "기한없이", "별도의 기간 없이"],
        indefinite_points: 20,
        event_driven: &[
            "목적 달성",
            "목적달성",
            "목적이 달성",
            "탈퇴 시",
            "탈퇴시",
            "계약 종료",
            "파기",
        ],
        calendar_year_floor: 100,
        long_min_years: 3,
        long_points: 10,
        short_points: 5,
    },
    opt_out: Rule {
        keywords: &[
            "철회",
            "동의를 거부",
            "거부할 수",
            "거부할 권리",
            "수신 거부",
            "수신거부",
            "옵트아웃",
        ],
        mode: Mode::Presence { points: -10 },
    },
    anonymization: Rule {
        keywords: &["익명", "가명", "비식별"],
        mode: Mode::Presence { points: -5 },
    },
    short_text: ShortTextRule {
        min_chars: 50,
        penalty: -10,
    },
};

/// Sum of non-overlapping occurrences of each keyword, keywords counted independently.
pub fn count_occurrences(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().map(|k| text.matches(*k).count()).sum()
}

pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(*k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_mode_caps() {
        let six = "제3자 ".repeat(6);
        let hundred = "제3자 ".repeat(100);
        assert_eq!(RULES.third_party.evaluate(&six), RuleHit { hits: 6, points: 30 });
        assert_eq!(RULES.third_party.evaluate(&hundred).points, 30);
        assert_eq!(RULES.third_party.evaluate(&hundred).hits, 100);
    }

    #[test]
    fn test_count_mode_sums_across_keywords() {
        let hit = RULES.third_party.evaluate("제3자에게 제공하거나 처리를 위탁합니다");
        assert_eq!(hit, RuleHit { hits: 3, points: 15 });
    }

    #[test]
    fn test_presence_mode_ignores_repeats() {
        let once = RULES.marketing.evaluate("마케팅");
        let many = RULES.marketing.evaluate("마케팅 광고 홍보 마케팅");
        assert_eq!(once.points, 15);
        assert_eq!(many.points, 15);
        assert_eq!(RULES.marketing.evaluate("서비스 제공").points, 0);
    }

    #[test]
    fn test_distinct_mode_counts_each_keyword_once() {
        let hit = RULES.data_categories.evaluate("이름, 이름, 이름, 주소");
        assert_eq!(hit, RuleHit { hits: 2, points: 4 });
    }

    #[test]
    fn test_distinct_mode_caps() {
        let all = RULES.data_categories.keywords.join(" ");
        let hit = RULES.data_categories.evaluate(&all);
        assert_eq!(hit.hits, RULES.data_categories.keywords.len());
        assert_eq!(hit.points, 20);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(RULES.data_categories.evaluate("ip address").hits, 0);
        assert_eq!(RULES.data_categories.evaluate("IP address").hits, 1);
    }

    #[test]
    fn test_negative_presence_points() {
        assert_eq!(RULES.opt_out.evaluate("동의를 철회할 수 있습니다").points, -10);
        assert_eq!(RULES.anonymization.evaluate("가명처리").points, -5);
    }
}
