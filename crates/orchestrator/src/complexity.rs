//! Additive complexity heuristic used to size the assembled context.
//!
//! Nine independent signals; a request is complex when at least
//! [`COMPLEX_THRESHOLD`] fire.

use serde::Serialize;

pub const COMPLEX_THRESHOLD: usize = 2;

const LONG_MESSAGE_CHARS: usize = 200;

const DOMAIN_KEYWORDS: [&str; 8] = [
    "fundraising",
    "development",
    "marketing",
    "programming",
    "underwriting",
    "audience",
    "community",
    "digital",
];

/// Which signals fired for a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityReport {
    pub score: usize,
    pub signals: Vec<&'static str>,
    pub is_complex: bool,
}

fn any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

/// Score `input` against every signal.
pub fn analyze(input: &str) -> ComplexityReport {
    let text = input.to_lowercase();
    let distinct_domains = DOMAIN_KEYWORDS.iter().filter(|k| text.contains(*k)).count();

    let checks: [(&'static str, bool); 9] = [
        ("long_message", text.chars().count() > LONG_MESSAGE_CHARS),
        ("multiple_questions", text.matches('?').count() > 1),
        ("planning", any(&text, &["strategy", "planning", "approach"])),
        ("depth", any(&text, &["comprehensive", "detailed", "step-by-step"])),
        (
            "develop_and_implement",
            text.contains("develop") && text.contains("implement"),
        ),
        ("resources", any(&text, &["budget", "timeline", "resources"])),
        ("distress", any(&text, &["declining", "struggling", "challenging"])),
        (
            "intense_improvement",
            text.contains("improve") && any(&text, &["significantly", "dramatically"]),
        ),
        ("multi_domain", distinct_domains > 2),
    ];

    let signals: Vec<&'static str> = checks
        .iter()
        .filter(|(_, fired)| *fired)
        .map(|(name, _)| *name)
        .collect();
    let score = signals.len();

    ComplexityReport {
        score,
        signals,
        is_complex: score >= COMPLEX_THRESHOLD,
    }
}

/// True when `input` should get the large context budget.
pub fn is_complex(input: &str) -> bool {
    analyze(input).is_complex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declining_membership_strategy_is_complex() {
        let report = analyze(
            "Why is membership declining and how do we fix it dramatically with a new strategy?",
        );
        assert!(report.is_complex);
        assert!(report.signals.contains(&"distress"));
        assert!(report.signals.contains(&"planning"));
    }

    #[test]
    fn greeting_is_simple() {
        let report = analyze("hi");
        assert!(!report.is_complex);
        assert_eq!(report.score, 0);
        assert!(!is_complex(""));
    }

    #[test]
    fn one_signal_is_not_enough() {
        assert!(!is_complex("What is our budget?"));
    }

    #[test]
    fn question_marks_and_length() {
        let report = analyze("Why? How?");
        assert_eq!(report.signals, vec!["multiple_questions"]);

        let long = "a".repeat(201);
        assert_eq!(analyze(&long).signals, vec!["long_message"]);
        assert!(analyze(&"a".repeat(200)).signals.is_empty());
    }

    #[test]
    fn co_occurrence_signals() {
        assert!(analyze("develop a plan").signals.is_empty());
        assert_eq!(
            analyze("develop and implement it").signals,
            vec!["develop_and_implement"]
        );
        assert!(analyze("improve ratings").signals.is_empty());
        assert_eq!(
            analyze("improve ratings significantly").signals,
            vec!["intense_improvement"]
        );
    }

    #[test]
    fn domain_keywords_count_distinct_words() {
        // Two distinct keywords, repeated: not enough.
        assert!(
            !analyze("marketing marketing marketing digital digital")
                .signals
                .contains(&"multi_domain")
        );
        let report = analyze("fundraising, marketing and programming");
        assert!(report.signals.contains(&"multi_domain"));
    }

    #[test]
    fn case_is_ignored() {
        assert!(is_complex("A COMPREHENSIVE STRATEGY"));
    }
}
