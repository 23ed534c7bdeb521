use once_cell::sync::Lazy;
use regex::Regex;

/// Display-oriented suspicious-pattern battery.
///
/// These annotations give the user extra context next to a verdict;
/// they never feed into the verdict itself, which comes from the rule
/// set in [`crate::detectors::heuristics`].
static SUSPICIOUS_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (
            r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}",
            "IP address in URL",
        ),
        (
            r"^https?://[^/]+/@",
            "@ symbol in URL (potential user deception)",
        ),
        (
            r"^https?://[^/]+/[^/]+\.[^/]+/",
            "Domain-like path segment",
        ),
        (
            r"\.(tk|ml|ga|cf|gq)/?$",
            "Free TLD often used in phishing",
        ),
        (
            r"(secure|login|signin|verify|account|update|confirm|banking|password)",
            "Sensitive terms in URL",
        ),
    ]
    .into_iter()
    .map(|(pattern, description)| (Regex::new(pattern).expect("static pattern"), description))
    .collect()
});

/// Return a description for every suspicious pattern the URL matches.
pub fn suspicious_patterns(url: &str) -> Vec<&'static str> {
    SUSPICIOUS_PATTERNS
        .iter()
        .filter(|(pattern, _)| pattern.is_match(url))
        .map(|(_, description)| *description)
        .collect()
}
