use serde::{Deserialize, Serialize};

/// Weight of a heuristic finding.
///
/// A `Definitive` finding alone is enough to flag a URL; `Advisory`
/// findings only count toward the escalation threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Advisory,
    Definitive,
}

/// One reason produced by the heuristic rule set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    pub description: String,
    pub severity: Severity,
}

impl Finding {
    pub fn advisory(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            severity: Severity::Advisory,
        }
    }

    pub fn definitive(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            severity: Severity::Definitive,
        }
    }
}

/// Outcome of the local heuristic battery for a single URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeuristicReport {
    pub is_phishing: bool,
    pub findings: Vec<Finding>,
}

/// Verdict returned by one remote reputation source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExternalVerdict {
    pub is_phishing: bool,
    pub labels: Vec<String>,
}

impl ExternalVerdict {
    /// The "no signal" verdict a failed or empty lookup degrades to.
    pub fn empty() -> Self {
        Self {
            is_phishing: false,
            labels: Vec::new(),
        }
    }
}

/// Final decision for a URL: OR of every signal, with the reasons that
/// produced it in source order (heuristics first, then each remote
/// source in query order).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AggregatedVerdict {
    pub is_phishing: bool,
    pub reasons: Vec<String>,
}

/// A near-miss of a popular domain reported by the typosquat detector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TyposquatMatch {
    pub target_domain: String,
    pub distance: usize,
}
