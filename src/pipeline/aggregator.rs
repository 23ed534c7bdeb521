use crate::core::types::{AggregatedVerdict, ExternalVerdict, HeuristicReport};

/// Merge the heuristic report with every external verdict.
///
/// One positive signal from any source is enough; there is no voting
/// or cross-source weighting. Reasons keep a fixed order, heuristic
/// findings first and then each source's labels in query order, with
/// empty entries dropped. Repeated phrasing across sources is kept
/// verbatim.
pub fn aggregate(
    heuristic: &HeuristicReport,
    external: &[ExternalVerdict],
) -> AggregatedVerdict {
    let is_phishing = heuristic.is_phishing || external.iter().any(|v| v.is_phishing);

    let reasons = heuristic
        .findings
        .iter()
        .map(|f| f.description.clone())
        .chain(external.iter().flat_map(|v| v.labels.iter().cloned()))
        .filter(|reason| !reason.is_empty())
        .collect();

    AggregatedVerdict {
        is_phishing,
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Finding;

    fn clean_report() -> HeuristicReport {
        HeuristicReport {
            is_phishing: false,
            findings: vec![],
        }
    }

    #[test]
    fn external_positive_alone_flags() {
        let external = vec![ExternalVerdict {
            is_phishing: true,
            labels: vec!["Google Safe Browsing: SOCIAL_ENGINEERING".to_string()],
        }];
        let verdict = aggregate(&clean_report(), &external);
        assert!(verdict.is_phishing);
        assert_eq!(
            verdict.reasons,
            vec!["Google Safe Browsing: SOCIAL_ENGINEERING"]
        );
    }

    #[test]
    fn all_negative_stays_negative() {
        let verdict = aggregate(&clean_report(), &[ExternalVerdict::empty()]);
        assert!(!verdict.is_phishing);
        assert!(verdict.reasons.is_empty());
    }

    #[test]
    fn heuristic_reasons_come_first_in_order() {
        let report = HeuristicReport {
            is_phishing: true,
            findings: vec![
                Finding::definitive("URL contains an IP address instead of a domain name"),
                Finding::advisory("URL contains suspicious term: login"),
            ],
        };
        let external = vec![
            ExternalVerdict {
                is_phishing: false,
                labels: vec!["first source label".to_string()],
            },
            ExternalVerdict {
                is_phishing: true,
                labels: vec!["second source label".to_string()],
            },
        ];
        let verdict = aggregate(&report, &external);
        assert_eq!(
            verdict.reasons,
            vec![
                "URL contains an IP address instead of a domain name",
                "URL contains suspicious term: login",
                "first source label",
                "second source label",
            ]
        );
    }

    #[test]
    fn empty_labels_are_filtered_but_duplicates_kept() {
        let report = HeuristicReport {
            is_phishing: false,
            findings: vec![Finding::advisory("URL contains suspicious term: login")],
        };
        let external = vec![ExternalVerdict {
            is_phishing: true,
            labels: vec![
                String::new(),
                "URL contains suspicious term: login".to_string(),
            ],
        }];
        let verdict = aggregate(&report, &external);
        assert_eq!(
            verdict.reasons,
            vec![
                "URL contains suspicious term: login",
                "URL contains suspicious term: login",
            ]
        );
    }
}
