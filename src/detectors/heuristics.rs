use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::core::types::{Finding, HeuristicReport, Severity};
use crate::detectors::edit_distance::edit_distance;
use crate::detectors::registrable_without_tld;

/// Brands commonly impersonated by lookalike domains.
const COMMON_BRANDS: [&str; 7] = [
    "paypal",
    "apple",
    "microsoft",
    "amazon",
    "facebook",
    "google",
    "netflix",
];

/// Terms that show up in credential-harvesting URLs. One or two hits
/// are unremarkable on their own; three or more escalate.
const SUSPICIOUS_TERMS: [&str; 10] = [
    "secure",
    "login",
    "signin",
    "verify",
    "account",
    "update",
    "confirm",
    "banking",
    "password",
    "verification",
];

/// Advisory findings needed before the battery escalates on keyword
/// evidence alone.
const ADVISORY_ESCALATION_THRESHOLD: usize = 3;

static IP_HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").expect("static pattern")
});

/// Run the full heuristic battery over a parsed URL.
///
/// Every rule runs unconditionally and appends zero or more findings.
/// The report flags phishing when any definitive finding fired, or
/// when at least three advisory findings accumulated (in which case a
/// summary finding is appended). The thresholds are kept exactly as
/// shipped; their accuracy is unvalidated and deliberately untouched.
pub fn evaluate(url: &Url) -> HeuristicReport {
    let host = url.host_str().unwrap_or_default();
    let mut findings = Vec::new();

    check_ip_literal_host(host, &mut findings);
    check_subdomain_depth(host, &mut findings);
    check_brand_typosquatting(host, &mut findings);
    check_suspicious_terms(url.as_str(), &mut findings);

    let mut is_phishing = findings.iter().any(|f| f.severity == Severity::Definitive);

    if !is_phishing {
        let advisories = findings
            .iter()
            .filter(|f| f.severity == Severity::Advisory)
            .count();
        if advisories >= ADVISORY_ESCALATION_THRESHOLD {
            is_phishing = true;
            findings.push(Finding::advisory(
                "Multiple suspicious URL characteristics detected",
            ));
        }
    }

    HeuristicReport {
        is_phishing,
        findings,
    }
}

fn check_ip_literal_host(host: &str, findings: &mut Vec<Finding>) {
    if IP_HOST.is_match(host) {
        findings.push(Finding::definitive(
            "URL contains an IP address instead of a domain name",
        ));
    }
}

fn check_subdomain_depth(host: &str, findings: &mut Vec<Finding>) {
    if host.split('.').count() > 5 {
        findings.push(Finding::definitive(
            "URL contains an unusual number of subdomains",
        ));
    }
}

fn check_brand_typosquatting(host: &str, findings: &mut Vec<Finding>) {
    let registrable = registrable_without_tld(host);
    for brand in COMMON_BRANDS {
        if registrable.contains(brand) && registrable != brand {
            let distance = edit_distance(&registrable, brand);
            if (1..=2).contains(&distance) {
                findings.push(Finding::definitive(format!(
                    "Domain appears to be typosquatting {brand}"
                )));
            }
        }
    }
}

fn check_suspicious_terms(full_url: &str, findings: &mut Vec<Finding>) {
    let lowered = full_url.to_lowercase();
    for term in SUSPICIOUS_TERMS {
        if lowered.contains(term) {
            findings.push(Finding::advisory(format!(
                "URL contains suspicious term: {term}"
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Url {
        Url::parse(raw).expect("test url")
    }

    fn definitive_count(report: &HeuristicReport) -> usize {
        report
            .findings
            .iter()
            .filter(|f| f.severity == Severity::Definitive)
            .count()
    }

    #[test]
    fn ip_literal_host_is_definitive() {
        let report = evaluate(&parse("http://192.168.1.1/login"));
        assert!(report.is_phishing);
        assert!(report
            .findings
            .iter()
            .any(|f| f.description.contains("IP address")
                && f.severity == Severity::Definitive));
    }

    #[test]
    fn deep_subdomain_chain_is_definitive() {
        let report = evaluate(&parse("http://a.b.c.d.e.f.example.com/"));
        assert!(report.is_phishing);
        assert!(report
            .findings
            .iter()
            .any(|f| f.description.contains("subdomains")));
    }

    #[test]
    fn five_labels_do_not_fire_the_subdomain_rule() {
        let report = evaluate(&parse("http://a.b.c.example.com/"));
        assert_eq!(definitive_count(&report), 0);
    }

    #[test]
    fn brand_near_miss_is_definitive() {
        let report = evaluate(&parse("http://paypall.com/"));
        assert!(report.is_phishing);
        assert!(report
            .findings
            .iter()
            .any(|f| f.description == "Domain appears to be typosquatting paypal"));
    }

    #[test]
    fn exact_brand_domain_does_not_fire() {
        let report = evaluate(&parse("http://paypal.com/"));
        assert!(!report
            .findings
            .iter()
            .any(|f| f.description.contains("typosquatting")));
    }

    #[test]
    fn brand_rule_matches_appended_suffix() {
        let report = evaluate(&parse("http://appleid.com/"));
        assert!(report
            .findings
            .iter()
            .any(|f| f.description == "Domain appears to be typosquatting apple"));
    }

    #[test]
    fn three_keywords_escalate_with_summary() {
        let report = evaluate(&parse("http://example.com/login?verify=1&account=2"));
        assert!(report.is_phishing);
        assert_eq!(definitive_count(&report), 0);
        let advisories: Vec<&str> = report
            .findings
            .iter()
            .map(|f| f.description.as_str())
            .collect();
        assert_eq!(
            advisories,
            vec![
                "URL contains suspicious term: login",
                "URL contains suspicious term: verify",
                "URL contains suspicious term: account",
                "Multiple suspicious URL characteristics detected",
            ]
        );
    }

    #[test]
    fn two_keywords_do_not_escalate() {
        let report = evaluate(&parse("http://example.com/login?verify=1"));
        assert!(!report.is_phishing);
        assert_eq!(report.findings.len(), 2);
    }

    #[test]
    fn clean_url_yields_empty_report() {
        let report = evaluate(&parse("https://example.com/about"));
        assert!(!report.is_phishing);
        assert!(report.findings.is_empty());
    }
}
