//! Local, offline checks: edit distance, typosquat matching and the
//! heuristic rule battery.

pub mod edit_distance;
pub mod heuristics;
pub mod patterns;
pub mod typosquat;

/// Every label of a hostname except the last, joined with dots.
///
/// A deliberately naive stand-in for the registrable domain name: no
/// public-suffix list, so multi-part TLDs like `co.uk` keep their
/// second-level label. A bare label yields the empty string.
pub fn registrable_without_tld(host: &str) -> String {
    match host.rsplit_once('.') {
        Some((head, _tld)) => head.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_the_last_label() {
        assert_eq!(registrable_without_tld("paypal.com"), "paypal");
        assert_eq!(registrable_without_tld("login.paypal.com"), "login.paypal");
        assert_eq!(registrable_without_tld("example.co.uk"), "example.co");
    }

    #[test]
    fn bare_label_has_no_registrable_part() {
        assert_eq!(registrable_without_tld("localhost"), "");
    }
}
