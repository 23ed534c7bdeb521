use crate::core::types::TyposquatMatch;
use crate::detectors::edit_distance::edit_distance;
use crate::detectors::registrable_without_tld;

/// Default edit-distance ceiling for a near-miss.
pub const DEFAULT_THRESHOLD: usize = 2;

/// Decide whether `domain` is a near-miss of one of `popular_domains`.
///
/// Both sides are compared without their last label. A candidate
/// counts only when the stripped domain contains the stripped popular
/// name as a substring and the edit distance between them is in
/// (0, threshold]. An exact stripped match is legitimate, not a
/// typosquat. Returns the first popular domain that matches, in list
/// order; no best-match search. The substring pre-filter means a
/// rearranged or character-substituted squat is missed, which is
/// accepted.
pub fn check_typosquat(
    domain: &str,
    popular_domains: &[String],
    threshold: usize,
) -> Option<TyposquatMatch> {
    let stripped = registrable_without_tld(domain);

    for popular in popular_domains {
        let popular_stripped = registrable_without_tld(popular);

        if stripped == popular_stripped {
            continue;
        }

        if stripped.contains(&popular_stripped) {
            let distance = edit_distance(&stripped, &popular_stripped);
            if distance > 0 && distance <= threshold {
                return Some(TyposquatMatch {
                    target_domain: popular.clone(),
                    distance,
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn popular(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn appended_character_is_flagged() {
        let hit = check_typosquat("paypall.com", &popular(&["paypal.com"]), 2)
            .expect("paypall contains paypal at distance 1");
        assert_eq!(hit.target_domain, "paypal.com");
        assert_eq!(hit.distance, 1);
    }

    #[test]
    fn exact_match_is_not_a_typosquat() {
        assert!(check_typosquat("paypal.com", &popular(&["paypal.com"]), 2).is_none());
    }

    #[test]
    fn substituted_character_fails_the_substring_prefilter() {
        // "paypa1" is one edit from "paypal" but does not contain it;
        // the containment pre-filter drops it.
        assert!(check_typosquat("paypa1.com", &popular(&["paypal.com"]), 2).is_none());
    }

    #[test]
    fn distance_beyond_threshold_is_ignored() {
        // "paypal-secure" contains "paypal" but is 7 edits away.
        assert!(check_typosquat("paypal-secure.com", &popular(&["paypal.com"]), 2).is_none());
    }

    #[test]
    fn first_match_in_list_order_wins() {
        let list = popular(&["paypal.com", "paypal1.net"]);
        let hit = check_typosquat("paypal12.com", &list, 2).expect("near miss of both entries");
        assert_eq!(hit.target_domain, "paypal.com");
        assert_eq!(hit.distance, 2);
    }

    #[test]
    fn rearranged_name_is_missed_by_design() {
        assert!(check_typosquat("lapyap.com", &popular(&["paypal.com"]), 2).is_none());
    }

    #[test]
    fn empty_popular_list_never_matches() {
        assert!(check_typosquat("paypall.com", &[], 2).is_none());
    }
}
