use std::time::Duration;

use futures::future::join_all;
use url::Url;

use crate::config::AppConfig;
use crate::core::error::ShieldError;
use crate::core::types::{AggregatedVerdict, Finding};
use crate::detectors::{heuristics, typosquat::check_typosquat};
use crate::intel;
use crate::pipeline::aggregator::aggregate;

/// Stateless analysis front end: one shared HTTP client plus config.
///
/// `analyze` carries no ambient state between calls; the same URL with
/// unchanged provider state yields the same verdict.
pub struct Analyzer {
    client: reqwest::Client,
    pub config: AppConfig,
}

impl Analyzer {
    pub fn new(config: AppConfig) -> Result<Self, ShieldError> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(4))
            .build()
            .map_err(ShieldError::from)?;

        Ok(Self { client, config })
    }

    /// Analyze one URL: local heuristics plus a concurrent fan-out
    /// over every enabled reputation provider, merged into a single
    /// verdict with ordered reasons.
    ///
    /// Fails fast with `MalformedUrl` before any heuristic runs; a
    /// parsed host is a precondition for every rule. Provider failures
    /// never surface here, they degrade inside the fan-out.
    pub async fn analyze(&self, raw_url: &str) -> Result<AggregatedVerdict, ShieldError> {
        let url = Url::parse(raw_url)
            .map_err(|e| ShieldError::MalformedUrl(format!("{raw_url}: {e}")))?;
        let host = url
            .host_str()
            .ok_or_else(|| ShieldError::MalformedUrl(format!("{raw_url}: no host")))?
            .to_string();

        let mut report = heuristics::evaluate(&url);
        if let Some(hit) = check_typosquat(
            &host,
            &self.config.popular_domains,
            self.config.typosquat_threshold,
        ) {
            report.findings.push(Finding::definitive(format!(
                "Domain looks like a typosquat of {} (edit distance {})",
                hit.target_domain, hit.distance
            )));
            report.is_phishing = true;
        }

        let lookups = self
            .config
            .providers
            .iter()
            .filter(|p| p.enabled)
            .map(|p| intel::lookup_isolated(&self.client, p, url.as_str()));
        let external = join_all(lookups).await;

        Ok(aggregate(&report, &external))
    }
}
