use reqwest::Client;
use serde::Deserialize;

use crate::config::IntelProviderConfig;
use crate::core::error::ShieldError;
use crate::core::types::ExternalVerdict;

/// Query the PhishTank checkurl endpoint.
///
/// Only a verified in-database entry counts as a positive verdict.
pub async fn lookup(
    client: &Client,
    provider: &IntelProviderConfig,
    url: &str,
) -> Result<ExternalVerdict, ShieldError> {
    let mut query: Vec<(&str, &str)> = vec![("url", url), ("format", "json")];
    if let Some(key) = provider.api_key.as_deref() {
        query.push(("app_key", key));
    }

    let resp = client
        .get(&provider.base_url)
        .query(&query)
        .send()
        .await
        .map_err(ShieldError::from)?;
    if !resp.status().is_success() {
        return Ok(ExternalVerdict::empty());
    }

    let body: CheckUrlResponse = resp.json().await.map_err(ShieldError::from)?;
    if body.results.in_database && body.results.verified {
        return Ok(ExternalVerdict {
            is_phishing: true,
            labels: vec![format!("URL found in {} database", provider.name)],
        });
    }

    Ok(ExternalVerdict::empty())
}

#[derive(Debug, Deserialize, Default)]
struct CheckUrlResponse {
    #[serde(default)]
    results: CheckUrlResults,
}

#[derive(Debug, Deserialize, Default)]
struct CheckUrlResults {
    #[serde(default)]
    in_database: bool,
    #[serde(default)]
    verified: bool,
}
