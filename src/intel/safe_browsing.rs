use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::IntelProviderConfig;
use crate::core::error::ShieldError;
use crate::core::types::ExternalVerdict;

/// Query the Google Safe Browsing v4 `threatMatches:find` endpoint.
///
/// A non-success status yields an empty verdict rather than an error;
/// the API answering at all means "no authoritative signal", not a
/// transport failure.
pub async fn lookup(
    client: &Client,
    provider: &IntelProviderConfig,
    url: &str,
) -> Result<ExternalVerdict, ShieldError> {
    let request = ThreatMatchesRequest {
        client: ClientInfo {
            client_id: "phishshield",
            client_version: "1.0",
        },
        threat_info: ThreatInfo {
            threat_types: vec![
                "MALWARE",
                "SOCIAL_ENGINEERING",
                "UNWANTED_SOFTWARE",
                "POTENTIALLY_HARMFUL_APPLICATION",
            ],
            platform_types: vec!["ANY_PLATFORM"],
            threat_entry_types: vec!["URL"],
            threat_entries: vec![ThreatEntry { url }],
        },
    };

    let mut req = client.post(&provider.base_url).json(&request);
    if let Some(key) = provider.api_key.as_deref() {
        req = req.query(&[("key", key)]);
    }

    let resp = req.send().await.map_err(ShieldError::from)?;
    if !resp.status().is_success() {
        return Ok(ExternalVerdict::empty());
    }

    let body: ThreatMatchesResponse = resp.json().await.map_err(ShieldError::from)?;
    if body.matches.is_empty() {
        return Ok(ExternalVerdict::empty());
    }

    let labels = body
        .matches
        .iter()
        .map(|m| format!("{}: {}", provider.name, m.threat_type))
        .collect();
    Ok(ExternalVerdict {
        is_phishing: true,
        labels,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThreatMatchesRequest<'a> {
    client: ClientInfo<'a>,
    threat_info: ThreatInfo<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientInfo<'a> {
    client_id: &'a str,
    client_version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThreatInfo<'a> {
    threat_types: Vec<&'a str>,
    platform_types: Vec<&'a str>,
    threat_entry_types: Vec<&'a str>,
    threat_entries: Vec<ThreatEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ThreatEntry<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize, Default)]
struct ThreatMatchesResponse {
    #[serde(default)]
    matches: Vec<ThreatMatch>,
}

#[derive(Debug, Deserialize, Default)]
struct ThreatMatch {
    #[serde(default, rename = "threatType")]
    threat_type: String,
}
