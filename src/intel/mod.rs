//! Remote reputation sources. Each lookup returns an [`ExternalVerdict`];
//! transport trouble degrades to "no signal from this source" so one
//! broken provider can never poison an analysis.

use reqwest::Client;

use crate::config::{IntelProviderConfig, ProviderKind};
use crate::core::error::ShieldError;
use crate::core::types::ExternalVerdict;

pub mod phishtank;
pub mod safe_browsing;

/// Query one provider for a verdict on `url`.
pub async fn lookup(
    client: &Client,
    provider: &IntelProviderConfig,
    url: &str,
) -> Result<ExternalVerdict, ShieldError> {
    match provider.kind {
        ProviderKind::SafeBrowsing => safe_browsing::lookup(client, provider, url).await,
        ProviderKind::Phishtank => phishtank::lookup(client, provider, url).await,
    }
}

/// Query one provider, recovering any failure into an empty verdict.
///
/// This is the isolation boundary required between concurrent source
/// calls: a timeout, connect error or bad payload from one source is
/// logged at warn and contributes nothing, instead of aborting the
/// whole analysis. No retry; the next analysis gets a fresh attempt.
pub async fn lookup_isolated(
    client: &Client,
    provider: &IntelProviderConfig,
    url: &str,
) -> ExternalVerdict {
    match lookup(client, provider, url).await {
        Ok(verdict) => verdict,
        Err(err) => {
            tracing::warn!("provider {} lookup failed: {}", provider.name, err);
            ExternalVerdict::empty()
        }
    }
}
