use std::{fs, path::Path};

use serde::Deserialize;

use crate::core::error::ShieldError;

/// Which remote reputation API a provider entry speaks.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    SafeBrowsing,
    Phishtank,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntelProviderConfig {
    pub name: String,
    pub kind: ProviderKind,
    pub enabled: bool,
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub timeout_ms: u64,
    pub user_agent: String,
    /// Freshness window for stored verdicts, in seconds.
    pub cache_ttl_seconds: u64,
    #[serde(default = "default_typosquat_threshold")]
    pub typosquat_threshold: usize,
    /// Popular domains checked for near-miss lookalikes.
    #[serde(default)]
    pub popular_domains: Vec<String>,
    pub providers: Vec<IntelProviderConfig>,
}

fn default_typosquat_threshold() -> usize {
    crate::detectors::typosquat::DEFAULT_THRESHOLD
}

pub fn load_config(path: Option<&str>) -> Result<AppConfig, ShieldError> {
    let default_path = Path::new("config/phishshield.toml");
    let path = path.map(Path::new).unwrap_or(default_path);

    if !path.exists() {
        return Ok(default_config());
    }

    let content = fs::read_to_string(path).map_err(|e| ShieldError::Config(e.to_string()))?;
    let cfg: AppConfig =
        toml::from_str(&content).map_err(|e| ShieldError::Config(e.to_string()))?;
    Ok(cfg)
}

pub fn apply_provider_filter(cfg: AppConfig, names: Option<&[String]>) -> AppConfig {
    if let Some(list) = names {
        let mut cfg = cfg;
        let lowered: Vec<String> = list.iter().map(|s| s.to_lowercase()).collect();
        for p in cfg.providers.iter_mut() {
            p.enabled = lowered.iter().any(|n| n == &p.name.to_lowercase());
        }
        return cfg;
    }
    cfg
}

fn default_config() -> AppConfig {
    AppConfig {
        timeout_ms: 5_000,
        user_agent: "phishshield/1.0".to_string(),
        cache_ttl_seconds: 300,
        typosquat_threshold: default_typosquat_threshold(),
        popular_domains: vec![
            "paypal.com".to_string(),
            "apple.com".to_string(),
            "microsoft.com".to_string(),
            "amazon.com".to_string(),
            "facebook.com".to_string(),
            "google.com".to_string(),
            "netflix.com".to_string(),
        ],
        providers: vec![
            IntelProviderConfig {
                name: "Google Safe Browsing".to_string(),
                kind: ProviderKind::SafeBrowsing,
                enabled: true,
                base_url: "https://safebrowsing.googleapis.com/v4/threatMatches:find".to_string(),
                api_key: None,
            },
            IntelProviderConfig {
                name: "PhishTank".to_string(),
                kind: ProviderKind::Phishtank,
                enabled: false,
                base_url: "https://checkurl.phishtank.com/checkurl/".to_string(),
                api_key: None,
            },
        ],
    }
}
