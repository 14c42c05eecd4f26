use serde::{Deserialize, Serialize};

/// `[api]` section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiSection {
    /// Base URL of the cause list backend, e.g. `http://localhost:8000/api`.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// `[downloads]` section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DownloadSection {
    /// Directory generated documents are saved into on native targets.
    #[serde(default)]
    pub dir: Option<String>,
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field is optional so a missing or partial file falls back to
/// built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub downloads: DownloadSection,
}
