use shared_types::AppConfig;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

/// Backend address used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Environment variable overriding the backend address.
pub const API_URL_ENV: &str = "CAUSELIST_API_URL";

/// Upper bound on any single request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_DOWNLOAD_DIR: &str = "downloads";

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Resolved client settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub download_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::resolve(&AppConfig::default(), None)
    }
}

impl ClientConfig {
    /// Combine the config file with an environment override.
    ///
    /// The base URL comes from `env_url`, then `[api] base_url`, then
    /// `DEFAULT_API_URL`. Blank values count as unset.
    pub fn resolve(file: &AppConfig, env_url: Option<String>) -> Self {
        let base_url = env_url
            .filter(|u| !u.trim().is_empty())
            .or_else(|| file.api.base_url.clone().filter(|u| !u.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let download_dir = file
            .downloads
            .dir
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DOWNLOAD_DIR.to_string());

        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: REQUEST_TIMEOUT,
            download_dir: PathBuf::from(download_dir),
        }
    }
}

/// Load the configuration once per process and return it.
///
/// Native builds read `.env` (via dotenvy), `config.toml` and
/// `CAUSELIST_API_URL`. Web builds can only see the variable as it was
/// at compile time.
pub fn load() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let compile_time = option_env!("CAUSELIST_API_URL").map(str::to_string);

        #[cfg(not(target_arch = "wasm32"))]
        let (file, env_url) = {
            let _ = dotenvy::dotenv();
            let runtime = std::env::var(API_URL_ENV)
                .ok()
                .filter(|u| !u.trim().is_empty());
            (read_config_file(), runtime.or(compile_time))
        };
        #[cfg(target_arch = "wasm32")]
        let (file, env_url) = (AppConfig::default(), compile_time);

        let config = ClientConfig::resolve(&file, env_url);
        tracing::info!(base_url = %config.base_url, "Cause list API configured");
        config
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> AppConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse {CONFIG_PATH}: {e}; using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::debug!("{CONFIG_PATH} not read ({e}); using defaults");
            AppConfig::default()
        }
    }
}
