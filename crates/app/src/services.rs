//! The backend client and download sink shared by every component.

use client::config::ClientConfig;
use client::sink::DocumentSink;
use client::ApiClient;
use shared_types::AppError;

#[cfg(not(target_arch = "wasm32"))]
use client::sink::DirectorySink;

/// Provided as context by the root component.
#[derive(Clone)]
pub struct Services {
    pub client: ApiClient,
    pub sink: AppSink,
    pub config: &'static ClientConfig,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.config, other.config)
    }
}

impl Services {
    pub fn connect(config: &'static ClientConfig) -> Result<Self, AppError> {
        Ok(Self {
            client: ApiClient::new(config)?,
            sink: AppSink::new(config),
            config,
        })
    }
}

/// Saves downloaded documents: through the browser on the web, into the
/// configured download directory on desktop.
#[derive(Debug, Clone)]
pub struct AppSink {
    #[cfg(not(target_arch = "wasm32"))]
    dir: DirectorySink,
}

impl AppSink {
    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            dir: DirectorySink::new(config.download_dir.clone()),
        }
    }
}

impl DocumentSink for AppSink {
    #[cfg(target_arch = "wasm32")]
    async fn save(&self, filename: &str, bytes: Vec<u8>) -> Result<String, AppError> {
        let name = client::sink::sanitize_filename(filename);
        let script = browser_download_script(&name, &bytes)?;
        dioxus::prelude::document::eval(&script);
        tracing::info!(filename = %name, "Handed document to the browser");
        Ok(name)
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn save(&self, filename: &str, bytes: Vec<u8>) -> Result<String, AppError> {
        let location = self.dir.save(filename, bytes).await?;
        crate::notify::send("Cause list saved", &crate::notify::saved_body(&location));
        Ok(location)
    }
}

/// Script that makes the browser save `bytes` as `filename`.
#[cfg(any(target_arch = "wasm32", test))]
fn browser_download_script(filename: &str, bytes: &[u8]) -> Result<String, AppError> {
    use base64::Engine as _;

    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    let name = serde_json::to_string(filename)
        .map_err(|e| AppError::application(format!("Invalid filename {filename}: {e}")))?;

    Ok(format!(
        r#"
        (function() {{
            var bytes = Uint8Array.from(atob('{encoded}'), function(c) {{ return c.charCodeAt(0); }});
            var url = window.URL.createObjectURL(new Blob([bytes]));
            var link = document.createElement('a');
            link.href = url;
            link.download = {name};
            document.body.appendChild(link);
            link.click();
            document.body.removeChild(link);
            window.URL.revokeObjectURL(url);
        }})();
        "#
    ))
}
