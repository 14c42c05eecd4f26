use shared_types::{AppError, DEFAULT_DOCUMENT_NAME};

/// Where downloaded documents end up.
///
/// The desktop build writes into a directory, the web build hands the
/// bytes to the browser, and tests record what they were given.
#[allow(async_fn_in_trait)]
pub trait DocumentSink {
    /// Persist `bytes` under `filename` and return a human-readable
    /// description of where they went.
    async fn save(&self, filename: &str, bytes: Vec<u8>) -> Result<String, AppError>;
}

/// Reduce a server-supplied filename to a safe single path component.
pub fn sanitize_filename(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>();
    let base = base.trim();
    if base.is_empty() || base == "." || base == ".." {
        DEFAULT_DOCUMENT_NAME.to_string()
    } else {
        base.to_string()
    }
}

/// Saves documents into a directory on the local filesystem.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl DirectorySink {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DocumentSink for DirectorySink {
    async fn save(&self, filename: &str, bytes: Vec<u8>) -> Result<String, AppError> {
        let path = self.dir.join(sanitize_filename(filename));
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::application(format!("Could not create {}: {e}", self.dir.display()))
        })?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::application(format!("Could not save {}: {e}", path.display())))?;
        tracing::info!(path = %path.display(), "Saved cause list document");
        Ok(path.display().to_string())
    }
}
