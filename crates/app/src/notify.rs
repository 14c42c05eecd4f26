#[cfg(feature = "desktop")]
const APP_NAME: &str = "Cause List Fetcher";

/// Send a desktop notification (no-op on non-desktop platforms).
#[allow(unused_variables)]
pub fn send(title: &str, body: &str) {
    #[cfg(feature = "desktop")]
    {
        if let Err(e) = dioxus_sdk_notification::Notification::new()
            .app_name(APP_NAME.to_string())
            .summary(title.to_string())
            .body(body.to_string())
            .show()
        {
            tracing::warn!("Failed to show desktop notification: {e}");
        }
    }
}

/// Body of the notification raised after a document lands on disk.
pub fn saved_body(location: &str) -> String {
    format!("Cause list saved to {location}")
}
