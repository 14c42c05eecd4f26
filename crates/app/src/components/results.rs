use client::submit::{dismiss, download_document};
use dioxus::prelude::*;
use shared_types::last_path_segment;
use shared_ui::components::{
    Alert, AlertVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle,
};

use crate::services::Services;
use crate::store::SignalStore;
use crate::CauseListState;

/// Outcome of the latest submission plus the in-progress panel.
#[component]
pub fn ResultPanel() -> Element {
    let state = use_context::<CauseListState>();
    let store = SignalStore(state.submission);
    let submission = state.submission.read().clone();
    let bundle = submission.bundle_urls().to_vec();

    rsx! {
        div { class: "result-panel",
            if let Some(err) = submission.error.clone() {
                Alert {
                    variant: AlertVariant::Error,
                    title: "Error",
                    on_dismiss: move |_| dismiss(&store),
                    "{err}"
                }
            }

            if let Some(result) = submission.result.clone() {
                Alert {
                    variant: if result.success { AlertVariant::Success } else { AlertVariant::Error },
                    on_dismiss: move |_| dismiss(&store),
                    p { "{result.message}" }
                    if let Some(saved) = submission.saved_as.clone() {
                        p { class: "saved-as", "Saved as {saved}" }
                    }
                }
            }

            if !bundle.is_empty() {
                Card { class: "bundle-card",
                    CardHeader {
                        CardTitle { "Documents" }
                        CardDescription { "Download each cause list individually" }
                    }
                    CardContent {
                        ul { class: "bundle-list",
                            for url in bundle {
                                DocumentRow { key: "{url}", url: url.clone() }
                            }
                        }
                    }
                }
            }

            if submission.in_flight {
                SubmittingPanel {}
            }
        }
    }
}

#[component]
fn DocumentRow(url: String) -> Element {
    let services = use_context::<Services>();
    let state = use_context::<CauseListState>();
    let store = SignalStore(state.submission);
    let mut busy = use_signal(|| false);
    let name = last_path_segment(&url).unwrap_or_else(|| url.clone());

    let on_download = move |_: MouseEvent| {
        let services = services.clone();
        let url = url.clone();
        spawn(async move {
            busy.set(true);
            if let Err(e) =
                download_document(&services.client, &store, &services.sink, &url).await
            {
                tracing::error!(error = %e, %url, "Error downloading document");
            }
            busy.set(false);
        });
    };

    rsx! {
        li { class: "bundle-item",
            span { class: "bundle-name", "{name}" }
            Button {
                variant: ButtonVariant::Outline,
                loading: busy(),
                onclick: on_download,
                "Download"
            }
        }
    }
}

#[component]
fn SubmittingPanel() -> Element {
    rsx! {
        Card { class: "submitting-panel",
            CardContent {
                div { class: "spinner-lg" }
                h3 { "Fetching Cause List" }
                p { "This may take a few moments while we scrape the latest data..." }
                div { class: "submitting-note",
                    strong { "Please wait: " }
                    "We're accessing the official court websites in real-time to fetch the most current cause list data."
                }
            }
        }
    }
}
