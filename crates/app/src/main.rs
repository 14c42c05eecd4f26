use client::cascade::driver::load_states;
use client::cascade::FormState;
use client::health::{check_health, HealthStatus};
use client::submit::SubmissionState;
use dioxus::prelude::*;
use shared_ui::components::{Alert, AlertVariant};

mod components;
pub mod notify;
mod services;
mod store;

use components::{
    CauseListForm, DataSources, Features, Footer, Header, OfflineBanner, ResultPanel,
};
use services::Services;
use store::SignalStore;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Form and submission state shared by the form and the result panel.
#[derive(Clone, Copy)]
pub struct CauseListState {
    pub form: Signal<FormState>,
    pub submission: Signal<SubmissionState>,
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let services = use_hook(|| Services::connect(client::config::load()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match services {
            Ok(services) => rsx! { Home { services } },
            Err(e) => rsx! {
                main { class: "app-main",
                    Alert { variant: AlertVariant::Error, title: "Startup failed",
                        "Could not create the HTTP client: {e}"
                    }
                }
            },
        }
    }
}

#[component]
fn Home(services: Services) -> Element {
    let base_url = services.config.base_url.clone();
    let client = services.client.clone();
    use_context_provider(|| services);
    let state = use_context_provider(|| CauseListState {
        form: Signal::new(FormState::default()),
        submission: Signal::new(SubmissionState::default()),
    });

    // Populate the first tier once on mount.
    let states_client = client.clone();
    use_hook(move || {
        spawn(async move {
            load_states(&states_client, &SignalStore(state.form)).await;
        });
    });

    // One check on mount; no polling.
    let health = use_resource(move || {
        let client = client.clone();
        async move { check_health(&client).await }
    });
    let status: HealthStatus = health.read().unwrap_or_default();

    rsx! {
        div { class: "app-shell",
            Header { status }
            main { class: "app-main",
                if status == HealthStatus::Unhealthy {
                    OfflineBanner { base_url }
                }
                CauseListForm {}
                ResultPanel {}
                Features {}
                DataSources {}
            }
            Footer {}
        }
    }
}
