use client::health::{offline_banner, HealthStatus};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdScale;
use dioxus_free_icons::Icon;
use shared_ui::components::{Alert, AlertVariant, Badge, BadgeVariant};

fn badge_variant(status: HealthStatus) -> BadgeVariant {
    match status {
        HealthStatus::Unknown => BadgeVariant::Neutral,
        HealthStatus::Healthy => BadgeVariant::Success,
        HealthStatus::Unhealthy => BadgeVariant::Destructive,
    }
}

/// Title bar with the API status indicator.
#[component]
pub fn Header(status: HealthStatus) -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "app-header-inner",
                div { class: "app-brand",
                    Icon::<LdScale> { icon: LdScale, width: 32, height: 32 }
                    div {
                        h1 { class: "app-title", "Court Cause List Fetcher" }
                        p { class: "app-subtitle", "Real-time court cause list generator" }
                    }
                }
                Badge { variant: badge_variant(status), dot: true, "API {status.label()}" }
            }
        }
    }
}

#[component]
pub fn OfflineBanner(base_url: String) -> Element {
    rsx! {
        Alert { variant: AlertVariant::Warning, class: "offline-banner",
            "{offline_banner(&base_url)}"
        }
    }
}
