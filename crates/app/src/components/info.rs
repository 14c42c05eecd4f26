use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdExternalLink;
use dioxus_free_icons::Icon;
use shared_ui::components::{Card, CardContent, CardHeader, CardTitle};

const FEATURES: &[(&str, &str)] = &[
    (
        "Real-time Data",
        "Fetches live cause list data directly from official court websites",
    ),
    (
        "PDF Generation",
        "Converts cause lists to clean, professional PDF documents",
    ),
    (
        "Bulk Download",
        "Download cause lists for all judges in a court complex at once",
    ),
    (
        "Multiple Sources",
        "Supports eCourts India and Delhi District Courts websites",
    ),
];

const DATA_SOURCES: &[(&str, &str, &str)] = &[
    (
        "Primary",
        "eCourts India Services",
        "https://services.ecourts.gov.in/ecourtindia_v6/?p=cause_list/",
    ),
    (
        "Fallback",
        "New Delhi District Courts",
        "https://newdelhi.dcourts.gov.in/cause-list-daily-board/",
    ),
];

#[component]
pub fn Features() -> Element {
    rsx! {
        Card { class: "features-card",
            CardHeader {
                CardTitle { "Features" }
            }
            CardContent {
                div { class: "features-grid",
                    for (title, blurb) in FEATURES.iter() {
                        div { class: "feature",
                            h3 { class: "feature-title", "{title}" }
                            p { class: "feature-text", "{blurb}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DataSources() -> Element {
    rsx! {
        div { class: "data-sources",
            h3 { "Data Sources" }
            ul {
                for (role, name, href) in DATA_SOURCES.iter() {
                    li { class: "data-source",
                        Icon::<LdExternalLink> { icon: LdExternalLink, width: 16, height: 16 }
                        span { "{role}: " }
                        a { href: *href, target: "_blank", rel: "noopener noreferrer", "{name}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "app-footer",
            p { "Court Cause List Fetcher - Built for educational and research purposes" }
            p { "Data is fetched from publicly available official court websites" }
        }
    }
}
