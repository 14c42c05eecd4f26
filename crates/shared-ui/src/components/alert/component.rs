use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

/// Visual variant for alerts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    Success,
    Warning,
    #[default]
    Error,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Success => "success",
            AlertVariant::Warning => "warning",
            AlertVariant::Error => "error",
        }
    }

    fn role(&self) -> &'static str {
        match self {
            AlertVariant::Error | AlertVariant::Warning => "alert",
            AlertVariant::Success => "status",
        }
    }
}

/// Message box for results, failures and the offline warning.
///
/// A close button is rendered only when `on_dismiss` is set.
#[component]
pub fn Alert(
    #[props(default)] variant: AlertVariant,
    #[props(default)] title: String,
    #[props(default)] on_dismiss: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "alert", None, false),
        Attribute::new("data-style", variant.class(), None, false),
        Attribute::new("role", variant.role(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            div { class: "alert-body",
                if !title.is_empty() {
                    p { class: "alert-title", "{title}" }
                }
                div { class: "alert-message", {children} }
            }
            if let Some(handler) = on_dismiss {
                button {
                    class: "alert-dismiss",
                    r#type: "button",
                    "aria-label": "Dismiss",
                    onclick: move |evt| handler.call(evt),
                    Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                }
            }
        }
    }
}
