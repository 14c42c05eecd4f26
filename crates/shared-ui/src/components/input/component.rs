use dioxus::prelude::*;

/// Labelled text-like input with an optional inline error.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    /// Upper bound, e.g. the latest selectable date.
    #[props(default)]
    max: Option<String>,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(default)] id: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{id}",
                    "{label}"
                    if required {
                        span { class: "form-required", " *" }
                    }
                }
            }
            input {
                r#type: "{input_type}",
                id: "{id}",
                value: value,
                placeholder: placeholder,
                max: max,
                disabled: disabled,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(message) = error {
                p { class: "form-field-error", "{message}" }
            }
        }
    }
}
