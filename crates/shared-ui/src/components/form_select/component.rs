use dioxus::prelude::*;

/// Native `<select>` with a label, a blank placeholder option and an
/// inline error line.
///
/// Children should be `option { value: "...", "Label" }` elements. The
/// placeholder option carries an empty value, so picking it clears the
/// field.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)]
    label: String,
    /// Text of the leading empty option. Omitted when blank.
    #[props(default)]
    placeholder: String,
    #[props(default = false)]
    required: bool,
    #[props(default = false)]
    disabled: bool,
    /// Validation message rendered under the select.
    #[props(default)]
    error: Option<String>,
    #[props(default)]
    id: String,
    children: Element,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", r#for: "{id}",
                    "{label}"
                    if required {
                        span { class: "form-required", " *" }
                    }
                }
            }
            select {
                class: "form-select",
                id: "{id}",
                value: value,
                disabled: disabled,
                "aria-invalid": invalid,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                if !placeholder.is_empty() {
                    option { value: "", "{placeholder}" }
                }
                {children}
            }
            if let Some(message) = error {
                p { class: "form-field-error", "{message}" }
            }
        }
    }
}
