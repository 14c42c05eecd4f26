use client::cascade::driver::{resolve, stage_change};
use client::cascade::{dismiss_error, FormState, Tier};
use client::submit::submit;
use client::StateHandle;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdDownload;
use dioxus_free_icons::Icon;
use shared_types::ALL_CASE_TYPES;
use shared_ui::components::{
    Alert, AlertVariant, Button, Card, CardContent, CardDescription, CardHeader, CardTitle,
    FormSelect, Input,
};

use crate::services::Services;
use crate::store::SignalStore;
use crate::CauseListState;

const INSTRUCTIONS: &[&str] = &[
    "Select State, District, and Court Complex from the dropdowns",
    "Optionally select a specific Judge (leave empty for all judges)",
    "Choose the date for which you want the cause list",
    "Click \"Fetch Cause List\" to generate and download PDF(s)",
    "Multiple PDFs will be compressed into a ZIP file",
];

/// Apply an edit now and resolve its lookup in the background.
fn change_field(services: &Services, store: SignalStore<FormState>, tier: Tier, value: String) {
    if let Some(pending) = stage_change(&store, tier, &value) {
        let client = services.client.clone();
        spawn(async move {
            resolve(&client, &store, pending).await;
        });
    }
}

fn placeholder(loading: bool, loading_text: &'static str, idle_text: &'static str) -> String {
    let text = if loading { loading_text } else { idle_text };
    text.to_string()
}

#[component]
pub fn CauseListForm() -> Element {
    let services = use_context::<Services>();
    let state = use_context::<CauseListState>();
    let form_store = SignalStore(state.form);
    let submission_store = SignalStore(state.submission);

    let form = state.form.read().clone();
    let submission = state.submission.read().clone();
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let field_error = |tier: Tier| submission.field_errors.get(tier.field_name()).cloned();

    let on_state = {
        let services = services.clone();
        move |evt: Event<FormData>| change_field(&services, form_store, Tier::State, evt.value())
    };
    let on_district = {
        let services = services.clone();
        move |evt: Event<FormData>| change_field(&services, form_store, Tier::District, evt.value())
    };
    let on_court = {
        let services = services.clone();
        move |evt: Event<FormData>| {
            change_field(&services, form_store, Tier::CourtComplex, evt.value())
        }
    };
    let on_judge = {
        let services = services.clone();
        move |evt: Event<FormData>| change_field(&services, form_store, Tier::Judge, evt.value())
    };
    let on_date = {
        let services = services.clone();
        move |evt: FormEvent| change_field(&services, form_store, Tier::Date, evt.value())
    };
    let on_case_type = {
        let services = services.clone();
        move |evt: Event<FormData>| change_field(&services, form_store, Tier::CaseType, evt.value())
    };

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let services = services.clone();
        let selection = form_store.with(|f| f.selection.clone());
        spawn(async move {
            let today = chrono::Local::now().date_naive();
            let outcome = submit(
                &services.client,
                &submission_store,
                &services.sink,
                &selection,
                today,
            )
            .await;
            tracing::debug!(?outcome, "Submission finished");
        });
    };

    let submit_disabled = submission.in_flight || !form.can_submit();

    rsx! {
        Card { class: "form-card",
            CardHeader {
                CardTitle { "Court Cause List Fetcher" }
                CardDescription { "Select court details and date to fetch the cause list in real-time" }
            }
            CardContent {
                if let Some(err) = form.error.clone() {
                    Alert {
                        variant: AlertVariant::Error,
                        on_dismiss: move |_| form_store.update(|f| *f = dismiss_error(std::mem::take(f))),
                        "{err}"
                    }
                }

                form { class: "causelist-form", onsubmit: handle_submit,
                    div { class: "form-group",
                        FormSelect {
                            label: "State",
                            id: "state",
                            required: true,
                            value: form.selection.state.clone(),
                            disabled: !form.is_enabled(Tier::State),
                            placeholder: placeholder(form.loading.states, "Loading states...", "Select State"),
                            error: field_error(Tier::State),
                            onchange: on_state,
                            for name in form.options.states.iter() {
                                option { value: "{name}", "{name}" }
                            }
                        }
                    }

                    div { class: "form-group",
                        FormSelect {
                            label: "District",
                            id: "district",
                            required: true,
                            value: form.selection.district.clone(),
                            disabled: !form.is_enabled(Tier::District),
                            placeholder: placeholder(form.loading.districts, "Loading districts...", "Select District"),
                            error: field_error(Tier::District),
                            onchange: on_district,
                            for name in form.options.districts.iter() {
                                option { value: "{name}", "{name}" }
                            }
                        }
                    }

                    div { class: "form-group",
                        FormSelect {
                            label: "Court Complex",
                            id: "court_complex",
                            required: true,
                            value: form.selection.court_complex.clone(),
                            disabled: !form.is_enabled(Tier::CourtComplex),
                            placeholder: placeholder(
                                form.loading.courts,
                                "Loading court complexes...",
                                "Select Court Complex",
                            ),
                            error: field_error(Tier::CourtComplex),
                            onchange: on_court,
                            for name in form.options.courts.iter() {
                                option { value: "{name}", "{name}" }
                            }
                        }
                    }

                    div { class: "form-group",
                        FormSelect {
                            label: "Judge/Court Name (Optional)",
                            id: "court_name",
                            value: form.selection.court_name.clone(),
                            disabled: !form.is_enabled(Tier::Judge),
                            placeholder: placeholder(
                                form.loading.judges,
                                "Loading judges...",
                                "All Judges (Leave empty to fetch all cause lists)",
                            ),
                            onchange: on_judge,
                            for judge in form.options.judges.iter() {
                                option { value: "{judge.name}", "{judge.label()}" }
                            }
                        }
                        p { class: "form-hint",
                            "Leave empty to fetch cause lists for all judges in the court complex"
                        }
                    }

                    div { class: "form-row",
                        div { class: "form-group",
                            Input {
                                label: "Date",
                                id: "date",
                                input_type: "date",
                                required: true,
                                value: form.selection.date.clone(),
                                max: today,
                                error: field_error(Tier::Date),
                                on_input: on_date,
                            }
                        }

                        div { class: "form-group",
                            FormSelect {
                                label: "Case Type",
                                id: "case_type",
                                value: form.selection.case_type.as_str().to_string(),
                                onchange: on_case_type,
                                for case_type in ALL_CASE_TYPES.iter() {
                                    option { value: case_type.as_str(), "{case_type.display_name()}" }
                                }
                            }
                        }
                    }

                    div { class: "form-actions",
                        Button {
                            button_type: "submit",
                            class: "submit-button",
                            disabled: submit_disabled,
                            loading: submission.in_flight,
                            if submission.in_flight {
                                "Fetching Cause List..."
                            } else {
                                Icon::<LdDownload> { icon: LdDownload, width: 20, height: 20 }
                                "Fetch Cause List"
                            }
                        }
                    }
                }

                div { class: "instructions",
                    h3 { "Instructions:" }
                    ul {
                        for line in INSTRUCTIONS.iter() {
                            li { "{line}" }
                        }
                    }
                }
            }
        }
    }
}
