use dioxus::prelude::*;

use crate::domain::entities::record::EnumField;
use crate::domain::entities::request::UrgencyLevel;
use crate::ui::components::table::button_style;
use crate::ui::state::app_state::{AppServices, AppState, Page};
use crate::usecase::services::workflow_service::NewRequestDraft;

const FIELD_STYLE: &str = "display: flex; flex-direction: column; gap: 4px;";
const INPUT_STYLE: &str = "border: 1px solid #bbb; border-radius: 6px; padding: 6px 8px;";

#[component]
fn TextField(label: &'static str, value: String, multiline: bool, on_change: EventHandler<String>) -> Element {
    rsx! {
        label { style: "{FIELD_STYLE}",
            span { "{label}" }
            if multiline {
                textarea {
                    style: "{INPUT_STYLE} min-height: 80px;",
                    value: "{value}",
                    oninput: move |event| on_change.call(event.value()),
                }
            } else {
                input {
                    style: "{INPUT_STYLE}",
                    value: "{value}",
                    oninput: move |event| on_change.call(event.value()),
                }
            }
        }
    }
}

#[component]
pub fn NewRequestPage() -> Element {
    let mut state = use_context::<AppState>();
    let services = use_context::<AppServices>();
    let mut draft = use_signal(NewRequestDraft::default);
    let current = draft.read().clone();

    rsx! {
        h2 { "Nouvelle demande" }
        div {
            style: "background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; display: flex; flex-direction: column; gap: 12px; max-width: 640px;",
            TextField {
                label: "Numéro de dossier (laisser vide pour générer)",
                value: current.file_number.clone(),
                multiline: false,
                on_change: move |value| draft.write().file_number = value,
            }
            TextField {
                label: "Nom du patient *",
                value: current.patient_name.clone(),
                multiline: false,
                on_change: move |value| draft.write().patient_name = value,
            }
            TextField {
                label: "Téléphone *",
                value: current.patient_phone.clone(),
                multiline: false,
                on_change: move |value| draft.write().patient_phone = value,
            }
            TextField {
                label: "Localisation *",
                value: current.location.clone(),
                multiline: false,
                on_change: move |value| draft.write().location = value,
            }
            TextField {
                label: "Symptômes",
                value: current.symptoms.clone(),
                multiline: true,
                on_change: move |value| draft.write().symptoms = value,
            }
            label { style: "{FIELD_STYLE}",
                span { "Urgence" }
                select {
                    style: "{INPUT_STYLE}",
                    onchange: move |event| {
                        if let Some(urgency) = UrgencyLevel::parse(&event.value()) {
                            draft.write().urgency = urgency;
                        }
                    },
                    for (value, text) in UrgencyLevel::options() {
                        option {
                            value: "{value}",
                            selected: value == current.urgency.as_str(),
                            "{text}"
                        }
                    }
                }
            }
            div { style: "display: flex; gap: 8px; justify-content: flex-end;",
                button {
                    style: "{button_style(false)}",
                    onclick: move |_| state.navigate(Page::Dashboard),
                    "Annuler"
                }
                button {
                    style: "{button_style(true)}",
                    onclick: move |_| {
                        let created = services.workflow.create_request(&draft.read());
                        match created {
                            Ok(request) => {
                                let id = request.id.clone();
                                state.requests.write().insert(0, request);
                                state.notify(format!("Demande {id} créée"));
                                draft.set(NewRequestDraft::default());
                                state.navigate(Page::RequestDetails(id));
                            }
                            Err(err) => state.notify(format!("Création impossible : {err}")),
                        }
                    },
                    "Créer la demande"
                }
            }
        }
    }
}
