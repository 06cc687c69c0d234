use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::domain::entities::record::EnumField;
use crate::domain::entities::request::{AppointmentType, MedicalRequest, RequestStatus};
use crate::domain::entities::workflow::{StageProgress, WorkflowStage};
use crate::infra::map::static_map::{MapPoint, MapView};
use crate::platform::desktop::dialogs;
use crate::ui::components::map_panel::MapPanel;
use crate::ui::components::table::{button_style, display_datetime};
use crate::ui::state::app_state::{AppServices, AppState, Page};
use crate::usecase::services::workflow_service::{
    AppointmentDraft, ReportAccess, RequestWorkflow, StageChange,
};

const CARD_STYLE: &str = "background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; display: flex; flex-direction: column; gap: 8px;";
const INPUT_STYLE: &str = "border: 1px solid #bbb; border-radius: 6px; padding: 6px 8px;";

fn stamp(instant: &DateTime<Utc>) -> String {
    instant.format("%d/%m/%Y %H:%M").to_string()
}

fn tag_color(tag: &str) -> &'static str {
    match tag {
        "status_change" => "#2563eb",
        "note_added" => "#7c3aed",
        "contact_attempt" => "#0891b2",
        "workflow_change" => "#16a34a",
        _ => "#6b7280",
    }
}

fn stage_style(progress: StageProgress) -> &'static str {
    match progress {
        StageProgress::Completed => "background: #dcfce7; border: 1px solid #16a34a; color: #166534;",
        StageProgress::Current => "background: #2563eb; border: 1px solid #2563eb; color: #fff;",
        StageProgress::Upcoming => "background: #fff; border: 1px solid #d1d5db; color: #6b7280;",
    }
}

#[component]
pub fn RequestDetailsPage(id: String) -> Element {
    let state = use_context::<AppState>();
    let request = state
        .requests
        .read()
        .iter()
        .find(|request| request.id == id)
        .cloned();

    match request {
        Some(request) => rsx! { RequestView { request } },
        None => rsx! {
            p { "Demande introuvable : {id}" }
            button {
                style: "{button_style(false)}",
                onclick: move |_| state.navigate(Page::Dashboard),
                "Retour au tableau de bord"
            }
        },
    }
}

#[component]
fn RequestView(request: MedicalRequest) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<AppServices>();
    let id = request.id.clone();

    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center;",
            div {
                h2 { "Dossier {request.id}" }
                p { style: "color: #6b7280;",
                    "{request.patient_name} · {request.patient_phone} · {request.location}"
                }
            }
            div { style: "display: flex; gap: 8px; align-items: center;",
                span { "Statut : {request.status.label()} · Urgence : {request.urgency.label()}" }
                for status in [RequestStatus::Completed, RequestStatus::Cancelled] {
                    button {
                        key: "{status.as_str()}",
                        style: "{button_style(false)}",
                        disabled: request.status == status,
                        onclick: {
                            let id = id.clone();
                            let workflow = services.workflow.clone();
                            move |_| {
                                let changed = state
                                    .update_request(&id, |request| workflow.change_status(request, status))
                                    .unwrap_or(false);
                                if changed {
                                    state.notify(format!("Statut modifié : {}", status.label()));
                                }
                            }
                        },
                        if status == RequestStatus::Completed { "Marquer terminé" } else { "Annuler la demande" }
                    }
                }
            }
        }

        WorkflowStepper { id: id.clone(), current: request.workflow_stage }

        div { style: "display: grid; grid-template-columns: 2fr 1fr; gap: 12px;",
            div { style: "display: flex; flex-direction: column; gap: 12px;",
                div { style: "{CARD_STYLE}",
                    h3 { "Symptômes" }
                    p { "{request.symptoms}" }
                }
                NotesCard { request: request.clone() }
                ActionLog { request: request.clone() }
            }
            div { style: "display: flex; flex-direction: column; gap: 12px;",
                AppointmentCard { request: request.clone() }
                ReportCard { request: request.clone() }
            }
        }
    }
}

/// Asks for confirmation, then moves the request to `stage`.
fn move_to_stage(
    state: AppState,
    workflow: &RequestWorkflow,
    id: &str,
    current: WorkflowStage,
    stage: WorkflowStage,
) {
    if stage == current {
        return;
    }
    let question = format!(
        "Passer le dossier de « {} » à « {} » ?",
        current.label(),
        stage.label()
    );
    if !dialogs::confirm("Changer d'étape", &question) {
        return;
    }
    let change = state.update_request(id, |request| workflow.change_stage(request, stage));
    if let Some(StageChange::Moved { to, .. }) = change {
        state.notify(format!("Étape du dossier modifiée : {}", to.label()));
    }
}

#[component]
fn WorkflowStepper(id: String, current: WorkflowStage) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<AppServices>();

    rsx! {
        div { style: "display: flex; gap: 6px; flex-wrap: wrap; align-items: center;",
            button {
                style: "{button_style(false)}",
                disabled: current.previous().is_none(),
                onclick: {
                    let id = id.clone();
                    let workflow = services.workflow.clone();
                    move |_| {
                        if let Some(stage) = current.previous() {
                            move_to_stage(state, &workflow, &id, current, stage);
                        }
                    }
                },
                "◀"
            }
            for stage in WorkflowStage::ALL.iter().copied() {
                button {
                    key: "{stage.as_str()}",
                    style: "padding: 6px 10px; border-radius: 16px; cursor: pointer; {stage_style(stage.progress_of(current))}",
                    onclick: {
                        let id = id.clone();
                        let workflow = services.workflow.clone();
                        move |_| move_to_stage(state, &workflow, &id, current, stage)
                    },
                    "{stage.index() + 1}. {stage.label()}"
                }
            }
            button {
                style: "{button_style(false)}",
                disabled: current.next().is_none(),
                onclick: {
                    let id = id.clone();
                    let workflow = services.workflow.clone();
                    move |_| {
                        if let Some(stage) = current.next() {
                            move_to_stage(state, &workflow, &id, current, stage);
                        }
                    }
                },
                "▶"
            }
        }
    }
}

#[component]
fn NotesCard(request: MedicalRequest) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<AppServices>();
    let mut text = use_signal(String::new);
    let id = request.id.clone();

    rsx! {
        div { style: "{CARD_STYLE}",
            h3 { "Notes" }
            textarea {
                style: "{INPUT_STYLE} min-height: 60px;",
                placeholder: "Ajouter une note",
                value: "{text}",
                oninput: move |event| text.set(event.value()),
            }
            button {
                style: "{button_style(true)}",
                onclick: move |_| {
                    let content = text();
                    let added = state.update_request(&id, |request| services.workflow.add_note(request, &content));
                    match added {
                        Some(Ok(())) => {
                            text.set(String::new());
                            state.notify("Note ajoutée");
                        }
                        Some(Err(err)) => state.notify(format!("Note refusée : {err}")),
                        None => state.notify(format!("Demande introuvable : {id}")),
                    }
                },
                "Ajouter"
            }
            if request.notes.is_empty() {
                p { style: "color: #6b7280;", "Aucune note" }
            }
            for note in request.notes.iter() {
                div { key: "{note.id}", style: "border-top: 1px solid #f3f4f6; padding-top: 6px;",
                    p { "{note.content}" }
                    small { style: "color: #6b7280;",
                        "{note.created_by} · {stamp(&note.created_at)}"
                    }
                }
            }
        }
    }
}

#[component]
fn ActionLog(request: MedicalRequest) -> Element {
    rsx! {
        div { style: "{CARD_STYLE}",
            h3 { "Historique" }
            if request.actions.is_empty() {
                p { style: "color: #6b7280;", "Aucune action" }
            }
            for action in request.actions.iter() {
                div { key: "{action.id}", style: "display: flex; justify-content: space-between; gap: 8px;",
                    span {
                        span {
                            style: "color: {tag_color(action.kind.tag())}; font-size: 11px; margin-right: 6px;",
                            "{action.kind.tag()}"
                        }
                        "{action.description()}"
                    }
                    small { style: "color: #6b7280;",
                        "{action.created_by} · {stamp(&action.created_at)}"
                    }
                }
            }
        }
    }
}

#[component]
fn AppointmentCard(request: MedicalRequest) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<AppServices>();
    let mut date = use_signal(String::new);
    let mut kind = use_signal(AppointmentType::default);
    let mut center_id = use_signal(String::new);
    let id = request.id.clone();

    let centers = state.centers.read().clone();
    let selected = centers.iter().find(|center| center.id == center_id()).cloned();
    let points: Vec<MapPoint> = centers
        .iter()
        .map(|center| MapPoint::for_center(center, selected.as_ref().map(|center| center.id.as_str())))
        .collect();
    let map = MapView::from_config(services.map_token.as_deref(), &points);

    rsx! {
        div { style: "{CARD_STYLE}",
            h3 { "Rendez-vous" }
            if let Some(scheduled) = request.appointment_date.as_deref() {
                p {
                    "Programmé le {display_datetime(scheduled)}"
                    if let Some(booked) = request.appointment_type {
                        " · {booked.label()}"
                    }
                }
                if let Some(location) = request.appointment_location.as_ref() {
                    p { style: "color: #6b7280;", "{location.address}" }
                }
            }
            input {
                style: "{INPUT_STYLE}",
                r#type: "datetime-local",
                value: "{date}",
                oninput: move |event| date.set(event.value()),
            }
            select {
                style: "{INPUT_STYLE}",
                onchange: move |event| {
                    if let Some(parsed) = AppointmentType::parse(&event.value()) {
                        kind.set(parsed);
                    }
                },
                for (value, text) in AppointmentType::options() {
                    option { value: "{value}", selected: value == kind().as_str(), "{text}" }
                }
            }
            if kind() == AppointmentType::InPerson {
                select {
                    style: "{INPUT_STYLE}",
                    onchange: move |event| center_id.set(event.value()),
                    option { value: "", "Choisir un centre médical" }
                    for center in centers.iter() {
                        option {
                            key: "{center.id}",
                            value: "{center.id}",
                            selected: center.id == center_id(),
                            "{center.name} ({center.city})"
                        }
                    }
                }
                MapPanel { view: map }
            }
            button {
                style: "{button_style(true)}",
                onclick: move |_| {
                    let draft = AppointmentDraft {
                        date: date(),
                        kind: kind(),
                        center: selected.clone(),
                    };
                    let scheduled = state.update_request(&id, |request| {
                        services.workflow.schedule_appointment(request, &draft)
                    });
                    match scheduled {
                        Some(Ok(_)) => {
                            date.set(String::new());
                            state.notify("Rendez-vous programmé");
                        }
                        Some(Err(err)) => state.notify(format!("Programmation impossible : {err}")),
                        None => state.notify(format!("Demande introuvable : {id}")),
                    }
                },
                "Programmer"
            }
        }
    }
}

#[component]
fn ReportCard(request: MedicalRequest) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<AppServices>();

    let Some(report) = request.medical_report.clone() else {
        return rsx! {
            div { style: "{CARD_STYLE}",
                h3 { "Compte rendu médical" }
                p { style: "color: #6b7280;", "Aucun compte rendu disponible" }
            }
        };
    };

    let report_id = report.id.clone();

    rsx! {
        div { style: "{CARD_STYLE}",
            h3 { "Compte rendu médical" }
            p { "{report.id} · {report.doctor_name}" }
            p { style: "color: #6b7280;",
                "{display_datetime(&report.created_at)} · {report.format} · {report.size} · {report.status.label()}"
            }
            if report.is_confidential {
                p { style: "color: #dc2626; font-weight: 600;", "Document confidentiel" }
            }
            button {
                style: "{button_style(true)}",
                onclick: move |_| {
                    let opened = match services.workflow.report_access(&request) {
                        Ok(ReportAccess::Direct) => true,
                        Ok(ReportAccess::NeedsConfirmation) => dialogs::confirm(
                            "Document confidentiel",
                            "Ce compte rendu est confidentiel. Confirmez-vous son ouverture ?",
                        ),
                        Err(err) => {
                            state.notify(format!("Compte rendu indisponible : {err}"));
                            return;
                        }
                    };
                    if opened {
                        state.notify(format!("Compte rendu {report_id} ouvert"));
                    }
                },
                "Consulter"
            }
        }
    }
}
