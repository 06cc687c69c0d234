use dioxus::prelude::*;

use crate::domain::entities::appointment::{Appointment, AppointmentStatus};
use crate::domain::entities::record::EnumField;
use crate::domain::query::criteria::ListFilters;
use crate::ui::components::filters::{enum_options, DateInput, EnumSelect, SearchInput};
use crate::ui::components::table::{
    button_style, display_datetime, table_cell_style, table_container_style, toolbar_style,
    EmptyState, SortableHeader, StatCard,
};
use crate::ui::state::app_state::{AppServices, AppState};
use crate::usecase::services::export_service::{appointments_report, ExportService};
use crate::usecase::services::query_service::QueryService;

const COLUMNS: &[(&str, &str)] = &[
    ("Rendez-vous", "id"),
    ("Dossier", "request_id"),
    ("Patient", "patient_name"),
    ("Médecin", "doctor_name"),
    ("Type", "kind"),
    ("Lieu", "location"),
    ("Date", "date"),
    ("Statut", "status"),
    ("Rapport", "report_status"),
];

#[component]
pub fn AppointmentsPage() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<AppServices>();
    let mut filters = use_signal(|| ListFilters::for_schema(&Appointment::SCHEMA));

    let appointments = state.appointments.read();
    let current = filters.read().clone();
    let rows = QueryService::filter(&appointments, &Appointment::SCHEMA, &current);
    let count = |status: AppointmentStatus| rows.iter().filter(|row| row.status == status).count();
    let scheduled = count(AppointmentStatus::Scheduled);
    let completed = count(AppointmentStatus::Completed);
    let cancelled = count(AppointmentStatus::Cancelled);
    let left = table_cell_style("left");

    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center;",
            h2 { "Rendez-vous" }
            button {
                style: "{button_style(true)}",
                onclick: move |_| {
                    let appointments = state.appointments.read();
                    let rows = QueryService::filter(&appointments, &Appointment::SCHEMA, &filters.read());
                    let report = appointments_report(&rows, ExportService::today());
                    state.export(&services.export, &report);
                },
                "Exporter CSV"
            }
        }

        div { style: "display: flex; gap: 12px; flex-wrap: wrap;",
            StatCard { label: "Programmés", value: scheduled.to_string() }
            StatCard { label: "Terminés", value: completed.to_string() }
            StatCard { label: "Annulés", value: cancelled.to_string() }
        }

        div { style: "{toolbar_style()}",
            SearchInput {
                placeholder: "Patient, médecin ou dossier",
                value: current.search.clone(),
                on_change: move |term: String| filters.write().search = term,
            }
            EnumSelect {
                options: enum_options::<AppointmentStatus>("Tous les statuts"),
                value: current.choice("status").to_string(),
                on_change: move |value: String| {
                    filters.write().enum_choices.insert("status".to_string(), value);
                },
            }
            DateInput {
                value: current.date.clone(),
                on_change: move |value: String| filters.write().set_date(value),
            }
        }

        div { style: "{table_container_style()}",
            table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                thead {
                    tr {
                        for (label, field) in COLUMNS.iter().copied() {
                            SortableHeader {
                                key: "{field}",
                                label: label,
                                field: field,
                                sort: current.sort.clone(),
                                on_sort: move |sort| filters.write().sort = Some(sort),
                            }
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        EmptyState { colspan: COLUMNS.len(), message: "Aucun rendez-vous ne correspond aux filtres" }
                    }
                    for appointment in rows.iter() {
                        tr { key: "{appointment.id}",
                            td { style: "{left}", "{appointment.id}" }
                            td { style: "{left}", "{appointment.request_id}" }
                            td { style: "{left}", "{appointment.patient_name}" }
                            td { style: "{left}", "{appointment.doctor_name}" }
                            td { style: "{left}", "{appointment.kind.label()}" }
                            td { style: "{left}", "{appointment.location}" }
                            td { style: "{left}", "{display_datetime(&appointment.date)}" }
                            td { style: "{left}", "{appointment.status.label()}" }
                            td { style: "{left}", "{appointment.report_status.label()}" }
                        }
                    }
                }
            }
        }
    }
}
