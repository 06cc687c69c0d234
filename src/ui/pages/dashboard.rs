use dioxus::prelude::*;

use crate::domain::entities::record::EnumField;
use crate::domain::entities::request::{MedicalRequest, RequestStatus, UrgencyLevel};
use crate::domain::query::criteria::ListFilters;
use crate::ui::components::filters::{enum_options, DateInput, EnumSelect, SearchInput};
use crate::ui::components::table::{
    button_style, display_datetime, table_cell_style, table_container_style, toolbar_style,
    EmptyState, SortableHeader, StatCard,
};
use crate::ui::state::app_state::{AppState, Page};
use crate::usecase::services::admin_service::RequestOverview;
use crate::usecase::services::query_service::QueryService;

fn urgency_color(urgency: UrgencyLevel) -> &'static str {
    match urgency {
        UrgencyLevel::Low => "#16a34a",
        UrgencyLevel::Medium => "#ca8a04",
        UrgencyLevel::High => "#ea580c",
        UrgencyLevel::Critical => "#dc2626",
    }
}

const COLUMNS: &[(&str, &str)] = &[
    ("Dossier", "id"),
    ("Patient", "patient_name"),
    ("Urgence", "urgency"),
    ("Statut", "status"),
    ("Localisation", "location"),
    ("Créé le", "created_at"),
];

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<AppState>();
    let mut filters = use_signal(|| ListFilters::for_schema(&MedicalRequest::SCHEMA));

    let requests = state.requests.read();
    let overview = RequestOverview::compute(&requests);
    let current = filters.read().clone();
    let rows = QueryService::filter(&requests, &MedicalRequest::SCHEMA, &current);
    let left = table_cell_style("left");
    let right = table_cell_style("right");
    let show_agents = state
        .user
        .read()
        .as_ref()
        .is_some_and(|user| user.role.sees_team_statistics());

    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center;",
            h2 { "Tableau de bord" }
            button {
                style: "{button_style(true)}",
                onclick: move |_| state.navigate(Page::NewRequest),
                "Nouvelle demande"
            }
        }

        div { style: "display: flex; gap: 12px; flex-wrap: wrap;",
            StatCard { label: "Demandes", value: overview.total.to_string() }
            StatCard { label: "Nouvelles", value: overview.new.to_string() }
            StatCard { label: "En cours", value: overview.in_progress.to_string() }
            StatCard { label: "Terminées", value: overview.completed.to_string() }
            if show_agents {
                StatCard {
                    label: "Agents actifs",
                    value: overview.agents.to_string(),
                    detail: "Voir les agents".to_string(),
                    on_open: move |_| state.navigate(Page::Agents),
                }
            }
        }

        div { style: "{toolbar_style()}",
            SearchInput {
                placeholder: "Rechercher un patient",
                value: current.search.clone(),
                on_change: move |term: String| filters.write().search = term,
            }
            EnumSelect {
                options: enum_options::<RequestStatus>("Tous les statuts"),
                value: current.choice("status").to_string(),
                on_change: move |value: String| {
                    filters.write().enum_choices.insert("status".to_string(), value);
                },
            }
            EnumSelect {
                options: enum_options::<UrgencyLevel>("Toutes les urgences"),
                value: current.choice("urgency").to_string(),
                on_change: move |value: String| {
                    filters.write().enum_choices.insert("urgency".to_string(), value);
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
                        EmptyState { colspan: COLUMNS.len(), message: "Aucune demande ne correspond aux filtres" }
                    }
                    for request in rows.iter() {
                        tr {
                            key: "{request.id}",
                            style: "cursor: pointer;",
                            onclick: {
                                let id = request.id.clone();
                                move |_| state.navigate(Page::RequestDetails(id.clone()))
                            },
                            td { style: "{left}", "{request.id}" }
                            td { style: "{left}", "{request.patient_name}" }
                            td {
                                style: "{left} color: {urgency_color(request.urgency)}; font-weight: 600;",
                                "{request.urgency.label()}"
                            }
                            td { style: "{left}", "{request.status.label()}" }
                            td { style: "{left}", "{request.location}" }
                            td { style: "{right}", "{display_datetime(&request.created_at)}" }
                        }
                    }
                }
            }
        }
    }
}
