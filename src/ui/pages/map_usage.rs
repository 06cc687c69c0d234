use dioxus::prelude::*;

use crate::domain::entities::map_usage::{BillingStatus, MapUsageEntry};
use crate::domain::entities::record::EnumField;
use crate::domain::query::criteria::ListFilters;
use crate::domain::query::engine;
use crate::infra::export::csv::format_euros;
use crate::ui::components::filters::{enum_options, DateInput, EnumSelect, SearchInput};
use crate::ui::components::table::{
    button_style, column_cell_style, display_datetime, table_cell_style, table_container_style,
    toolbar_style, EmptyState, SortableHeader, StatCard,
};
use crate::ui::state::app_state::{AppServices, AppState};
use crate::usecase::services::export_service::{map_usage_report, ExportService};
use crate::usecase::services::query_service::QueryService;

const COLUMNS: &[(&str, &str)] = &[
    ("Dossier", "request_id"),
    ("Patient", "patient_name"),
    ("Agent", "agent_name"),
    ("Date", "timestamp"),
    ("Durée (min)", "duration"),
    ("Vues", "view_count"),
    ("Rapport", "report_date"),
    ("Frais carte", "map_usage"),
    ("Frais rapport", "report_fee"),
    ("Total", "billing_total"),
    ("Facturation", "billing_status"),
];

fn report_date_label(entry: &MapUsageEntry) -> String {
    entry
        .report_date
        .as_deref()
        .map(display_datetime)
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn MapUsagePage() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<AppServices>();
    let mut filters = use_signal(|| ListFilters::for_schema(&MapUsageEntry::SCHEMA));

    let usage = state.usage.read();
    let current = filters.read().clone();
    let rows = QueryService::filter(&usage, &MapUsageEntry::SCHEMA, &current);
    let views = engine::sum_field(&rows, "view_count");
    let revenue = engine::sum_field(&rows, "billing_total");
    let left = table_cell_style("left");
    let cell = |field: &str| column_cell_style(&MapUsageEntry::SCHEMA, field);

    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center;",
            h2 { "Utilisation de la carte" }
            button {
                style: "{button_style(true)}",
                onclick: move |_| {
                    let usage = state.usage.read();
                    let rows = QueryService::filter(&usage, &MapUsageEntry::SCHEMA, &filters.read());
                    let report = map_usage_report(&rows, ExportService::today());
                    state.export(&services.export, &report);
                },
                "Exporter CSV"
            }
        }

        div { style: "display: flex; gap: 12px; flex-wrap: wrap;",
            StatCard { label: "Consultations", value: rows.len().to_string() }
            StatCard { label: "Vues", value: views.to_string() }
            StatCard { label: "Montant total", value: format_euros(revenue) }
        }

        div { style: "{toolbar_style()}",
            SearchInput {
                placeholder: "Patient, agent ou dossier",
                value: current.search.clone(),
                on_change: move |term: String| filters.write().search = term,
            }
            EnumSelect {
                options: enum_options::<BillingStatus>("Toutes les facturations"),
                value: current.choice("billing_status").to_string(),
                on_change: move |value: String| {
                    filters.write().enum_choices.insert("billing_status".to_string(), value);
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
                        EmptyState { colspan: COLUMNS.len(), message: "Aucune consultation ne correspond aux filtres" }
                    }
                    for entry in rows.iter() {
                        tr { key: "{entry.id}",
                            td { style: "{left}", "{entry.request_id}" }
                            td { style: "{left}", "{entry.patient_name}" }
                            td { style: "{left}", "{entry.agent_name}" }
                            td { style: "{left}", "{display_datetime(&entry.timestamp)}" }
                            td { style: cell("duration"), "{entry.duration_minutes()}" }
                            td { style: cell("view_count"), "{entry.view_count}" }
                            td { style: "{left}", "{report_date_label(entry)}" }
                            td { style: cell("map_usage"), "{format_euros(entry.billing.map_usage)}" }
                            td { style: cell("report_fee"), "{format_euros(entry.billing.report_fee)}" }
                            td { style: cell("billing_total"), "{format_euros(entry.billing.total)}" }
                            td { style: "{left}", "{entry.billing.status.label()}" }
                        }
                    }
                }
            }
        }
    }
}
