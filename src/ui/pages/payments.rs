use dioxus::prelude::*;

use crate::domain::entities::payment::{Payment, PaymentStatus};
use crate::domain::entities::record::EnumField;
use crate::domain::query::criteria::ListFilters;
use crate::domain::query::engine;
use crate::infra::export::csv::format_euros;
use crate::platform::desktop::dialogs;
use crate::ui::components::filters::{enum_options, DateInput, EnumSelect, SearchInput};
use crate::ui::components::table::{
    button_style, column_cell_style, table_cell_style, table_container_style,
    table_header_cell_style, toolbar_style, EmptyState, SortableHeader, StatCard,
};
use crate::ui::state::app_state::{AppServices, AppState};
use crate::usecase::services::export_service::{payments_report, ExportService};
use crate::usecase::services::payment_service::apply_update;
use crate::usecase::services::query_service::QueryService;

const COLUMNS: &[(&str, &str)] = &[
    ("Paiement", "id"),
    ("Médecin", "doctor_name"),
    ("Rapports", "reports"),
    ("Montant", "amount"),
    ("Date", "date"),
    ("Statut", "status"),
];

#[component]
pub fn PaymentsPage() -> Element {
    let mut state = use_context::<AppState>();
    let services = use_context::<AppServices>();
    let mut filters = use_signal(|| ListFilters::for_schema(&Payment::SCHEMA));
    let mut in_flight = use_signal(|| None::<String>);

    let payments = state.payments.read();
    let current = filters.read().clone();
    let rows = QueryService::filter(&payments, &Payment::SCHEMA, &current);
    let pending: Vec<&Payment> = rows
        .iter()
        .copied()
        .filter(|payment| payment.status == PaymentStatus::Pending)
        .collect();
    let pending_total = engine::sum_field(&pending, "amount");
    let left = table_cell_style("left");
    let cell = |field: &str| column_cell_style(&Payment::SCHEMA, field);
    let export_service = services.export.clone();

    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center;",
            h2 { "Paiements" }
            button {
                style: "{button_style(true)}",
                onclick: move |_| {
                    let payments = state.payments.read();
                    let rows = QueryService::filter(&payments, &Payment::SCHEMA, &filters.read());
                    let report = payments_report(&rows, ExportService::today());
                    state.export(&export_service, &report);
                },
                "Exporter CSV"
            }
        }

        div { style: "display: flex; gap: 12px; flex-wrap: wrap;",
            StatCard { label: "Paiements", value: rows.len().to_string() }
            StatCard {
                label: "En attente",
                value: format_euros(pending_total),
                detail: format!("{} paiement(s)", pending.len()),
            }
        }

        div { style: "{toolbar_style()}",
            SearchInput {
                placeholder: "Médecin ou référence",
                value: current.search.clone(),
                on_change: move |term: String| filters.write().search = term,
            }
            EnumSelect {
                options: enum_options::<PaymentStatus>("Tous les statuts"),
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
                        th { style: "{table_header_cell_style()}", "" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        EmptyState { colspan: COLUMNS.len() + 1, message: "Aucun paiement ne correspond aux filtres" }
                    }
                    for payment in rows.iter() {
                        tr { key: "{payment.id}",
                            td { style: "{left}", "{payment.id}" }
                            td { style: "{left}", "{payment.doctor_name}" }
                            td { style: cell("reports"), "{payment.reports}" }
                            td { style: cell("amount"), "{format_euros(payment.amount)}" }
                            td { style: "{left}", "{payment.date}" }
                            td { style: "{left}", "{payment.status.label()}" }
                            td { style: "{left}",
                                if payment.can_initiate() {
                                    button {
                                        style: "{button_style(false)}",
                                        disabled: in_flight().is_some(),
                                        onclick: {
                                            let payment = (*payment).clone();
                                            let service = services.payments.clone();
                                            move |_| {
                                                if !dialogs::confirm("Confirmer le paiement", &payment.confirmation_prompt()) {
                                                    return;
                                                }
                                                let payment = payment.clone();
                                                let service = service.clone();
                                                in_flight.set(Some(payment.id.clone()));
                                                spawn(async move {
                                                    if let Some(updated) = service.confirm(&payment).await {
                                                        apply_update(&mut state.payments.write(), updated);
                                                        state.notify(format!("Paiement {} initié", payment.id));
                                                    }
                                                    in_flight.set(None);
                                                });
                                            }
                                        },
                                        if in_flight().as_deref() == Some(payment.id.as_str()) { "Traitement…" } else { "Payer" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
