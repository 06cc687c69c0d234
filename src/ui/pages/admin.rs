use chrono::Utc;
use dioxus::prelude::*;

use crate::domain::entities::payment::Payment;
use crate::infra::export::csv::{format_euros, format_number};
use crate::ui::components::table::{button_style, display_datetime, toolbar_style, StatCard};
use crate::ui::state::app_state::{AppServices, AppState, Page};
use crate::usecase::services::admin_service::AdminOverview;
use crate::usecase::services::export_service::{billing_report, ExportService};

const CARD_STYLE: &str = "background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; display: flex; flex-direction: column; gap: 8px;";
const ROW_STYLE: &str = "display: flex; justify-content: space-between; border-top: 1px solid #f3f4f6; padding-top: 6px;";

#[component]
fn SectionHeader(title: &'static str, target: Page) -> Element {
    let state = use_context::<AppState>();
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center;",
            h3 { "{title}" }
            button {
                style: "{button_style(false)}",
                onclick: move |_| state.navigate(target.clone()),
                "Voir détails"
            }
        }
    }
}

#[component]
pub fn AdminPage() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<AppServices>();
    let mut month = use_signal(|| Utc::now().format("%Y-%m").to_string());

    let overview = AdminOverview::compute(
        &state.usage.read(),
        &state.appointments.read(),
        &state.payments.read(),
    );
    let average = format!("{:.1}", overview.average_views_per_request);

    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center;",
            h2 { "Administration" }
            div { style: "{toolbar_style()}",
                input {
                    style: "border: 1px solid #bbb; border-radius: 6px; padding: 5px 8px;",
                    r#type: "month",
                    value: "{month}",
                    oninput: move |event| month.set(event.value()),
                }
                button {
                    style: "{button_style(true)}",
                    onclick: move |_| {
                        let payments = state.payments.read();
                        let rows: Vec<&Payment> = payments.iter().collect();
                        let report = billing_report(&rows, &month(), ExportService::today());
                        state.export(&services.export, &report);
                    },
                    "Générer rapport CSV"
                }
            }
        }

        div { style: "display: flex; gap: 12px; flex-wrap: wrap;",
            StatCard {
                label: "Utilisation de la carte",
                value: format_euros(overview.map_revenue),
                detail: format!("{} recherches", format_number(overview.map_searches)),
            }
            StatCard {
                label: "Rapports médicaux",
                value: format_euros(overview.report_revenue),
                detail: format!("{} rapports", overview.completed_reports),
            }
            StatCard {
                label: "Paiements en attente",
                value: format_euros(overview.pending_payments_total),
                detail: format!("{} médecin(s)", overview.doctors_awaiting_payment),
            }
        }

        div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
            div { style: "{CARD_STYLE}",
                SectionHeader { title: "Utilisation de la carte", target: Page::MapUsage }
                p { "Moyenne de {average} recherches par demande" }
                for agent in overview.top_agents.iter() {
                    div { key: "{agent.name}", style: "{ROW_STYLE}",
                        span { "{agent.name}" }
                        span { "{agent.searches} recherches" }
                    }
                }
            }
            div { style: "{CARD_STYLE}",
                SectionHeader { title: "Rendez-vous", target: Page::Appointments }
                p {
                    "{overview.appointments_completed} terminé(s) sur {overview.appointments_total} · {overview.pending_reports} rapport(s) en attente"
                }
                for appointment in overview.recent_appointments.iter() {
                    div { key: "{appointment.id}", style: "{ROW_STYLE}",
                        span { "{appointment.patient_name} · {appointment.doctor_name}" }
                        span { "{display_datetime(&appointment.date)}" }
                    }
                }
            }
            div { style: "{CARD_STYLE}",
                SectionHeader { title: "Paiements récents", target: Page::Payments }
                for payment in overview.recent_payments.iter() {
                    div { key: "{payment.id}", style: "{ROW_STYLE}",
                        span { "{payment.doctor_name} · {payment.reports} rapport(s)" }
                        span { "{format_euros(payment.amount)} · {payment.date}" }
                    }
                }
            }
        }
    }
}
