use dioxus::prelude::*;

use crate::domain::entities::session::UserRole;
use crate::infra::config::settings::AppConfig;
use crate::ui::components::notifications::NotificationCenter;
use crate::ui::components::table::{page_container_style, root_container_style};
use crate::ui::pages::admin::AdminPage;
use crate::ui::pages::agents::AgentsPage;
use crate::ui::pages::appointments::AppointmentsPage;
use crate::ui::pages::dashboard::DashboardPage;
use crate::ui::pages::login::LoginPage;
use crate::ui::pages::map_usage::MapUsagePage;
use crate::ui::pages::new_request::NewRequestPage;
use crate::ui::pages::payments::PaymentsPage;
use crate::ui::pages::practitioners::PractitionersPage;
use crate::ui::pages::request_details::RequestDetailsPage;
use crate::ui::state::app_state::{AppServices, AppState, Page};

/// Navigation entries offered to a role, in menu order.
pub fn nav_entries(role: UserRole) -> Vec<(&'static str, Page)> {
    match role {
        UserRole::Admin => vec![
            ("Administration", Page::Admin),
            ("Utilisation carte", Page::MapUsage),
            ("Rendez-vous", Page::Appointments),
            ("Paiements", Page::Payments),
        ],
        UserRole::Assistant => vec![
            ("Tableau de bord", Page::Dashboard),
            ("Nouvelle demande", Page::NewRequest),
            ("Praticiens", Page::Practitioners),
            ("Rendez-vous", Page::Appointments),
        ],
        UserRole::Manager => vec![
            ("Tableau de bord", Page::Dashboard),
            ("Nouvelle demande", Page::NewRequest),
            ("Praticiens", Page::Practitioners),
            ("Rendez-vous", Page::Appointments),
            ("Agents", Page::Agents),
        ],
    }
}

fn nav_button_style(active: bool) -> &'static str {
    if active {
        "border: none; background: #1d4ed8; color: #fff; padding: 6px 12px; border-radius: 6px; cursor: pointer;"
    } else {
        "border: none; background: transparent; color: #e5e7eb; padding: 6px 12px; border-radius: 6px; cursor: pointer;"
    }
}

#[component]
fn NavBar() -> Element {
    let mut state = use_context::<AppState>();
    let services = use_context::<AppServices>();
    let Some(user) = state.user.read().clone() else {
        return rsx! {};
    };
    let page = state.page.read().clone();

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center; padding: 8px 16px; background: #1e3a8a; color: #fff;",
            strong { style: "margin-right: 16px;", "Assistance médicale" }
            for (label, target) in nav_entries(user.role) {
                button {
                    key: "{label}",
                    style: "{nav_button_style(page == target)}",
                    onclick: {
                        let target = target.clone();
                        move |_| state.navigate(target.clone())
                    },
                    "{label}"
                }
            }
            div { style: "margin-left: auto;", NotificationCenter {} }
            span { "{user.full_name()}" }
            button {
                style: "{nav_button_style(false)}",
                onclick: move |_| {
                    services.session.logout();
                    state.user.set(None);
                    state.navigate(Page::Login);
                    state.notify("Déconnecté");
                },
                "Déconnexion"
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let services = use_context_provider(|| AppServices::from_config(&AppConfig::from_env()));
    let state = AppState::new();
    use_context_provider(|| state);
    let status = state.status;

    let query = services.query.clone();
    use_effect(move || state.load(&query));

    let body = match state.page.read().clone() {
        Page::Login => rsx! { LoginPage {} },
        Page::Dashboard => rsx! { DashboardPage {} },
        Page::NewRequest => rsx! { NewRequestPage {} },
        Page::RequestDetails(id) => rsx! { RequestDetailsPage { id: id } },
        Page::Practitioners => rsx! { PractitionersPage {} },
        Page::Admin => rsx! { AdminPage {} },
        Page::MapUsage => rsx! { MapUsagePage {} },
        Page::Appointments => rsx! { AppointmentsPage {} },
        Page::Payments => rsx! { PaymentsPage {} },
        Page::Agents => rsx! { AgentsPage {} },
    };

    rsx! {
        div { style: "{root_container_style()}",
            NavBar {}
            div { style: "{page_container_style()}", {body} }
            div {
                style: "padding: 6px 16px; border-top: 1px solid #e5e7eb; background: #fff; color: #374151; font-size: 13px;",
                "{status}"
            }
        }
    }
}
