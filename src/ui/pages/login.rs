use dioxus::prelude::*;

use crate::domain::entities::record::EnumField;
use crate::domain::entities::session::UserRole;
use crate::ui::components::table::button_style;
use crate::ui::state::app_state::{AppServices, AppState, Page};

/// Role picker standing in for a real sign in.
#[component]
pub fn LoginPage() -> Element {
    let mut state = use_context::<AppState>();
    let services = use_context::<AppServices>();

    rsx! {
        div {
            style: "margin: auto; background: #fff; border: 1px solid #e5e7eb; border-radius: 12px; padding: 32px; display: flex; flex-direction: column; gap: 12px; min-width: 320px;",
            h2 { "Assistance médicale" }
            p { style: "color: #6b7280;", "Choisissez votre profil pour continuer" }
            for role in UserRole::ALL.iter().copied() {
                button {
                    key: "{role.as_str()}",
                    style: "{button_style(role == UserRole::Assistant)}",
                    onclick: {
                        let session = services.session.clone();
                        move |_| {
                            let user = session.login(role);
                            state.notify(format!("Connecté en tant que {}", user.full_name()));
                            state.user.set(Some(user));
                            state.navigate(Page::from(role.home_page()));
                        }
                    },
                    "{role.label()}"
                }
            }
        }
    }
}
