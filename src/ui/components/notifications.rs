use chrono::Utc;
use dioxus::prelude::*;

use crate::domain::entities::notification::{dismiss, mark_read, unread_count};
use crate::ui::components::table::elapsed_label;
use crate::ui::state::app_state::AppState;

const PANEL_STYLE: &str = "position: absolute; right: 0; top: 36px; width: 360px; max-height: 420px; overflow-y: auto; background: #fff; color: #111827; border-radius: 8px; box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2); z-index: 50;";
const BADGE_STYLE: &str = "position: absolute; top: -4px; right: -4px; background: #ef4444; color: #fff; font-size: 11px; font-weight: 700; border-radius: 9px; min-width: 18px; height: 18px; display: flex; align-items: center; justify-content: center;";

fn item_style(read: bool) -> &'static str {
    if read {
        "padding: 10px 14px; border-bottom: 1px solid #f3f4f6; cursor: pointer;"
    } else {
        "padding: 10px 14px; border-bottom: 1px solid #f3f4f6; cursor: pointer; background: #eff6ff;"
    }
}

/// Bell with the unread count; a click on an entry marks it read.
#[component]
pub fn NotificationCenter() -> Element {
    let mut state = use_context::<AppState>();
    let mut open = use_signal(|| false);

    let notifications = state.notifications.read().clone();
    let unread = unread_count(&notifications);
    let now = Utc::now();

    rsx! {
        div { style: "position: relative;",
            button {
                style: "position: relative; border: none; background: transparent; color: #fff; font-size: 18px; cursor: pointer; padding: 4px 8px;",
                onclick: move |_| open.set(!open()),
                "🔔"
                if unread > 0 {
                    span { style: "{BADGE_STYLE}", "{unread}" }
                }
            }
            if open() {
                div { style: "{PANEL_STYLE}",
                    div { style: "padding: 12px 14px; border-bottom: 1px solid #e5e7eb; font-weight: 600;",
                        "Notifications"
                    }
                    if notifications.is_empty() {
                        div { style: "padding: 16px; text-align: center; color: #6b7280;", "Aucune notification" }
                    }
                    for notification in notifications.iter() {
                        div {
                            key: "{notification.id}",
                            style: "{item_style(notification.read)}",
                            onclick: {
                                let id = notification.id.clone();
                                move |_| {
                                    mark_read(&mut state.notifications.write(), &id);
                                }
                            },
                            div { style: "display: flex; justify-content: space-between; color: #4b5563; font-family: monospace; font-size: 12px;",
                                span { "{notification.request_id}" }
                                button {
                                    style: "border: none; background: transparent; color: #9ca3af; cursor: pointer;",
                                    onclick: {
                                        let id = notification.id.clone();
                                        move |event: MouseEvent| {
                                            event.stop_propagation();
                                            dismiss(&mut state.notifications.write(), &id);
                                        }
                                    },
                                    "×"
                                }
                            }
                            div { style: "font-weight: 600;", "{notification.title}" }
                            if let Some(practitioner) = notification.practitioner.as_ref() {
                                div { style: "color: #374151; font-size: 13px;", "{practitioner}" }
                            }
                            div { style: "color: #4b5563; font-size: 13px;", "{notification.message}" }
                            if let Some(pending) = notification.pending_label() {
                                div { style: "color: #ca8a04; font-size: 13px;", "{pending}" }
                            }
                            div { style: "display: flex; justify-content: space-between; color: #6b7280; font-size: 12px; margin-top: 4px;",
                                span { "{elapsed_label(notification.timestamp, now)}" }
                                span { "{notification.kind.icon()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
