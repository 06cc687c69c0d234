use chrono::Utc;
use dioxus::prelude::*;

use crate::domain::entities::agent::{active_count, Agent, AgentDay, AgentStatus};
use crate::domain::entities::record::{parse_calendar_date, EnumField};
use crate::ui::components::filters::DateInput;
use crate::ui::components::table::{button_style, elapsed_label, toolbar_style, StatCard};
use crate::ui::state::app_state::{AppState, Page};

const BADGE_STYLE: &str = "border-radius: 10px; padding: 2px 8px; font-size: 12px;";

fn badge_style(status: AgentStatus) -> String {
    let (background, color) = match status {
        AgentStatus::Available => ("#dcfce7", "#166534"),
        AgentStatus::Busy => ("#fef9c3", "#854d0e"),
        AgentStatus::Offline => ("#f3f4f6", "#1f2937"),
    };
    format!("background: {background}; color: {color}; {BADGE_STYLE}")
}

fn row_style(expanded: bool) -> &'static str {
    if expanded {
        "background: #eef4ff; border-bottom: 1px solid #e5e7eb; padding: 12px 16px; cursor: pointer;"
    } else {
        "background: #fff; border-bottom: 1px solid #e5e7eb; padding: 12px 16px; cursor: pointer;"
    }
}

#[component]
pub fn AgentsPage() -> Element {
    let state = use_context::<AppState>();
    let mut date_input = use_signal(String::new);
    let mut expanded = use_signal(|| None::<String>);

    let date = parse_calendar_date(&date_input());
    let now = Utc::now();
    let agents = state.agents.read();
    let rows: Vec<(Agent, AgentDay)> = agents
        .iter()
        .map(|agent| (agent.clone(), agent.activity_on(date)))
        .collect();
    let active = active_count(&agents, date);
    let period = match date {
        Some(date) => format!("le {}", date.format("%d/%m/%Y")),
        None => "en ce moment".to_string(),
    };

    rsx! {
        div { style: "display: flex; gap: 12px; align-items: center;",
            button {
                style: "{button_style(false)}",
                onclick: move |_| state.navigate(Page::Dashboard),
                "◀ Retour"
            }
            h2 { "Agents actifs" }
        }

        div { style: "{toolbar_style()}",
            StatCard {
                label: "Agents actifs",
                value: format!("{active} / {}", rows.len()),
                detail: period,
            }
            DateInput {
                value: date_input(),
                on_change: move |value: String| date_input.set(value),
            }
            if !date_input().is_empty() {
                button {
                    style: "{button_style(false)}",
                    onclick: move |_| date_input.set(String::new()),
                    "Aujourd'hui"
                }
            }
        }

        div { style: "border: 1px solid #e5e7eb; border-radius: 8px; overflow: hidden;",
            for (agent, activity) in rows.iter() {
                div {
                    key: "{agent.id}",
                    style: "{row_style(expanded().as_deref() == Some(agent.id.as_str()))}",
                    onclick: {
                        let id = agent.id.clone();
                        move |_| {
                            let next = if expanded().as_deref() == Some(id.as_str()) {
                                None
                            } else {
                                Some(id.clone())
                            };
                            expanded.set(next);
                        }
                    },
                    div { style: "display: flex; justify-content: space-between; align-items: center;",
                        strong { "{agent.name}" }
                        span { style: "{badge_style(activity.status)}", "{activity.status.label()}" }
                    }
                    div { style: "color: #6b7280;", "{agent.role}" }
                    div { style: "display: flex; gap: 24px; margin-top: 6px; color: #374151;",
                        span { "{activity.active_requests} demandes actives" }
                        span { "{activity.completed_requests} complétées" }
                    }
                    if expanded().as_deref() == Some(agent.id.as_str()) {
                        div { style: "margin-top: 8px; color: #6b7280; display: flex; flex-direction: column; gap: 2px;",
                            span { "{agent.location}" }
                            span { "{agent.phone}" }
                            if date.is_none() {
                                span { "Dernière activité : {elapsed_label(agent.last_active, now)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
