use dioxus::prelude::*;

use crate::domain::entities::medical_center::{
    language_name, suggestions, CenterFilters, MedicalCenter, CITY_SUGGESTIONS, LANGUAGES,
    SPECIALTY_SUGGESTIONS,
};
use crate::domain::entities::practitioner::profile_for;
use crate::infra::map::static_map::{MapPoint, MapView};
use crate::ui::components::map_panel::MapPanel;
use crate::ui::components::practitioner_profile::PractitionerProfilePanel;
use crate::ui::components::table::button_style;
use crate::ui::state::app_state::{AppServices, AppState};
use crate::usecase::services::query_service::QueryService;

const SEPARATOR: &str = ", ";
const CHIP_STYLE: &str = "display: inline-flex; gap: 4px; align-items: center; background: #dbeafe; color: #1e40af; border-radius: 12px; padding: 2px 10px; cursor: pointer;";
const INPUT_STYLE: &str = "border: 1px solid #bbb; border-radius: 6px; padding: 5px 8px;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChipKind {
    Specialty,
    City,
}

/// Text box with suggestion chips; Enter or a click on a suggestion adds
/// the value, a click on a selected chip removes it.
#[component]
fn ChipInput(
    placeholder: &'static str,
    pool: &'static [&'static str],
    selected: Vec<String>,
    on_add: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let mut typed = use_signal(String::new);
    let candidates = if typed().trim().is_empty() {
        Vec::new()
    } else {
        suggestions(pool, &typed(), &selected)
    };

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 6px;",
            input {
                style: "{INPUT_STYLE}",
                placeholder: "{placeholder}",
                value: "{typed}",
                oninput: move |event| typed.set(event.value()),
                onkeydown: move |event| {
                    if event.key() == Key::Enter {
                        on_add.call(typed());
                        typed.set(String::new());
                    }
                },
            }
            div { style: "display: flex; gap: 4px; flex-wrap: wrap;",
                for candidate in candidates {
                    span {
                        key: "{candidate}",
                        style: "{CHIP_STYLE} background: #f3f4f6; color: #374151;",
                        onclick: move |_| {
                            on_add.call(candidate.to_string());
                            typed.set(String::new());
                        },
                        "+ {candidate}"
                    }
                }
                for value in selected.iter().cloned() {
                    span {
                        key: "{value}",
                        style: "{CHIP_STYLE}",
                        onclick: {
                            let value = value.clone();
                            move |_| on_remove.call(value.clone())
                        },
                        "{value} ×"
                    }
                }
            }
        }
    }
}

fn edit_chips(mut filters: Signal<CenterFilters>, kind: ChipKind, value: String, adding: bool) {
    let mut filters = filters.write();
    let list = match kind {
        ChipKind::Specialty => &mut filters.specialties,
        ChipKind::City => &mut filters.cities,
    };
    if adding {
        CenterFilters::add(list, &value);
    } else {
        CenterFilters::toggle(list, &value);
    }
}

fn card_style(selected: bool) -> &'static str {
    if selected {
        "background: #eef4ff; border: 1px solid #2563eb; border-radius: 8px; padding: 12px; cursor: pointer;"
    } else {
        "background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px; cursor: pointer;"
    }
}

fn spoken_languages(center: &MedicalCenter) -> String {
    center
        .languages
        .iter()
        .map(|code| language_name(code))
        .collect::<Vec<_>>()
        .join(" · ")
}

#[component]
pub fn PractitionersPage() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<AppServices>();
    let mut filters = use_signal(CenterFilters::default);
    let mut selected_center = use_signal(|| None::<String>);
    let mut show_map = use_signal(|| false);
    let mut profile_center = use_signal(|| None::<String>);

    let centers = state.centers.read();
    let current = filters.read().clone();
    let results = QueryService::filter_centers(&centers, &current);
    let selected_id = selected_center();
    let points: Vec<MapPoint> = results
        .iter()
        .map(|center| MapPoint::for_center(center, selected_id.as_deref()))
        .collect();
    let map = MapView::from_config(services.map_token.as_deref(), &points);
    let profile = profile_center().and_then(|id| {
        let center = centers.iter().find(|center| center.id == id)?;
        profile_for(&state.profiles.read(), center)
    });

    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center;",
            h2 { "Recherche de praticiens" }
            button {
                style: "{button_style(false)}",
                onclick: move |_| show_map.set(!show_map()),
                if show_map() { "Vue liste" } else { "Vue carte" }
            }
        }

        div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px;",
            ChipInput {
                placeholder: "Spécialité",
                pool: SPECIALTY_SUGGESTIONS,
                selected: current.specialties.clone(),
                on_add: move |value| edit_chips(filters, ChipKind::Specialty, value, true),
                on_remove: move |value| edit_chips(filters, ChipKind::Specialty, value, false),
            }
            ChipInput {
                placeholder: "Ville",
                pool: CITY_SUGGESTIONS,
                selected: current.cities.clone(),
                on_add: move |value| edit_chips(filters, ChipKind::City, value, true),
                on_remove: move |value| edit_chips(filters, ChipKind::City, value, false),
            }
            div { style: "display: flex; gap: 8px; flex-wrap: wrap; align-items: center;",
                for (code, name) in LANGUAGES.iter().copied() {
                    label { key: "{code}", style: "display: inline-flex; gap: 4px; align-items: center;",
                        input {
                            r#type: "checkbox",
                            checked: current.languages.iter().any(|language| language == code),
                            onclick: move |_| CenterFilters::toggle(&mut filters.write().languages, code),
                        }
                        "{name}"
                    }
                }
            }
        }

        p { style: "color: #6b7280;", "{results.len()} centre(s) trouvé(s)" }

        if show_map() {
            MapPanel { view: map }
        }

        div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 12px;",
            for center in results.iter() {
                div {
                    key: "{center.id}",
                    style: "{card_style(selected_id.as_deref() == Some(center.id.as_str()))}",
                    onclick: {
                        let id = center.id.clone();
                        move |_| selected_center.set(Some(id.clone()))
                    },
                    h3 { "{center.name}" }
                    p { "{center.address}" }
                    if let Some(practitioner) = center.practitioner.as_ref() {
                        div { style: "display: flex; justify-content: space-between; align-items: center;",
                            span { "{practitioner.name} · {practitioner.title}" }
                            button {
                                style: "{button_style(false)}",
                                onclick: {
                                    let id = center.id.clone();
                                    move |event: MouseEvent| {
                                        event.stop_propagation();
                                        profile_center.set(Some(id.clone()));
                                    }
                                },
                                "Voir le profil"
                            }
                        }
                    }
                    p { style: "color: #6b7280;", "{center.specialties.join(SEPARATOR)}" }
                    p { style: "color: #6b7280;",
                        "{spoken_languages(center)}"
                    }
                    if let Some(rating) = center.rating {
                        span { "★ {rating}" }
                    }
                    if let Some(slots) = center.available_slots {
                        span { style: "margin-left: 8px;", "{slots} créneau(x) disponible(s)" }
                    }
                }
            }
        }

        if let Some(profile) = profile {
            PractitionerProfilePanel {
                profile: profile,
                on_close: move |_| profile_center.set(None),
                on_schedule: move |id: String| {
                    selected_center.set(Some(id));
                    profile_center.set(None);
                },
            }
        }
    }
}
