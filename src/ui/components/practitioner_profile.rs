use dioxus::prelude::*;

use crate::domain::entities::medical_center::language_name;
use crate::domain::entities::practitioner::PractitionerProfile;
use crate::infra::export::csv::format_euros;
use crate::ui::components::table::button_style;

const OVERLAY_STYLE: &str = "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); z-index: 40; display: flex; justify-content: center; overflow-y: auto;";
const SHEET_STYLE: &str = "background: #f8f9ff; width: 100%; max-width: 640px; min-height: 100%; padding: 16px 24px; display: flex; flex-direction: column; gap: 16px;";
const BOX_STYLE: &str = "background: #fff; border-radius: 8px; padding: 12px 16px;";
const PILL_STYLE: &str = "background: #fff; border-radius: 12px; padding: 2px 10px; font-size: 13px;";
const LINE_STYLE: &str = "display: flex; justify-content: space-between; padding: 4px 0;";

#[component]
fn PillList(values: Vec<String>) -> Element {
    rsx! {
        div { style: "display: flex; gap: 6px; flex-wrap: wrap;",
            for value in values {
                span { key: "{value}", style: "{PILL_STYLE}", "{value}" }
            }
        }
    }
}

/// Full-window sheet describing one practitioner. Empty sections are
/// skipped.
#[component]
pub fn PractitionerProfilePanel(
    profile: PractitionerProfile,
    on_close: EventHandler<()>,
    on_schedule: EventHandler<String>,
) -> Element {
    let languages: Vec<String> = profile
        .languages
        .iter()
        .map(|code| language_name(code).to_string())
        .collect();
    let center_id = profile.center_id.clone();

    rsx! {
        div { style: "{OVERLAY_STYLE}",
            div { style: "{SHEET_STYLE}",
                div {
                    button {
                        style: "{button_style(false)}",
                        onclick: move |_| on_close.call(()),
                        "◀ Retour"
                    }
                }

                div { style: "text-align: center;",
                    h2 { style: "margin: 0;", "{profile.name}" }
                    p { style: "color: #4b5563; margin: 4px 0;", "{profile.title}" }
                    p { style: "color: #6b7280; margin: 0;", "{profile.address}" }
                    if let Some(distance) = profile.distance.as_ref() {
                        p { style: "color: #6b7280; margin: 0;", "{distance}" }
                    }
                }

                div { style: "display: flex; gap: 12px; justify-content: center; align-items: center;",
                    button {
                        style: "{button_style(true)}",
                        onclick: move |_| on_schedule.call(center_id.clone()),
                        "Demander un rendez-vous"
                    }
                    if let Some(phone) = profile.phone.as_ref() {
                        span { style: "color: #374151;", "Tél. {phone}" }
                    }
                }

                if !languages.is_empty() {
                    h3 { style: "margin: 0;", "Langues parlées" }
                    PillList { values: languages }
                }

                if !profile.experience.is_empty() {
                    h3 { style: "margin: 0;", "Expérience" }
                    div { style: "{BOX_STYLE}",
                        for line in profile.experience.iter() {
                            p { key: "{line}", style: "margin: 2px 0; color: #4b5563;", "{line}" }
                        }
                    }
                }

                if !profile.education.is_empty() {
                    h3 { style: "margin: 0;", "Formation" }
                    div { style: "{BOX_STYLE}",
                        for entry in profile.education.iter() {
                            div { key: "{entry.degree}", style: "margin: 4px 0;",
                                div { style: "font-weight: 600;", "{entry.degree}" }
                                div { style: "color: #4b5563;", "{entry.institution}, {entry.year}" }
                            }
                        }
                    }
                }

                if !profile.fees.is_empty() {
                    h3 { style: "margin: 0;", "Tarifs" }
                    div { style: "{BOX_STYLE}",
                        for fee in profile.fees.iter() {
                            div { key: "{fee.service}", style: "{LINE_STYLE}",
                                span { style: "color: #4b5563;", "{fee.service}" }
                                strong { "{format_euros(fee.price)}" }
                            }
                        }
                    }
                }

                if !profile.payment_methods.is_empty() {
                    h3 { style: "margin: 0;", "Moyens de paiement" }
                    PillList { values: profile.payment_methods.clone() }
                }

                if !profile.insurances.is_empty() {
                    h3 { style: "margin: 0;", "Assurances acceptées" }
                    PillList { values: profile.insurances.clone() }
                }

                if let Some(hours) = profile.opening_hours.as_ref() {
                    h3 { style: "margin: 0;", "Horaires d'ouverture" }
                    div { style: "{BOX_STYLE}", "{hours}" }
                }
            }
        }
    }
}
