use dioxus::prelude::*;

use crate::domain::entities::record::EnumField;
use crate::domain::query::criteria::ALL_CHOICE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// `all` first, then every variant with its label.
pub fn enum_options<E: EnumField>(all_label: &str) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: ALL_CHOICE.to_string(),
        label: all_label.to_string(),
    })
    .chain(E::options().into_iter().map(|(value, label)| SelectOption {
        value: value.to_string(),
        label: label.to_string(),
    }))
    .collect()
}

const INPUT_STYLE: &str = "border: 1px solid #bbb; border-radius: 6px; padding: 5px 8px; background: #fff;";

#[component]
pub fn SearchInput(placeholder: &'static str, value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        input {
            style: "{INPUT_STYLE} min-width: 240px;",
            r#type: "search",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |event| on_change.call(event.value()),
        }
    }
}

#[component]
pub fn EnumSelect(options: Vec<SelectOption>, value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        select {
            style: "{INPUT_STYLE}",
            value: "{value}",
            onchange: move |event| on_change.call(event.value()),
            for choice in options.iter() {
                option {
                    value: "{choice.value}",
                    selected: choice.value == value,
                    "{choice.label}"
                }
            }
        }
    }
}

#[component]
pub fn DateInput(value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        input {
            style: "{INPUT_STYLE}",
            r#type: "date",
            value: "{value}",
            oninput: move |event| on_change.call(event.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::appointment::AppointmentStatus;

    #[test]
    fn enum_options_start_with_the_all_choice() {
        let options = enum_options::<AppointmentStatus>("Tous les statuts");
        let values: Vec<&str> = options.iter().map(|option| option.value.as_str()).collect();
        assert_eq!(values, ["all", "scheduled", "completed", "cancelled"]);
        assert_eq!(options[0].label, "Tous les statuts");
        assert_eq!(options[2].label, "Terminé");
    }
}
