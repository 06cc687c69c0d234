use crate::domain::entities::record::{FieldDef, FieldKind, FieldValue, Record, Schema};
use crate::domain::query::criteria::{MatchMode, QueryCriteria};

pub const SPECIALTY_SUGGESTIONS: &[&str] = &[
    "Médecine générale",
    "Cardiologie",
    "Pédiatrie",
    "Dermatologie",
    "Gynécologie",
    "ORL",
    "Radiologie",
    "Chirurgie",
    "Urgences",
];

pub const CITY_SUGGESTIONS: &[&str] = &[
    "Paris",
    "Lyon",
    "Marseille",
    "Neuilly-sur-Seine",
    "Bordeaux",
    "Toulouse",
    "Nice",
    "Nantes",
    "Strasbourg",
    "Montpellier",
];

pub const LANGUAGES: &[(&str, &str)] = &[
    ("fr", "Français"),
    ("en", "English"),
    ("es", "Español"),
    ("ar", "العربية"),
    ("zh", "中文"),
    ("ru", "Русский"),
];

pub fn language_name(code: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Practitioner {
    pub name: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MedicalCenter {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
    pub phone: Option<String>,
    pub specialties: Vec<String>,
    pub opening_hours: Option<String>,
    pub rating: Option<f64>,
    pub available_slots: Option<u32>,
    pub languages: Vec<String>,
    pub practitioner: Option<Practitioner>,
}

impl MedicalCenter {
    pub const SCHEMA: Schema = Schema {
        fields: &[
            FieldDef::sortable("name", FieldKind::Text),
            FieldDef::filter_only("address", FieldKind::Text),
            FieldDef::sortable("city", FieldKind::Text),
            FieldDef::sortable("rating", FieldKind::Number),
            FieldDef::sortable("available_slots", FieldKind::Number),
            FieldDef::filter_only("specialties", FieldKind::TextList),
            FieldDef::filter_only("languages", FieldKind::TextList),
            FieldDef::sortable("practitioner", FieldKind::Text),
        ],
        search_fields: &["name", "practitioner"],
        enum_filters: &[],
        date_filter: None,
        default_sort: None,
    };
}

impl Record for MedicalCenter {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "name" => FieldValue::Text(&self.name),
            "address" => FieldValue::Text(&self.address),
            "city" => FieldValue::Text(&self.city),
            "rating" => self.rating.map(FieldValue::Number).unwrap_or(FieldValue::Missing),
            "available_slots" => self
                .available_slots
                .map(FieldValue::number)
                .unwrap_or(FieldValue::Missing),
            "specialties" => FieldValue::list(&self.specialties),
            "languages" => FieldValue::list(&self.languages),
            "practitioner" => {
                FieldValue::text(self.practitioner.as_ref().map(|p| p.name.as_str()))
            }
            _ => FieldValue::Missing,
        }
    }
}

/// Chip filters of the practitioner search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CenterFilters {
    pub specialties: Vec<String>,
    pub cities: Vec<String>,
    pub languages: Vec<String>,
}

impl CenterFilters {
    pub fn criteria(&self) -> QueryCriteria {
        QueryCriteria::new()
            .any_of("specialties", self.specialties.iter().cloned(), MatchMode::Exact)
            .any_of("city", self.cities.iter().cloned(), MatchMode::Contains)
            .all_of("languages", self.languages.iter().cloned())
    }

    /// Adds a chip; blank or already selected values are ignored.
    pub fn add(list: &mut Vec<String>, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || list.iter().any(|existing| existing == value) {
            return false;
        }
        list.push(value.to_string());
        true
    }

    pub fn toggle(list: &mut Vec<String>, value: &str) {
        if let Some(idx) = list.iter().position(|existing| existing == value) {
            list.remove(idx);
        } else {
            list.push(value.to_string());
        }
    }
}

/// Suggestions containing the typed text that are not selected yet.
pub fn suggestions<'a>(pool: &[&'a str], typed: &str, selected: &[String]) -> Vec<&'a str> {
    let needle = typed.to_lowercase();
    pool.iter()
        .copied()
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .filter(|candidate| !selected.iter().any(|chosen| chosen == candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_ignore_blank_and_duplicate_values() {
        let mut chips = vec!["Paris".to_string()];
        assert!(!CenterFilters::add(&mut chips, "  "));
        assert!(!CenterFilters::add(&mut chips, "Paris"));
        assert!(CenterFilters::add(&mut chips, " Lyon "));
        assert_eq!(chips, ["Paris", "Lyon"]);

        CenterFilters::toggle(&mut chips, "Paris");
        assert_eq!(chips, ["Lyon"]);
    }

    #[test]
    fn suggestions_skip_selected_entries() {
        let selected = vec!["Cardiologie".to_string()];
        assert_eq!(
            suggestions(SPECIALTY_SUGGESTIONS, "LOGIE", &selected),
            ["Dermatologie", "Gynécologie", "Radiologie"]
        );
    }

    #[test]
    fn language_names_fall_back_to_the_code() {
        assert_eq!(language_name("es"), "Español");
        assert_eq!(language_name("pt"), "pt");
    }
}
