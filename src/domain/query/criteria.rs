use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::entities::record::{parse_calendar_date, FieldValue, Record, Schema};

/// Enum filter value that disables the filter.
pub const ALL_CHOICE: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Sort applied after a click on a column header: the same column flips its
/// direction, another column starts ascending.
pub fn next_sort(current: Option<&SortSpec>, field: &str) -> SortSpec {
    match current {
        Some(sort) if sort.field == field => SortSpec::new(field, sort.direction.toggled()),
        _ => SortSpec::asc(field),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumChoice {
    All,
    Only(String),
}

impl EnumChoice {
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == ALL_CHOICE {
            EnumChoice::All
        } else {
            EnumChoice::Only(trimmed.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    Contains,
}

impl MatchMode {
    fn accepts(self, candidate: &str, choice: &str) -> bool {
        let candidate = candidate.to_lowercase();
        let choice = choice.to_lowercase();
        match self {
            MatchMode::Exact => candidate == choice,
            MatchMode::Contains => candidate.contains(&choice),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive substring match on any of the fields.
    TextSearch { fields: Vec<String>, term: String },
    EnumEquals { field: String, choice: EnumChoice },
    /// Calendar day (UTC) of the field equals the date.
    DateEquals {
        field: String,
        date: Option<NaiveDate>,
    },
    /// Any element of a list field (or a text field) accepts any choice.
    AnyOf {
        field: String,
        choices: Vec<String>,
        mode: MatchMode,
    },
    /// Every choice equals (case-insensitively) some element of a list field.
    AllOf { field: String, choices: Vec<String> },
}

impl Predicate {
    pub fn is_active(&self) -> bool {
        match self {
            Predicate::TextSearch { term, .. } => !term.trim().is_empty(),
            Predicate::EnumEquals { choice, .. } => *choice != EnumChoice::All,
            Predicate::DateEquals { date, .. } => date.is_some(),
            Predicate::AnyOf { choices, .. } => !choices.is_empty(),
            Predicate::AllOf { choices, .. } => !choices.is_empty(),
        }
    }

    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        if !self.is_active() {
            return true;
        }
        match self {
            Predicate::TextSearch { fields, term } => {
                let needle = term.trim().to_lowercase();
                fields
                    .iter()
                    .any(|field| text_contains(&record.field(field), &needle))
            }
            Predicate::EnumEquals { field, choice } => match (choice, record.field(field)) {
                (EnumChoice::All, _) => true,
                (EnumChoice::Only(wanted), FieldValue::Enum(value)) => value == wanted.as_str(),
                (EnumChoice::Only(wanted), FieldValue::Text(value)) => value == wanted.as_str(),
                _ => false,
            },
            Predicate::DateEquals { field, date } => match (date, record.field(field)) {
                (None, _) => true,
                (Some(wanted), FieldValue::Date(instant)) => instant.date_naive() == *wanted,
                _ => false,
            },
            Predicate::AnyOf {
                field,
                choices,
                mode,
            } => match record.field(field) {
                FieldValue::List(items) => items.iter().any(|item| {
                    choices
                        .iter()
                        .any(|choice| mode.accepts(item.as_str(), choice))
                }),
                FieldValue::Text(value) => {
                    choices.iter().any(|choice| mode.accepts(value, choice))
                }
                _ => false,
            },
            Predicate::AllOf { field, choices } => match record.field(field) {
                FieldValue::List(items) => choices.iter().all(|choice| {
                    items
                        .iter()
                        .any(|item| MatchMode::Exact.accepts(item.as_str(), choice))
                }),
                _ => false,
            },
        }
    }
}

fn text_contains(value: &FieldValue<'_>, needle: &str) -> bool {
    match value {
        FieldValue::Text(text) => text.to_lowercase().contains(needle),
        FieldValue::Enum(text) => text.to_lowercase().contains(needle),
        FieldValue::List(items) => items
            .iter()
            .any(|item| item.to_lowercase().contains(needle)),
        _ => false,
    }
}

/// Active filters and sort of one list view, combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryCriteria {
    pub predicates: Vec<Predicate>,
    pub sort: Option<SortSpec>,
}

impl QueryCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search<I, S>(mut self, fields: I, term: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predicates.push(Predicate::TextSearch {
            fields: fields.into_iter().map(Into::into).collect(),
            term: term.into(),
        });
        self
    }

    pub fn enum_eq(mut self, field: impl Into<String>, value: &str) -> Self {
        self.predicates.push(Predicate::EnumEquals {
            field: field.into(),
            choice: EnumChoice::parse(value),
        });
        self
    }

    pub fn on_date(mut self, field: impl Into<String>, date: Option<NaiveDate>) -> Self {
        self.predicates.push(Predicate::DateEquals {
            field: field.into(),
            date,
        });
        self
    }

    pub fn any_of<I, S>(mut self, field: impl Into<String>, choices: I, mode: MatchMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predicates.push(Predicate::AnyOf {
            field: field.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            mode,
        });
        self
    }

    pub fn all_of<I, S>(mut self, field: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predicates.push(Predicate::AllOf {
            field: field.into(),
            choices: choices.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec::new(field, direction));
        self
    }

    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.predicates
            .iter()
            .all(|predicate| predicate.matches(record))
    }

    /// Builds the criteria a list page applies, driven by the collection's
    /// schema: free text over its search fields, one enum filter per enum
    /// field, the date filter and the chosen sort.
    pub fn from_filters(schema: &Schema, filters: &ListFilters) -> Self {
        let mut criteria = QueryCriteria::new();

        if !schema.search_fields.is_empty() {
            criteria = criteria.search(
                schema.search_fields.iter().copied(),
                filters.search.as_str(),
            );
        }

        for field in schema.enum_filters {
            let choice = filters
                .enum_choices
                .get(*field)
                .map(String::as_str)
                .unwrap_or(ALL_CHOICE);
            criteria = criteria.enum_eq(*field, choice);
        }

        if let Some(field) = schema.date_filter {
            criteria = criteria.on_date(field, filters.date());
        }

        criteria.sort = filters
            .sort
            .clone()
            .filter(|sort| schema.is_sortable(&sort.field));
        criteria
    }
}

/// Raw filter inputs held by a list page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilters {
    pub search: String,
    pub enum_choices: BTreeMap<String, String>,
    pub date: String,
    pub sort: Option<SortSpec>,
}

impl ListFilters {
    pub fn for_schema(schema: &Schema) -> Self {
        Self {
            sort: schema
                .default_sort
                .map(|(field, direction)| SortSpec::new(field, direction)),
            ..Self::default()
        }
    }

    pub fn choice(&self, field: &str) -> &str {
        self.enum_choices
            .get(field)
            .map(String::as_str)
            .unwrap_or(ALL_CHOICE)
    }

    /// Date input value; blank or unparsable input disables the filter.
    pub fn date(&self) -> Option<NaiveDate> {
        if self.date.trim().is_empty() {
            return None;
        }
        parse_calendar_date(&self.date)
    }

    /// Stores the raw date input as typed.
    pub fn set_date(&mut self, value: String) {
        self.date = value;
        if self.date().is_none() && !self.date.trim().is_empty() {
            tracing::debug!(input = %self.date, "date filter disabled until the input parses");
        }
    }
}

#[cfg(test)]
impl ListFilters {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_choice(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.enum_choices.insert(field.into(), value.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_sort(mut self, sort: Option<SortSpec>) -> Self {
        self.sort = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::record::FieldValue;

    struct Row {
        id: String,
        name: String,
        status: &'static str,
        at: String,
        tags: Vec<String>,
    }

    impl Record for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn field(&self, name: &str) -> FieldValue<'_> {
            match name {
                "name" => FieldValue::Text(&self.name),
                "status" => FieldValue::Enum(self.status),
                "at" => FieldValue::date(&self.at),
                "tags" => FieldValue::list(&self.tags),
                _ => FieldValue::Missing,
            }
        }
    }

    fn row(name: &str, status: &'static str, at: &str, tags: &[&str]) -> Row {
        Row {
            id: name.to_string(),
            name: name.to_string(),
            status,
            at: at.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    #[test]
    fn next_sort_flips_same_field_and_resets_on_new_field() {
        let current = SortSpec::asc("date");
        assert_eq!(next_sort(Some(&current), "date"), SortSpec::desc("date"));
        assert_eq!(next_sort(Some(&current), "name"), SortSpec::asc("name"));
        assert_eq!(next_sort(None, "name"), SortSpec::asc("name"));
    }

    #[test]
    fn enum_choice_treats_all_and_blank_as_disabled() {
        assert_eq!(EnumChoice::parse("all"), EnumChoice::All);
        assert_eq!(EnumChoice::parse("  "), EnumChoice::All);
        assert_eq!(
            EnumChoice::parse("paid"),
            EnumChoice::Only("paid".to_string())
        );
    }

    #[test]
    fn empty_search_term_matches_everything() {
        let predicate = Predicate::TextSearch {
            fields: vec!["name".to_string()],
            term: "   ".to_string(),
        };
        assert!(predicate.matches(&row("Jean Martin", "new", "2024-02-20", &[])));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let criteria = QueryCriteria::new().search(["name"], "DUBOIS");
        assert!(criteria.matches(&row("Marie Dubois", "new", "2024-02-20", &[])));
        assert!(!criteria.matches(&row("Jean Martin", "new", "2024-02-20", &[])));
    }

    #[test]
    fn date_filter_truncates_instants_to_the_day() {
        let criteria = QueryCriteria::new().on_date("at", NaiveDate::from_ymd_opt(2024, 2, 25));
        assert!(criteria.matches(&row("a", "new", "2024-02-25T23:59:00Z", &[])));
        assert!(!criteria.matches(&row("b", "new", "2024-02-26T00:00:00Z", &[])));
        assert!(!criteria.matches(&row("c", "new", "garbage", &[])));
    }

    #[test]
    fn any_of_matches_list_elements_case_insensitively() {
        let exact = QueryCriteria::new().any_of("tags", ["cardiologie"], MatchMode::Exact);
        assert!(exact.matches(&row("a", "new", "", &["Cardiologie", "Radiologie"])));
        assert!(!exact.matches(&row("b", "new", "", &["Pédiatrie"])));
        assert!(!exact.matches(&row("c", "new", "", &[])));

        let contains = QueryCriteria::new().any_of("name", ["neuilly"], MatchMode::Contains);
        assert!(contains.matches(&row("Neuilly-sur-Seine", "new", "", &[])));
    }

    #[test]
    fn all_of_requires_every_choice() {
        let criteria = QueryCriteria::new().all_of("tags", ["fr", "EN"]);
        assert!(criteria.matches(&row("a", "new", "", &["fr", "en", "ar"])));
        assert!(!criteria.matches(&row("b", "new", "", &["fr", "ru"])));
        assert!(QueryCriteria::new()
            .all_of("tags", Vec::<String>::new())
            .matches(&row("c", "new", "", &[])));
    }

    #[test]
    fn predicates_combine_with_and() {
        let criteria = QueryCriteria::new()
            .enum_eq("status", "scheduled")
            .search(["name"], "marie");
        assert!(criteria.matches(&row("Marie Dubois", "scheduled", "", &[])));
        assert!(!criteria.matches(&row("Marie Dubois", "cancelled", "", &[])));
        assert!(!criteria.matches(&row("Jean Martin", "scheduled", "", &[])));
    }

    #[test]
    fn list_filters_ignore_unparsable_dates() {
        let filters = ListFilters::default().with_date("31/02/2024");
        assert_eq!(filters.date(), None);
        let filters = ListFilters::default().with_date("2024-02-23");
        assert_eq!(filters.date(), NaiveDate::from_ymd_opt(2024, 2, 23));
    }

    #[test]
    fn set_date_keeps_partial_input_without_filtering() {
        let mut filters = ListFilters::default();

        filters.set_date("2024-02".to_string());
        assert_eq!(filters.date, "2024-02");
        assert_eq!(filters.date(), None);

        filters.set_date("2024-02-23".to_string());
        assert_eq!(filters.date(), NaiveDate::from_ymd_opt(2024, 2, 23));
    }
}
