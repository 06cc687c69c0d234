//! Field access over uniform records.
//!
//! Every mock collection row implements [`Record`] so the query engine can
//! filter and sort it by field name without knowing the concrete type.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::query::criteria::{ListFilters, QueryCriteria, SortDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Enum,
    TextList,
}

/// Value of one field, borrowed from the record it was read from.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(DateTime<Utc>),
    Enum(&'static str),
    List(&'a [String]),
    /// Field absent on this record, or not part of the collection.
    Missing,
}

impl<'a> FieldValue<'a> {
    pub fn text(value: Option<&'a str>) -> Self {
        value.map(FieldValue::Text).unwrap_or(FieldValue::Missing)
    }

    pub fn date(value: &str) -> Self {
        parse_instant(value)
            .map(FieldValue::Date)
            .unwrap_or(FieldValue::Missing)
    }

    pub fn optional_date(value: Option<&str>) -> Self {
        value.map(FieldValue::date).unwrap_or(FieldValue::Missing)
    }

    pub fn list(values: &'a [String]) -> Self {
        if values.is_empty() {
            FieldValue::Missing
        } else {
            FieldValue::List(values)
        }
    }

    pub fn number(value: impl Into<f64>) -> Self {
        FieldValue::Number(value.into())
    }
}

/// Parses the date formats found in the mock data and in date inputs:
/// RFC 3339 instants, `YYYY-MM-DDTHH:MM` local inputs (read as UTC) and
/// plain calendar dates (midnight UTC).
pub fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(local) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
        return Some(local.and_utc());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

pub trait Record {
    fn id(&self) -> &str;

    fn field(&self, name: &str) -> FieldValue<'_>;
}

/// Closed set of values stored in an enum field.
pub trait EnumField: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    /// Wire value, the one compared by enum filters.
    fn as_str(self) -> &'static str;

    /// Label shown in the interface and in exports.
    fn label(self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|item| item.as_str() == value)
    }

    fn options() -> Vec<(&'static str, &'static str)> {
        Self::ALL
            .iter()
            .map(|item| (item.as_str(), item.label()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    pub sortable: bool,
}

impl FieldDef {
    pub const fn sortable(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            sortable: true,
        }
    }

    pub const fn filter_only(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            sortable: false,
        }
    }
}

/// Field layout of one collection and the filters its list page offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub fields: &'static [FieldDef],
    pub search_fields: &'static [&'static str],
    pub enum_filters: &'static [&'static str],
    pub date_filter: Option<&'static str>,
    pub default_sort: Option<(&'static str, SortDirection)>,
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn is_sortable(&self, name: &str) -> bool {
        self.field(name).is_some_and(|field| field.sortable)
    }

    pub fn criteria(&self, filters: &ListFilters) -> QueryCriteria {
        QueryCriteria::from_filters(self, filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_instant_accepts_rfc3339_and_calendar_dates() {
        let instant = parse_instant("2024-02-25T10:30:00Z").expect("rfc3339 should parse");
        assert_eq!((instant.day(), instant.hour(), instant.minute()), (25, 10, 30));

        let midnight = parse_instant("2024-02-15").expect("calendar date should parse");
        assert_eq!((midnight.month(), midnight.day(), midnight.hour()), (2, 15, 0));

        let local = parse_instant("2024-03-01T09:15").expect("datetime-local should parse");
        assert_eq!((local.day(), local.hour(), local.minute()), (1, 9, 15));
    }

    #[test]
    fn unparsable_dates_become_missing() {
        assert_eq!(FieldValue::date("not a date"), FieldValue::Missing);
        assert_eq!(FieldValue::date(""), FieldValue::Missing);
        assert_eq!(FieldValue::optional_date(None), FieldValue::Missing);
    }

    #[test]
    fn empty_lists_are_missing() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(FieldValue::list(&empty), FieldValue::Missing);
        let filled = vec!["REP-001".to_string()];
        assert_eq!(FieldValue::list(&filled), FieldValue::List(&filled));
    }
}
