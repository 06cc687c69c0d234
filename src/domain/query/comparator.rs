use std::cmp::Ordering;

use deunicode::deunicode;

use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::query::criteria::SortSpec;

/// Locale-style collation: accents and case are ignored first, the raw text
/// only breaks the remaining ties.
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(text: &str) -> String {
    deunicode(text).to_lowercase()
}

/// Type-aware comparison of two field values. Missing values and mismatched
/// kinds compare equal so the stable sort keeps input order for them.
pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => collate(a, b),
        (FieldValue::Enum(a), FieldValue::Enum(b)) => collate(a, b),
        (FieldValue::Number(a), FieldValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

pub fn compare_records<R: Record + ?Sized>(a: &R, b: &R, sort: &SortSpec) -> Ordering {
    let ordering = compare_values(&a.field(&sort.field), &b.field(&sort.field));
    sort.direction.apply(ordering)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::record::parse_instant;

    #[test]
    fn collate_ignores_accents_and_case() {
        assert_eq!(collate("émilie", "Emma"), Ordering::Less);
        assert_eq!(collate("Zoé", "arnaud"), Ordering::Greater);
        assert_eq!(collate("Léa", "Lea"), "Léa".cmp("Lea"));
    }

    #[test]
    fn numbers_compare_arithmetically() {
        assert_eq!(
            compare_values(&FieldValue::Number(9.0), &FieldValue::Number(10.0)),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&FieldValue::Number(f64::NAN), &FieldValue::Number(1.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn dates_compare_chronologically() {
        let earlier = parse_instant("2024-02-23T09:00:00Z").expect("valid date");
        let later = parse_instant("2024-02-23T14:00:00+02:00").expect("valid date");
        assert_eq!(
            compare_values(&FieldValue::Date(earlier), &FieldValue::Date(later)),
            Ordering::Less
        );
    }

    #[test]
    fn missing_or_mismatched_values_are_equal() {
        assert_eq!(
            compare_values(&FieldValue::Missing, &FieldValue::Number(1.0)),
            Ordering::Equal
        );
        assert_eq!(
            compare_values(&FieldValue::Text("a"), &FieldValue::Number(1.0)),
            Ordering::Equal
        );
    }
}
