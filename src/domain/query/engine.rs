//! Filter-then-sort over an in-memory collection.

use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::query::comparator::compare_records;
use crate::domain::query::criteria::{Predicate, QueryCriteria};

/// Records satisfying every predicate, in comparator order. Ties keep their
/// input order. An empty result is not an error.
pub fn run<'r, R: Record>(records: &'r [R], criteria: &QueryCriteria) -> Vec<&'r R> {
    let mut matched: Vec<&R> = records
        .iter()
        .filter(|record| criteria.matches(*record))
        .collect();

    if let Some(sort) = &criteria.sort {
        matched.sort_by(|a, b| compare_records(*a, *b, sort));
    }

    matched
}

pub fn count_matching<R: Record>(records: &[R], predicate: &Predicate) -> usize {
    records
        .iter()
        .filter(|record| predicate.matches(*record))
        .count()
}

/// Sum of a numeric field; records without the field contribute nothing.
pub fn sum_field<R: Record>(records: &[&R], field: &str) -> f64 {
    records
        .iter()
        .filter_map(|record| match record.field(field) {
            FieldValue::Number(value) if value.is_finite() => Some(value),
            _ => None,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::criteria::{EnumChoice, SortDirection};
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        name: String,
        status: &'static str,
        amount: f64,
    }

    impl Record for Item {
        fn id(&self) -> &str {
            &self.id
        }

        fn field(&self, name: &str) -> FieldValue<'_> {
            match name {
                "name" => FieldValue::Text(&self.name),
                "status" => FieldValue::Enum(self.status),
                "amount" => FieldValue::Number(self.amount),
                _ => FieldValue::Missing,
            }
        }
    }

    const STATUSES: [&str; 3] = ["pending", "paid", "failed"];

    fn item_strategy() -> impl Strategy<Value = (String, usize, u8)> {
        ("[a-d]{1,3}", 0..STATUSES.len(), 0u8..6)
    }

    fn build_items(raw: Vec<(String, usize, u8)>) -> Vec<Item> {
        raw.into_iter()
            .enumerate()
            .map(|(idx, (name, status, amount))| Item {
                id: format!("ITEM-{idx}"),
                name,
                status: STATUSES[status],
                amount: f64::from(amount),
            })
            .collect()
    }

    fn criteria_strategy() -> impl Strategy<Value = QueryCriteria> {
        (
            prop_oneof![Just(String::new()), "[a-d]{1,2}"],
            prop_oneof![
                Just("all"),
                Just("pending"),
                Just("paid"),
                Just("failed")
            ],
            prop_oneof![Just("name"), Just("amount"), Just("status"), Just("unknown")],
            any::<bool>(),
        )
            .prop_map(|(term, status, field, desc)| {
                let direction = if desc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                };
                QueryCriteria::new()
                    .search(["name"], term)
                    .enum_eq("status", status)
                    .sort_by(field, direction)
            })
    }

    fn position(items: &[Item], id: &str) -> usize {
        items
            .iter()
            .position(|item| item.id == id)
            .expect("result ids come from the source")
    }

    proptest! {
        #[test]
        fn result_is_a_filtered_permutation_of_matching_records(
            raw in prop::collection::vec(item_strategy(), 0..24),
            criteria in criteria_strategy(),
        ) {
            let items = build_items(raw);
            let result = run(&items, &criteria);

            let mut ids: Vec<&str> = result.iter().map(|item| item.id.as_str()).collect();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(before, ids.len(), "no record appears twice");

            for item in &result {
                prop_assert!(criteria.matches(*item));
            }
            let expected = items.iter().filter(|item| criteria.matches(*item)).count();
            prop_assert_eq!(result.len(), expected);
        }

        #[test]
        fn sort_is_stable_for_equal_keys(
            raw in prop::collection::vec(item_strategy(), 0..24),
            desc in any::<bool>(),
        ) {
            let items = build_items(raw);
            let direction = if desc { SortDirection::Desc } else { SortDirection::Asc };
            let criteria = QueryCriteria::new().sort_by("status", direction);
            let result = run(&items, &criteria);

            for pair in result.windows(2) {
                if pair[0].status == pair[1].status {
                    prop_assert!(position(&items, &pair[0].id) < position(&items, &pair[1].id));
                }
            }
        }

        #[test]
        fn reversing_direction_reverses_distinct_keys(
            amounts in prop::collection::btree_set(0u32..1000, 0..16),
        ) {
            let items: Vec<Item> = amounts
                .into_iter()
                .rev()
                .enumerate()
                .map(|(idx, amount)| Item {
                    id: format!("ITEM-{idx}"),
                    name: String::new(),
                    status: "paid",
                    amount: f64::from(amount),
                })
                .collect();

            let asc = run(&items, &QueryCriteria::new().sort_by("amount", SortDirection::Asc));
            let mut desc = run(&items, &QueryCriteria::new().sort_by("amount", SortDirection::Desc));
            desc.reverse();
            prop_assert_eq!(asc, desc);
        }
    }

    fn sample() -> Vec<Item> {
        build_items(vec![
            ("bob".to_string(), 0, 5),
            ("alice".to_string(), 1, 3),
            ("carol".to_string(), 0, 1),
        ])
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let items: Vec<Item> = Vec::new();
        assert!(run(&items, &QueryCriteria::new().enum_eq("status", "paid")).is_empty());
    }

    #[test]
    fn nothing_matching_yields_empty_result() {
        let items = sample();
        let criteria = QueryCriteria::new().search(["name"], "zzz");
        assert!(run(&items, &criteria).is_empty());
    }

    #[test]
    fn unknown_sort_field_keeps_input_order() {
        let items = sample();
        let result = run(&items, &QueryCriteria::new().sort_by("missing", SortDirection::Desc));
        let names: Vec<&str> = result.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["bob", "alice", "carol"]);
    }

    #[test]
    fn count_and_sum_helpers() {
        let items = sample();
        let pending = Predicate::EnumEquals {
            field: "status".to_string(),
            choice: EnumChoice::Only("pending".to_string()),
        };
        assert_eq!(count_matching(&items, &pending), 2);

        let refs: Vec<&Item> = items.iter().collect();
        assert_eq!(sum_field(&refs, "amount"), 9.0);
        assert_eq!(sum_field(&refs, "name"), 0.0);
    }
}
