use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::domain::entities::record::{parse_instant, FieldKind, Schema};
use crate::domain::query::criteria::{next_sort, SortSpec};

pub fn root_container_style() -> &'static str {
    "font-family: 'Inter', 'Segoe UI', sans-serif; height: 100vh; display: flex; flex-direction: column; overflow: hidden; background: #f9fafb;"
}

pub fn page_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; padding: 16px; display: flex; flex-direction: column; gap: 12px;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd; background: #fff;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 2; background: #f3f4f6; border: 1px solid #bbb; padding: 6px; text-align: left; cursor: pointer; user-select: none;"
}

pub fn table_cell_style(alignment: &str) -> String {
    format!("border: 1px solid #bbb; padding: 4px; text-align: {alignment};")
}

/// Numeric columns are right aligned.
pub fn column_cell_style(schema: &Schema, field: &str) -> String {
    match schema.field(field).map(|def| def.kind) {
        Some(FieldKind::Number) => table_cell_style("right"),
        _ => table_cell_style("left"),
    }
}

pub fn toolbar_style() -> &'static str {
    "display: flex; gap: 8px; align-items: center; flex-wrap: wrap;"
}

pub fn button_style(primary: bool) -> &'static str {
    if primary {
        "border: none; background: #2563eb; color: #fff; padding: 6px 12px; border-radius: 6px; cursor: pointer;"
    } else {
        "border: 1px solid #bbb; background: #fff; padding: 6px 12px; border-radius: 6px; cursor: pointer;"
    }
}

/// `dd/mm/yyyy hh:mm` in UTC; text that is not a date is shown as is.
pub fn display_datetime(value: &str) -> String {
    parse_instant(value)
        .map(|instant| instant.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| value.to_string())
}

fn plural(count: i64, unit: &str) -> String {
    if count > 1 {
        format!("Il y a {count} {unit}s")
    } else {
        format!("Il y a {count} {unit}")
    }
}

/// Relative wording under a day, the full date beyond.
pub fn elapsed_label(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();
    match minutes {
        ..=0 => "À l'instant".to_string(),
        1..=59 => plural(minutes, "minute"),
        60..=1439 => plural(minutes / 60, "heure"),
        _ => then.format("%d/%m/%Y %H:%M").to_string(),
    }
}

/// Header label followed by the arrow of the active sort, if it targets
/// this column.
pub fn header_label(label: &str, field: &str, sort: Option<&SortSpec>) -> String {
    match sort {
        Some(sort) if sort.field == field => format!("{label} {}", sort.direction.arrow()),
        _ => label.to_string(),
    }
}

/// Column header that cycles the sort on click: new column ascending, same
/// column toggled.
#[component]
pub fn SortableHeader(
    label: &'static str,
    field: &'static str,
    sort: Option<SortSpec>,
    on_sort: EventHandler<SortSpec>,
) -> Element {
    let text = header_label(label, field, sort.as_ref());
    rsx! {
        th {
            style: "{table_header_cell_style()}",
            onclick: move |_| on_sort.call(next_sort(sort.as_ref(), field)),
            "{text}"
        }
    }
}

#[component]
pub fn EmptyState(colspan: usize, message: &'static str) -> Element {
    rsx! {
        tr {
            td {
                colspan: "{colspan}",
                style: "padding: 24px; text-align: center; color: #6b7280;",
                "{message}"
            }
        }
    }
}

#[component]
pub fn StatCard(
    #[props(into)] label: String,
    #[props(into)] value: String,
    detail: Option<String>,
    on_open: Option<EventHandler<()>>,
) -> Element {
    let cursor = if on_open.is_some() { "pointer" } else { "default" };

    rsx! {
        div {
            style: "background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px 16px; min-width: 160px; cursor: {cursor};",
            onclick: move |_| {
                if let Some(handler) = on_open {
                    handler.call(());
                }
            },
            div { style: "font-size: 13px; color: #6b7280;", "{label}" }
            div { style: "font-size: 22px; font-weight: 600;", "{value}" }
            if let Some(detail) = detail {
                div { style: "font-size: 12px; color: #6b7280;", "{detail}" }
            }
        }
    }
}
