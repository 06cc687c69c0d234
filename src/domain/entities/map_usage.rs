use crate::domain::entities::record::{EnumField, FieldDef, FieldKind, FieldValue, Record, Schema};
use crate::domain::query::criteria::SortDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillingStatus {
    Pending,
    Billed,
    Paid,
}

impl EnumField for BillingStatus {
    const ALL: &'static [Self] = &[BillingStatus::Pending, BillingStatus::Billed, BillingStatus::Paid];

    fn as_str(self) -> &'static str {
        match self {
            BillingStatus::Pending => "pending",
            BillingStatus::Billed => "billed",
            BillingStatus::Paid => "paid",
        }
    }

    fn label(self) -> &'static str {
        match self {
            BillingStatus::Pending => "En attente",
            BillingStatus::Billed => "Facturé",
            BillingStatus::Paid => "Payé",
        }
    }
}

/// Amounts in euros.
#[derive(Debug, Clone, PartialEq)]
pub struct Billing {
    pub map_usage: f64,
    pub report_fee: f64,
    pub total: f64,
    pub status: BillingStatus,
}

/// One map consultation made by an agent while handling a request.
#[derive(Debug, Clone, PartialEq)]
pub struct MapUsageEntry {
    pub id: String,
    pub request_id: String,
    pub patient_name: String,
    pub agent_name: String,
    pub timestamp: String,
    /// Seconds spent on the map.
    pub duration: u32,
    pub view_count: u32,
    pub has_report: bool,
    pub report_date: Option<String>,
    pub billing: Billing,
}

impl MapUsageEntry {
    pub const SCHEMA: Schema = Schema {
        fields: &[
            FieldDef::sortable("request_id", FieldKind::Text),
            FieldDef::sortable("patient_name", FieldKind::Text),
            FieldDef::sortable("agent_name", FieldKind::Text),
            FieldDef::sortable("timestamp", FieldKind::Date),
            FieldDef::sortable("duration", FieldKind::Number),
            FieldDef::sortable("view_count", FieldKind::Number),
            FieldDef::sortable("report_date", FieldKind::Date),
            FieldDef::sortable("map_usage", FieldKind::Number),
            FieldDef::sortable("report_fee", FieldKind::Number),
            FieldDef::sortable("billing_total", FieldKind::Number),
            FieldDef::sortable("billing_status", FieldKind::Enum),
        ],
        search_fields: &["patient_name", "agent_name", "request_id"],
        enum_filters: &["billing_status"],
        date_filter: Some("timestamp"),
        default_sort: Some(("timestamp", SortDirection::Desc)),
    };

    pub fn duration_minutes(&self) -> u32 {
        (f64::from(self.duration) / 60.0).round() as u32
    }
}

impl Record for MapUsageEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "request_id" => FieldValue::Text(&self.request_id),
            "patient_name" => FieldValue::Text(&self.patient_name),
            "agent_name" => FieldValue::Text(&self.agent_name),
            "timestamp" => FieldValue::date(&self.timestamp),
            "duration" => FieldValue::number(self.duration),
            "view_count" => FieldValue::number(self.view_count),
            "report_date" => FieldValue::optional_date(self.report_date.as_deref()),
            "map_usage" => FieldValue::Number(self.billing.map_usage),
            "report_fee" => FieldValue::Number(self.billing.report_fee),
            "billing_total" => FieldValue::Number(self.billing.total),
            "billing_status" => FieldValue::Enum(self.billing.status.as_str()),
            _ => FieldValue::Missing,
        }
    }
}
