use crate::domain::entities::record::{EnumField, FieldDef, FieldKind, FieldValue, Record, Schema};
use crate::domain::entities::request::AppointmentType;
use crate::domain::query::criteria::SortDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl EnumField for AppointmentStatus {
    const ALL: &'static [Self] = &[
        AppointmentStatus::Scheduled,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Programmé",
            AppointmentStatus::Completed => "Terminé",
            AppointmentStatus::Cancelled => "Annulé",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentReportStatus {
    Pending,
    Available,
    NotRequired,
}

impl EnumField for AppointmentReportStatus {
    const ALL: &'static [Self] = &[
        AppointmentReportStatus::Pending,
        AppointmentReportStatus::Available,
        AppointmentReportStatus::NotRequired,
    ];

    fn as_str(self) -> &'static str {
        match self {
            AppointmentReportStatus::Pending => "pending",
            AppointmentReportStatus::Available => "available",
            AppointmentReportStatus::NotRequired => "not_required",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AppointmentReportStatus::Pending => "En attente",
            AppointmentReportStatus::Available => "Disponible",
            AppointmentReportStatus::NotRequired => "Non requis",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub request_id: String,
    pub patient_name: String,
    pub doctor_name: String,
    pub location: String,
    pub date: String,
    pub status: AppointmentStatus,
    pub kind: AppointmentType,
    pub report_status: AppointmentReportStatus,
    pub patient_phone: String,
    pub symptoms: String,
}

impl Appointment {
    pub const SCHEMA: Schema = Schema {
        fields: &[
            FieldDef::sortable("id", FieldKind::Text),
            FieldDef::sortable("request_id", FieldKind::Text),
            FieldDef::sortable("patient_name", FieldKind::Text),
            FieldDef::sortable("doctor_name", FieldKind::Text),
            FieldDef::sortable("location", FieldKind::Text),
            FieldDef::sortable("date", FieldKind::Date),
            FieldDef::sortable("status", FieldKind::Enum),
            FieldDef::sortable("kind", FieldKind::Enum),
            FieldDef::sortable("report_status", FieldKind::Enum),
            FieldDef::filter_only("patient_phone", FieldKind::Text),
            FieldDef::filter_only("symptoms", FieldKind::Text),
        ],
        search_fields: &["patient_name", "doctor_name", "request_id"],
        enum_filters: &["status"],
        date_filter: Some("date"),
        default_sort: Some(("date", SortDirection::Asc)),
    };
}

impl Record for Appointment {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Text(&self.id),
            "request_id" => FieldValue::Text(&self.request_id),
            "patient_name" => FieldValue::Text(&self.patient_name),
            "doctor_name" => FieldValue::Text(&self.doctor_name),
            "location" => FieldValue::Text(&self.location),
            "date" => FieldValue::date(&self.date),
            "status" => FieldValue::Enum(self.status.as_str()),
            "kind" => FieldValue::Enum(self.kind.as_str()),
            "report_status" => FieldValue::Enum(self.report_status.as_str()),
            "patient_phone" => FieldValue::Text(&self.patient_phone),
            "symptoms" => FieldValue::Text(&self.symptoms),
            _ => FieldValue::Missing,
        }
    }
}
