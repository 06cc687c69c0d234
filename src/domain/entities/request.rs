use chrono::{DateTime, Utc};

use crate::domain::entities::action::RequestAction;
use crate::domain::entities::record::{EnumField, FieldDef, FieldKind, FieldValue, Record, Schema};
use crate::domain::entities::workflow::WorkflowStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestStatus {
    New,
    InProgress,
    Completed,
    Cancelled,
}

impl EnumField for RequestStatus {
    const ALL: &'static [Self] = &[
        RequestStatus::New,
        RequestStatus::InProgress,
        RequestStatus::Completed,
        RequestStatus::Cancelled,
    ];

    fn as_str(self) -> &'static str {
        match self {
            RequestStatus::New => "new",
            RequestStatus::InProgress => "in_progress",
            RequestStatus::Completed => "completed",
            RequestStatus::Cancelled => "cancelled",
        }
    }

    fn label(self) -> &'static str {
        match self {
            RequestStatus::New => "Nouveau",
            RequestStatus::InProgress => "En cours",
            RequestStatus::Completed => "Terminé",
            RequestStatus::Cancelled => "Annulé",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UrgencyLevel {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl EnumField for UrgencyLevel {
    const ALL: &'static [Self] = &[
        UrgencyLevel::Low,
        UrgencyLevel::Medium,
        UrgencyLevel::High,
        UrgencyLevel::Critical,
    ];

    fn as_str(self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
            UrgencyLevel::Critical => "critical",
        }
    }

    fn label(self) -> &'static str {
        match self {
            UrgencyLevel::Low => "Faible",
            UrgencyLevel::Medium => "Moyenne",
            UrgencyLevel::High => "Élevée",
            UrgencyLevel::Critical => "Critique",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppointmentType {
    #[default]
    InPerson,
    Teleconsultation,
}

impl EnumField for AppointmentType {
    const ALL: &'static [Self] = &[AppointmentType::InPerson, AppointmentType::Teleconsultation];

    fn as_str(self) -> &'static str {
        match self {
            AppointmentType::InPerson => "in_person",
            AppointmentType::Teleconsultation => "teleconsultation",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AppointmentType::InPerson => "En cabinet",
            AppointmentType::Teleconsultation => "Téléconsultation",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentLocation {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Pending,
    Available,
    Archived,
}

impl EnumField for ReportStatus {
    const ALL: &'static [Self] = &[
        ReportStatus::Pending,
        ReportStatus::Available,
        ReportStatus::Archived,
    ];

    fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Available => "available",
            ReportStatus::Archived => "archived",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ReportStatus::Pending => "En attente",
            ReportStatus::Available => "Disponible",
            ReportStatus::Archived => "Archivé",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MedicalReport {
    pub id: String,
    pub doctor_name: String,
    pub created_at: String,
    pub status: ReportStatus,
    pub is_confidential: bool,
    pub format: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

/// Patient case handled by the dispatch team.
///
/// Notes and actions are kept newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicalRequest {
    pub id: String,
    pub patient_name: String,
    pub patient_phone: String,
    pub status: RequestStatus,
    pub urgency: UrgencyLevel,
    pub symptoms: String,
    pub location: String,
    pub created_at: String,
    pub updated_at: String,
    pub assigned_to: Option<String>,
    pub workflow_stage: WorkflowStage,
    pub appointment_date: Option<String>,
    pub appointment_type: Option<AppointmentType>,
    pub appointment_location: Option<AppointmentLocation>,
    pub medical_report: Option<MedicalReport>,
    pub notes: Vec<Note>,
    pub actions: Vec<RequestAction>,
}

impl MedicalRequest {
    pub const SCHEMA: Schema = Schema {
        fields: &[
            FieldDef::sortable("id", FieldKind::Text),
            FieldDef::sortable("patient_name", FieldKind::Text),
            FieldDef::filter_only("patient_phone", FieldKind::Text),
            FieldDef::sortable("status", FieldKind::Enum),
            FieldDef::sortable("urgency", FieldKind::Enum),
            FieldDef::filter_only("symptoms", FieldKind::Text),
            FieldDef::sortable("location", FieldKind::Text),
            FieldDef::sortable("created_at", FieldKind::Date),
            FieldDef::sortable("updated_at", FieldKind::Date),
            FieldDef::filter_only("assigned_to", FieldKind::Text),
            FieldDef::sortable("workflow_stage", FieldKind::Enum),
            FieldDef::sortable("appointment_date", FieldKind::Date),
        ],
        search_fields: &["patient_name"],
        enum_filters: &["status", "urgency"],
        date_filter: Some("created_at"),
        default_sort: None,
    };
}

impl Record for MedicalRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Text(&self.id),
            "patient_name" => FieldValue::Text(&self.patient_name),
            "patient_phone" => FieldValue::Text(&self.patient_phone),
            "status" => FieldValue::Enum(self.status.as_str()),
            "urgency" => FieldValue::Enum(self.urgency.as_str()),
            "symptoms" => FieldValue::Text(&self.symptoms),
            "location" => FieldValue::Text(&self.location),
            "created_at" => FieldValue::date(&self.created_at),
            "updated_at" => FieldValue::date(&self.updated_at),
            "assigned_to" => FieldValue::text(self.assigned_to.as_deref()),
            "workflow_stage" => FieldValue::Enum(self.workflow_stage.as_str()),
            "appointment_date" => FieldValue::optional_date(self.appointment_date.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}
