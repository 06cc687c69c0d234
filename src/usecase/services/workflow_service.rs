use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

use crate::domain::entities::action::{ActionKind, RequestAction};
use crate::domain::entities::medical_center::MedicalCenter;
use crate::domain::entities::record::{parse_instant, EnumField};
use crate::domain::entities::request::{
    AppointmentLocation, AppointmentType, MedicalRequest, Note, RequestStatus, UrgencyLevel,
};
use crate::domain::entities::workflow::WorkflowStage;
use crate::usecase::ports::identity::IdentityAccessor;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("la note est vide")]
    EmptyNote,
    #[error("la date du rendez-vous est obligatoire")]
    MissingAppointmentDate,
    #[error("date de rendez-vous invalide : {0}")]
    InvalidAppointmentDate(String),
    #[error("champ obligatoire manquant : {0}")]
    MissingField(&'static str),
    #[error("aucun compte rendu pour le dossier {0}")]
    NoReport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageChange {
    Unchanged,
    Moved {
        from: WorkflowStage,
        to: WorkflowStage,
    },
}

/// Whether a report can be opened straight away or needs the user to accept
/// the confidentiality notice first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportAccess {
    Direct,
    NeedsConfirmation,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentDraft {
    /// `datetime-local` input value.
    pub date: String,
    pub kind: AppointmentType,
    pub center: Option<MedicalCenter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRequestDraft {
    /// Left blank to get a generated number.
    pub file_number: String,
    pub patient_name: String,
    pub patient_phone: String,
    pub symptoms: String,
    pub location: String,
    pub urgency: UrgencyLevel,
}

/// Edits applied to a request from its details page. Every edit is recorded
/// in the request's action log, newest first, signed by the current user.
pub struct RequestWorkflow {
    identity: Arc<dyn IdentityAccessor>,
    sequence: AtomicU64,
}

impl RequestWorkflow {
    pub fn new(identity: Arc<dyn IdentityAccessor>) -> Self {
        Self {
            identity,
            sequence: AtomicU64::new(1),
        }
    }

    fn next_id(&self, prefix: &str, now: DateTime<Utc>) -> String {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{}-{seq}", now.timestamp_millis())
    }

    fn record(&self, request: &mut MedicalRequest, kind: ActionKind, now: DateTime<Utc>) {
        let action = RequestAction {
            id: self.next_id("action", now),
            kind,
            created_at: now,
            created_by: self.identity.actor_name(),
        };
        request.actions.insert(0, action);
        request.updated_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    }

    /// Returns false when the request already has that status.
    pub fn change_status(&self, request: &mut MedicalRequest, status: RequestStatus) -> bool {
        if request.status == status {
            return false;
        }
        let from = request.status;
        request.status = status;
        self.record(
            request,
            ActionKind::StatusChange { from, to: status },
            Utc::now(),
        );
        tracing::info!(request = %request.id, from = from.as_str(), to = status.as_str(), "status changed");
        true
    }

    /// Applies a confirmed stage selection, forward or backward.
    pub fn change_stage(&self, request: &mut MedicalRequest, stage: WorkflowStage) -> StageChange {
        let from = request.workflow_stage;
        if from == stage {
            return StageChange::Unchanged;
        }
        request.workflow_stage = stage;
        self.record(request, ActionKind::WorkflowChange { from, to: stage }, Utc::now());
        tracing::info!(request = %request.id, from = from.as_str(), to = stage.as_str(), "workflow stage changed");
        StageChange::Moved { from, to: stage }
    }

    pub fn add_note(&self, request: &mut MedicalRequest, text: &str) -> Result<(), WorkflowError> {
        if text.trim().is_empty() {
            return Err(WorkflowError::EmptyNote);
        }
        let now = Utc::now();
        let note = Note {
            id: self.next_id("note", now),
            content: text.to_string(),
            created_at: now,
            created_by: self.identity.actor_name(),
        };
        let note_id = note.id.clone();
        request.notes.insert(0, note);
        self.record(request, ActionKind::NoteAdded { note_id }, now);
        Ok(())
    }

    /// Records the appointment, then moves the request to
    /// [`WorkflowStage::AppointmentScheduled`].
    pub fn schedule_appointment(
        &self,
        request: &mut MedicalRequest,
        draft: &AppointmentDraft,
    ) -> Result<StageChange, WorkflowError> {
        let raw = draft.date.trim();
        if raw.is_empty() {
            return Err(WorkflowError::MissingAppointmentDate);
        }
        let date = parse_instant(raw)
            .ok_or_else(|| WorkflowError::InvalidAppointmentDate(raw.to_string()))?;

        let location = match (draft.kind, &draft.center) {
            (AppointmentType::InPerson, Some(center)) => Some(AppointmentLocation {
                address: center.address.clone(),
                lat: center.lat,
                lng: center.lng,
            }),
            _ => None,
        };

        request.appointment_date = Some(raw.to_string());
        request.appointment_type = Some(draft.kind);
        request.appointment_location = location.clone();
        self.record(
            request,
            ActionKind::AppointmentScheduled {
                date,
                kind: draft.kind,
                location: location.map(|location| location.address),
            },
            Utc::now(),
        );
        tracing::info!(request = %request.id, date = %raw, kind = draft.kind.as_str(), "appointment scheduled");

        Ok(self.change_stage(request, WorkflowStage::AppointmentScheduled))
    }

    pub fn report_access(&self, request: &MedicalRequest) -> Result<ReportAccess, WorkflowError> {
        let report = request
            .medical_report
            .as_ref()
            .ok_or_else(|| WorkflowError::NoReport(request.id.clone()))?;
        if report.is_confidential {
            Ok(ReportAccess::NeedsConfirmation)
        } else {
            Ok(ReportAccess::Direct)
        }
    }

    pub fn create_request(&self, draft: &NewRequestDraft) -> Result<MedicalRequest, WorkflowError> {
        let required = [
            ("patient_name", &draft.patient_name),
            ("patient_phone", &draft.patient_phone),
            ("location", &draft.location),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(WorkflowError::MissingField(*field));
        }

        let now = Utc::now();
        let id = match draft.file_number.trim() {
            "" => format!("MED-{}", now.timestamp_millis()),
            number => number.to_string(),
        };
        let stamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);

        let request = MedicalRequest {
            id,
            patient_name: draft.patient_name.trim().to_string(),
            patient_phone: draft.patient_phone.trim().to_string(),
            status: RequestStatus::New,
            urgency: draft.urgency,
            symptoms: draft.symptoms.trim().to_string(),
            location: draft.location.trim().to_string(),
            created_at: stamp.clone(),
            updated_at: stamp,
            assigned_to: self.identity.current_user().map(|user| user.id),
            workflow_stage: WorkflowStage::InitialContact,
            appointment_date: None,
            appointment_type: None,
            appointment_location: None,
            medical_report: None,
            notes: Vec::new(),
            actions: Vec::new(),
        };
        tracing::info!(request = %request.id, urgency = request.urgency.as_str(), "request created");
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::session::UserRole;
    use crate::infra::mock::centers::mock_medical_centers;
    use crate::infra::mock::requests::mock_requests;
    use crate::usecase::services::session_service::SessionStore;

    fn signed_in_workflow() -> RequestWorkflow {
        let session = SessionStore::new();
        session.login(UserRole::Assistant);
        RequestWorkflow::new(Arc::new(session))
    }

    fn request() -> MedicalRequest {
        mock_requests(Utc::now()).remove(3)
    }

    #[test]
    fn status_change_is_logged_newest_first() {
        let workflow = signed_in_workflow();
        let mut request = request();

        assert!(workflow.change_status(&mut request, RequestStatus::Completed));
        assert!(workflow.change_status(&mut request, RequestStatus::Cancelled));
        assert!(!workflow.change_status(&mut request, RequestStatus::Cancelled));

        assert_eq!(request.actions.len(), 2);
        assert_eq!(
            request.actions[0].kind,
            ActionKind::StatusChange {
                from: RequestStatus::Completed,
                to: RequestStatus::Cancelled
            }
        );
        assert_eq!(request.actions[0].created_by, "John");
        assert_ne!(request.actions[0].id, request.actions[1].id);
    }

    #[test]
    fn selecting_the_current_stage_changes_nothing() {
        let workflow = signed_in_workflow();
        let mut request = request();
        let current = request.workflow_stage;

        assert_eq!(workflow.change_stage(&mut request, current), StageChange::Unchanged);
        assert!(request.actions.is_empty());

        let moved = workflow.change_stage(&mut request, WorkflowStage::Closed);
        assert_eq!(
            moved,
            StageChange::Moved {
                from: current,
                to: WorkflowStage::Closed
            }
        );
        let back = workflow.change_stage(&mut request, WorkflowStage::AppointmentRequest);
        assert!(matches!(back, StageChange::Moved { .. }));
        assert_eq!(request.actions.len(), 2);
    }

    #[test]
    fn blank_notes_are_rejected() {
        let workflow = signed_in_workflow();
        let mut request = request();

        assert_eq!(workflow.add_note(&mut request, "  \n"), Err(WorkflowError::EmptyNote));
        assert!(request.notes.is_empty());

        workflow
            .add_note(&mut request, "Rappeler demain")
            .expect("note should be added");
        assert_eq!(request.notes[0].content, "Rappeler demain");
        assert!(matches!(
            &request.actions[0].kind,
            ActionKind::NoteAdded { note_id } if *note_id == request.notes[0].id
        ));
    }

    #[test]
    fn scheduling_requires_a_date_and_moves_the_stage() {
        let workflow = signed_in_workflow();
        let mut request = request();
        let center = mock_medical_centers().remove(0);

        let missing = AppointmentDraft::default();
        assert_eq!(
            workflow.schedule_appointment(&mut request, &missing),
            Err(WorkflowError::MissingAppointmentDate)
        );

        let draft = AppointmentDraft {
            date: "2024-03-04T09:30".to_string(),
            kind: AppointmentType::InPerson,
            center: Some(center.clone()),
        };
        workflow
            .schedule_appointment(&mut request, &draft)
            .expect("appointment should be scheduled");

        assert_eq!(request.workflow_stage, WorkflowStage::AppointmentScheduled);
        assert_eq!(
            request.appointment_location.as_ref().map(|l| l.address.as_str()),
            Some(center.address.as_str())
        );
        assert!(matches!(request.actions[0].kind, ActionKind::WorkflowChange { .. }));
        assert!(matches!(request.actions[1].kind, ActionKind::AppointmentScheduled { .. }));
    }

    #[test]
    fn unparsable_appointment_date_is_rejected_untouched() {
        let workflow = signed_in_workflow();
        let mut request = request();
        let before = request.clone();
        let draft = AppointmentDraft {
            date: " demain matin ".to_string(),
            ..AppointmentDraft::default()
        };

        assert_eq!(
            workflow.schedule_appointment(&mut request, &draft),
            Err(WorkflowError::InvalidAppointmentDate("demain matin".to_string()))
        );
        assert_eq!(request, before);
    }

    #[test]
    fn teleconsultation_has_no_location() {
        let workflow = signed_in_workflow();
        let mut request = request();
        let draft = AppointmentDraft {
            date: "2024-03-04T09:30".to_string(),
            kind: AppointmentType::Teleconsultation,
            center: mock_medical_centers().into_iter().next(),
        };

        workflow
            .schedule_appointment(&mut request, &draft)
            .expect("appointment should be scheduled");

        assert_eq!(request.appointment_location, None);
    }

    #[test]
    fn confidential_reports_need_confirmation() {
        let workflow = signed_in_workflow();
        let mut requests = mock_requests(Utc::now());

        assert_eq!(
            workflow.report_access(&requests[0]),
            Ok(ReportAccess::NeedsConfirmation)
        );
        if let Some(report) = requests[0].medical_report.as_mut() {
            report.is_confidential = false;
        }
        assert_eq!(workflow.report_access(&requests[0]), Ok(ReportAccess::Direct));
        assert!(matches!(
            workflow.report_access(&requests[1]),
            Err(WorkflowError::NoReport(_))
        ));
    }

    #[test]
    fn new_request_uses_the_file_number_or_generates_one() {
        let workflow = signed_in_workflow();
        let mut draft = NewRequestDraft {
            patient_name: "Paul Durand".to_string(),
            patient_phone: "+33611111111".to_string(),
            location: "Paris".to_string(),
            ..NewRequestDraft::default()
        };

        let generated = workflow.create_request(&draft).expect("request should be created");
        assert!(generated.id.starts_with("MED-"));
        assert_eq!(generated.status, RequestStatus::New);
        assert_eq!(generated.workflow_stage, WorkflowStage::InitialContact);
        assert_eq!(generated.urgency, UrgencyLevel::Medium);

        draft.file_number = "MED-2024-011".to_string();
        let numbered = workflow.create_request(&draft).expect("request should be created");
        assert_eq!(numbered.id, "MED-2024-011");

        draft.patient_name = " ".to_string();
        assert_eq!(
            workflow.create_request(&draft),
            Err(WorkflowError::MissingField("patient_name"))
        );
    }

    #[test]
    fn anonymous_edits_are_signed_unknown() {
        let workflow = RequestWorkflow::new(Arc::new(SessionStore::new()));
        let mut request = request();
        workflow.change_stage(&mut request, WorkflowStage::Closed);
        assert_eq!(request.actions[0].created_by, "Unknown");
    }
}
