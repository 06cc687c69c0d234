use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::domain::entities::action::{ActionKind, RequestAction};
use crate::domain::entities::request::{
    MedicalReport, MedicalRequest, Note, ReportStatus, RequestStatus, UrgencyLevel,
};
use crate::domain::entities::workflow::WorkflowStage;

fn minutes_ago(now: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    now - Duration::minutes(minutes)
}

fn iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

struct Seed {
    id: &'static str,
    patient_name: &'static str,
    patient_phone: &'static str,
    status: RequestStatus,
    urgency: UrgencyLevel,
    symptoms: &'static str,
    location: &'static str,
    created_minutes_ago: i64,
    updated_minutes_ago: i64,
    stage: WorkflowStage,
    assigned_to: Option<&'static str>,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "MED-2024-001",
        patient_name: "Marie Dubois",
        patient_phone: "+33612345678",
        status: RequestStatus::New,
        urgency: UrgencyLevel::Critical,
        symptoms: "Douleurs thoraciques sévères et difficultés respiratoires",
        location: "Paris, 75001",
        created_minutes_ago: 30,
        updated_minutes_ago: 10,
        stage: WorkflowStage::AppointmentRequest,
        assigned_to: Some("1"),
    },
    Seed {
        id: "MED-2024-002",
        patient_name: "Jean Martin",
        patient_phone: "+33623456789",
        status: RequestStatus::InProgress,
        urgency: UrgencyLevel::Medium,
        symptoms: "Fièvre persistante et toux",
        location: "Lyon, 69001",
        created_minutes_ago: 2 * 60,
        updated_minutes_ago: 30,
        stage: WorkflowStage::AppointmentRequest,
        assigned_to: Some("1"),
    },
    Seed {
        id: "MED-2024-003",
        patient_name: "Sophie Bernard",
        patient_phone: "+33634567890",
        status: RequestStatus::Completed,
        urgency: UrgencyLevel::Low,
        symptoms: "Bilan de routine et renouvellement d'ordonnance",
        location: "Marseille, 13001",
        created_minutes_ago: 24 * 60,
        updated_minutes_ago: 60,
        stage: WorkflowStage::Closed,
        assigned_to: Some("2"),
    },
    Seed {
        id: "MED-2024-004",
        patient_name: "Lucas Petit",
        patient_phone: "+33645678901",
        status: RequestStatus::InProgress,
        urgency: UrgencyLevel::High,
        symptoms: "Réaction allergique sévère, gonflement du visage",
        location: "Bordeaux, 33000",
        created_minutes_ago: 45,
        updated_minutes_ago: 15,
        stage: WorkflowStage::InitialContact,
        assigned_to: Some("3"),
    },
    Seed {
        id: "MED-2024-005",
        patient_name: "Emma Leroy",
        patient_phone: "+33656789012",
        status: RequestStatus::Cancelled,
        urgency: UrgencyLevel::Medium,
        symptoms: "Migraine et nausées",
        location: "Toulouse, 31000",
        created_minutes_ago: 3 * 60,
        updated_minutes_ago: 2 * 60,
        stage: WorkflowStage::Closed,
        assigned_to: None,
    },
    Seed {
        id: "MED-2024-006",
        patient_name: "Thomas Roux",
        patient_phone: "+33667890123",
        status: RequestStatus::New,
        urgency: UrgencyLevel::High,
        symptoms: "Perte soudaine de la vision de l'œil droit",
        location: "Nice, 06000",
        created_minutes_ago: 20,
        updated_minutes_ago: 20,
        stage: WorkflowStage::InitialContact,
        assigned_to: None,
    },
    Seed {
        id: "MED-2024-007",
        patient_name: "Clara Moreau",
        patient_phone: "+33678901234",
        status: RequestStatus::InProgress,
        urgency: UrgencyLevel::Medium,
        symptoms: "Douleurs lombaires et difficultés à marcher",
        location: "Lille, 59000",
        created_minutes_ago: 4 * 60,
        updated_minutes_ago: 60,
        stage: WorkflowStage::AppointmentScheduled,
        assigned_to: Some("4"),
    },
    Seed {
        id: "MED-2024-008",
        patient_name: "Hugo Simon",
        patient_phone: "+33689012345",
        status: RequestStatus::Completed,
        urgency: UrgencyLevel::Low,
        symptoms: "Consultation de suivi pour diabète",
        location: "Nantes, 44000",
        created_minutes_ago: 48 * 60,
        updated_minutes_ago: 24 * 60,
        stage: WorkflowStage::Closed,
        assigned_to: Some("1"),
    },
    Seed {
        id: "MED-2024-009",
        patient_name: "Léa Girard",
        patient_phone: "+33690123456",
        status: RequestStatus::InProgress,
        urgency: UrgencyLevel::Critical,
        symptoms: "Suspicion d'AVC, affaissement du visage et troubles de la parole",
        location: "Strasbourg, 67000",
        created_minutes_ago: 15,
        updated_minutes_ago: 5,
        stage: WorkflowStage::InitialContact,
        assigned_to: Some("2"),
    },
    Seed {
        id: "MED-2024-010",
        patient_name: "Antoine Dupont",
        patient_phone: "+33701234567",
        status: RequestStatus::New,
        urgency: UrgencyLevel::Medium,
        symptoms: "Toux persistante et fièvre depuis 3 jours",
        location: "Rennes, 35000",
        created_minutes_ago: 40,
        updated_minutes_ago: 40,
        stage: WorkflowStage::InitialContact,
        assigned_to: None,
    },
];

/// Requests timestamped relative to `now`, as the dashboard shows them.
pub fn mock_requests(now: DateTime<Utc>) -> Vec<MedicalRequest> {
    SEEDS
        .iter()
        .map(|seed| {
            let mut request = MedicalRequest {
                id: seed.id.to_string(),
                patient_name: seed.patient_name.to_string(),
                patient_phone: seed.patient_phone.to_string(),
                status: seed.status,
                urgency: seed.urgency,
                symptoms: seed.symptoms.to_string(),
                location: seed.location.to_string(),
                created_at: iso(minutes_ago(now, seed.created_minutes_ago)),
                updated_at: iso(minutes_ago(now, seed.updated_minutes_ago)),
                assigned_to: seed.assigned_to.map(str::to_string),
                workflow_stage: seed.stage,
                appointment_date: None,
                appointment_type: None,
                appointment_location: None,
                medical_report: None,
                notes: Vec::new(),
                actions: Vec::new(),
            };
            if request.id == "MED-2024-001" {
                attach_case_history(&mut request, now);
            }
            request
        })
        .collect()
}

fn attach_case_history(request: &mut MedicalRequest, now: DateTime<Utc>) {
    request.medical_report = Some(MedicalReport {
        id: "REPORT-001".to_string(),
        doctor_name: "Dr. Sarah Chen".to_string(),
        created_at: iso(now),
        status: ReportStatus::Available,
        is_confidential: true,
        format: "pdf".to_string(),
        size: "2.4 MB".to_string(),
    });
    request.notes.push(Note {
        id: "1".to_string(),
        content: "Patient contacté, ambulance envoyée".to_string(),
        created_at: minutes_ago(now, 20),
        created_by: "Jean Dupont".to_string(),
    });
    request.actions.push(RequestAction {
        id: "1".to_string(),
        kind: ActionKind::ContactAttempt {
            phone: request.patient_phone.clone(),
        },
        created_at: minutes_ago(now, 25),
        created_by: "Jean Dupont".to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::record::parse_instant;

    #[test]
    fn timestamps_are_relative_to_now() {
        let now = parse_instant("2024-02-25T12:00:00Z").expect("valid date");
        let requests = mock_requests(now);

        assert_eq!(requests.len(), 10);
        assert_eq!(requests[0].created_at, "2024-02-25T11:30:00.000Z");
        assert_eq!(requests[7].created_at, "2024-02-23T12:00:00.000Z");
    }

    #[test]
    fn first_request_carries_its_case_history() {
        let requests = mock_requests(Utc::now());
        let first = &requests[0];
        assert!(first.medical_report.as_ref().is_some_and(|report| report.is_confidential));
        assert_eq!(first.notes.len(), 1);
        assert_eq!(first.actions.len(), 1);
        assert!(requests[1..].iter().all(|request| request.actions.is_empty()));
    }
}
