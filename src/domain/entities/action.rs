use chrono::{DateTime, Utc};

use crate::domain::entities::record::EnumField;
use crate::domain::entities::request::{AppointmentType, RequestStatus};
use crate::domain::entities::workflow::WorkflowStage;

/// What happened to a request. Each variant carries its own payload, the
/// human readable line is derived from it.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
    StatusChange {
        from: RequestStatus,
        to: RequestStatus,
    },
    Assignment {
        agent_id: String,
    },
    NoteAdded {
        note_id: String,
    },
    ContactAttempt {
        phone: String,
    },
    WorkflowChange {
        from: WorkflowStage,
        to: WorkflowStage,
    },
    AppointmentScheduled {
        date: DateTime<Utc>,
        kind: AppointmentType,
        location: Option<String>,
    },
}

impl ActionKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ActionKind::StatusChange { .. } => "status_change",
            ActionKind::Assignment { .. } => "assignment",
            ActionKind::NoteAdded { .. } => "note_added",
            ActionKind::ContactAttempt { .. } => "contact_attempt",
            ActionKind::WorkflowChange { .. } | ActionKind::AppointmentScheduled { .. } => {
                "workflow_change"
            }
        }
    }

    pub fn description(&self) -> String {
        match self {
            ActionKind::StatusChange { to, .. } => format!("Statut modifié : {}", to.label()),
            ActionKind::Assignment { agent_id } => format!("Dossier assigné à l'agent {agent_id}"),
            ActionKind::NoteAdded { .. } => "Nouvelle note ajoutée".to_string(),
            ActionKind::ContactAttempt { phone } => format!("Contact établi avec le patient ({phone})"),
            ActionKind::WorkflowChange { to, .. } => {
                format!("Étape du dossier modifiée : {}", to.label())
            }
            ActionKind::AppointmentScheduled {
                date,
                kind,
                location,
            } => {
                let what = match kind {
                    AppointmentType::Teleconsultation => "Téléconsultation",
                    AppointmentType::InPerson => "Consultation",
                };
                let day = date.format("%d/%m/%Y");
                match location {
                    Some(address) => format!("{what} programmée pour le {day} à {address}"),
                    None => format!("{what} programmée pour le {day}"),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestAction {
    pub id: String,
    pub kind: ActionKind,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

impl RequestAction {
    pub fn description(&self) -> String {
        self.kind.description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn description_follows_the_variant() {
        let moved = ActionKind::WorkflowChange {
            from: WorkflowStage::InitialContact,
            to: WorkflowStage::AppointmentScheduled,
        };
        assert_eq!(
            moved.description(),
            "Étape du dossier modifiée : Rendez-vous programmé"
        );
        assert_eq!(moved.tag(), "workflow_change");

        let status = ActionKind::StatusChange {
            from: RequestStatus::New,
            to: RequestStatus::Completed,
        };
        assert_eq!(status.description(), "Statut modifié : Terminé");
    }

    #[test]
    fn appointment_description_mentions_the_address() {
        let date = Utc
            .with_ymd_and_hms(2024, 3, 4, 9, 30, 0)
            .single()
            .expect("valid timestamp");
        let scheduled = ActionKind::AppointmentScheduled {
            date,
            kind: AppointmentType::InPerson,
            location: Some("15 Rue Saint-Michel, 75005 Paris".to_string()),
        };
        assert_eq!(
            scheduled.description(),
            "Consultation programmée pour le 04/03/2024 à 15 Rue Saint-Michel, 75005 Paris"
        );

        let remote = ActionKind::AppointmentScheduled {
            date,
            kind: AppointmentType::Teleconsultation,
            location: None,
        };
        assert_eq!(
            remote.description(),
            "Téléconsultation programmée pour le 04/03/2024"
        );
    }
}
