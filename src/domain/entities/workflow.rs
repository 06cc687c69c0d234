use crate::domain::entities::record::EnumField;

/// Stage of a request in the dispatch workflow, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkflowStage {
    #[default]
    InitialContact,
    AppointmentRequest,
    AppointmentScheduled,
    AppointmentCompleted,
    ReportAvailable,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageProgress {
    Completed,
    Current,
    Upcoming,
}

impl WorkflowStage {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index()
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// How this stage renders while the request sits at `current`.
    pub fn progress_of(self, current: WorkflowStage) -> StageProgress {
        match self.index().cmp(&current.index()) {
            std::cmp::Ordering::Less => StageProgress::Completed,
            std::cmp::Ordering::Equal => StageProgress::Current,
            std::cmp::Ordering::Greater => StageProgress::Upcoming,
        }
    }
}

impl EnumField for WorkflowStage {
    const ALL: &'static [Self] = &[
        WorkflowStage::InitialContact,
        WorkflowStage::AppointmentRequest,
        WorkflowStage::AppointmentScheduled,
        WorkflowStage::AppointmentCompleted,
        WorkflowStage::ReportAvailable,
        WorkflowStage::Closed,
    ];

    fn as_str(self) -> &'static str {
        match self {
            WorkflowStage::InitialContact => "initial_contact",
            WorkflowStage::AppointmentRequest => "appointment_request",
            WorkflowStage::AppointmentScheduled => "appointment_scheduled",
            WorkflowStage::AppointmentCompleted => "appointment_completed",
            WorkflowStage::ReportAvailable => "report_available",
            WorkflowStage::Closed => "closed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            WorkflowStage::InitialContact => "Premier contact",
            WorkflowStage::AppointmentRequest => "Demande de rendez-vous",
            WorkflowStage::AppointmentScheduled => "Rendez-vous programmé",
            WorkflowStage::AppointmentCompleted => "Rendez-vous effectué",
            WorkflowStage::ReportAvailable => "Compte rendu disponible",
            WorkflowStage::Closed => "Clôturé",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_walk_the_pipeline_in_order() {
        assert_eq!(WorkflowStage::InitialContact.previous(), None);
        assert_eq!(
            WorkflowStage::InitialContact.next(),
            Some(WorkflowStage::AppointmentRequest)
        );
        assert_eq!(
            WorkflowStage::Closed.previous(),
            Some(WorkflowStage::ReportAvailable)
        );
        assert_eq!(WorkflowStage::Closed.next(), None);
        assert_eq!(WorkflowStage::ReportAvailable.index(), 4);
    }

    #[test]
    fn progress_compares_pipeline_positions() {
        let current = WorkflowStage::AppointmentScheduled;
        assert_eq!(
            WorkflowStage::InitialContact.progress_of(current),
            StageProgress::Completed
        );
        assert_eq!(current.progress_of(current), StageProgress::Current);
        assert_eq!(
            WorkflowStage::Closed.progress_of(current),
            StageProgress::Upcoming
        );
    }

    #[test]
    fn parse_uses_wire_values() {
        assert_eq!(
            WorkflowStage::parse("report_available"),
            Some(WorkflowStage::ReportAvailable)
        );
        assert_eq!(WorkflowStage::parse("Clôturé"), None);
    }
}
