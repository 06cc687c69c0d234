use chrono::{DateTime, Utc};

use crate::domain::entities::agent::Agent;
use crate::domain::entities::appointment::Appointment;
use crate::domain::entities::map_usage::MapUsageEntry;
use crate::domain::entities::medical_center::MedicalCenter;
use crate::domain::entities::notification::Notification;
use crate::domain::entities::payment::Payment;
use crate::domain::entities::practitioner::PractitionerProfile;
use crate::domain::entities::request::MedicalRequest;
use crate::infra::mock::agents::mock_agents;
use crate::infra::mock::catalog::{mock_appointments, mock_map_usage, mock_payments};
use crate::infra::mock::centers::mock_medical_centers;
use crate::infra::mock::notifications::mock_notifications;
use crate::infra::mock::practitioners::mock_practitioner_profiles;
use crate::infra::mock::requests::mock_requests;
use crate::usecase::ports::collection::{RecordSource, SourceError};

/// Hard-coded collections; nothing is persisted.
#[derive(Debug, Clone)]
pub struct MockSource {
    loaded_at: DateTime<Utc>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Relative request timestamps are computed from `loaded_at`.
    pub fn at(loaded_at: DateTime<Utc>) -> Self {
        Self { loaded_at }
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for MockSource {
    fn requests(&self) -> Result<Vec<MedicalRequest>, SourceError> {
        Ok(mock_requests(self.loaded_at))
    }

    fn appointments(&self) -> Result<Vec<Appointment>, SourceError> {
        Ok(mock_appointments())
    }

    fn map_usage(&self) -> Result<Vec<MapUsageEntry>, SourceError> {
        Ok(mock_map_usage())
    }

    fn payments(&self) -> Result<Vec<Payment>, SourceError> {
        Ok(mock_payments())
    }

    fn medical_centers(&self) -> Result<Vec<MedicalCenter>, SourceError> {
        Ok(mock_medical_centers())
    }

    fn practitioner_profiles(&self) -> Result<Vec<PractitionerProfile>, SourceError> {
        Ok(mock_practitioner_profiles())
    }

    fn agents(&self) -> Result<Vec<Agent>, SourceError> {
        Ok(mock_agents(self.loaded_at))
    }

    fn notifications(&self) -> Result<Vec<Notification>, SourceError> {
        Ok(mock_notifications(self.loaded_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn requests_are_dated_from_the_load_instant() {
        let loaded_at = Utc
            .with_ymd_and_hms(2024, 2, 25, 12, 0, 0)
            .single()
            .expect("valid instant");
        let source = MockSource::at(loaded_at);

        let requests = source.requests().expect("requests should load");

        assert_eq!(requests[0].created_at, "2024-02-25T11:30:00.000Z");
        assert!(source.payments().is_ok_and(|payments| payments.len() == 3));

        let notifications = source.notifications().expect("notifications should load");
        assert_eq!(notifications[0].timestamp, loaded_at - chrono::Duration::minutes(5));
        let agents = source.agents().expect("agents should load");
        assert_eq!(agents[0].last_active, loaded_at);
    }
}
