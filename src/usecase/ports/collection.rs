use thiserror::Error;

use crate::domain::entities::agent::Agent;
use crate::domain::entities::appointment::Appointment;
use crate::domain::entities::map_usage::MapUsageEntry;
use crate::domain::entities::medical_center::MedicalCenter;
use crate::domain::entities::notification::Notification;
use crate::domain::entities::payment::Payment;
use crate::domain::entities::practitioner::PractitionerProfile;
use crate::domain::entities::request::MedicalRequest;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    // The bundled mock collections never fail.
    #[allow(dead_code)]
    #[error("collection `{0}` is unavailable")]
    Unavailable(&'static str),
}

/// Read side of every collection the client shows.
pub trait RecordSource: Send + Sync {
    fn requests(&self) -> Result<Vec<MedicalRequest>, SourceError>;
    fn appointments(&self) -> Result<Vec<Appointment>, SourceError>;
    fn map_usage(&self) -> Result<Vec<MapUsageEntry>, SourceError>;
    fn payments(&self) -> Result<Vec<Payment>, SourceError>;
    fn medical_centers(&self) -> Result<Vec<MedicalCenter>, SourceError>;
    fn practitioner_profiles(&self) -> Result<Vec<PractitionerProfile>, SourceError>;
    fn agents(&self) -> Result<Vec<Agent>, SourceError>;
    fn notifications(&self) -> Result<Vec<Notification>, SourceError>;
}
