use std::sync::Arc;

use crate::domain::entities::agent::Agent;
use crate::domain::entities::appointment::Appointment;
use crate::domain::entities::map_usage::MapUsageEntry;
use crate::domain::entities::medical_center::{CenterFilters, MedicalCenter};
use crate::domain::entities::notification::Notification;
use crate::domain::entities::payment::Payment;
use crate::domain::entities::practitioner::PractitionerProfile;
use crate::domain::entities::record::{Record, Schema};
use crate::domain::entities::request::MedicalRequest;
use crate::domain::query::criteria::ListFilters;
use crate::domain::query::engine;
use crate::usecase::ports::collection::{RecordSource, SourceError};

pub struct QueryService {
    source: Arc<dyn RecordSource>,
}

impl QueryService {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    pub fn requests(&self) -> Result<Vec<MedicalRequest>, SourceError> {
        self.source.requests()
    }

    pub fn appointments(&self) -> Result<Vec<Appointment>, SourceError> {
        self.source.appointments()
    }

    pub fn map_usage(&self) -> Result<Vec<MapUsageEntry>, SourceError> {
        self.source.map_usage()
    }

    pub fn payments(&self) -> Result<Vec<Payment>, SourceError> {
        self.source.payments()
    }

    pub fn medical_centers(&self) -> Result<Vec<MedicalCenter>, SourceError> {
        self.source.medical_centers()
    }

    pub fn practitioner_profiles(&self) -> Result<Vec<PractitionerProfile>, SourceError> {
        self.source.practitioner_profiles()
    }

    pub fn agents(&self) -> Result<Vec<Agent>, SourceError> {
        self.source.agents()
    }

    pub fn notifications(&self) -> Result<Vec<Notification>, SourceError> {
        self.source.notifications()
    }

    /// Rows of a list page for the current filter inputs.
    pub fn filter<'r, R: Record>(
        records: &'r [R],
        schema: &Schema,
        filters: &ListFilters,
    ) -> Vec<&'r R> {
        engine::run(records, &schema.criteria(filters))
    }

    pub fn filter_centers<'r>(
        centers: &'r [MedicalCenter],
        filters: &CenterFilters,
    ) -> Vec<&'r MedicalCenter> {
        engine::run(centers, &filters.criteria())
    }
}
