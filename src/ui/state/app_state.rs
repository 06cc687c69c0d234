use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::entities::agent::Agent;
use crate::domain::entities::appointment::Appointment;
use crate::domain::entities::map_usage::MapUsageEntry;
use crate::domain::entities::medical_center::MedicalCenter;
use crate::domain::entities::notification::Notification;
use crate::domain::entities::payment::Payment;
use crate::domain::entities::practitioner::PractitionerProfile;
use crate::domain::entities::request::MedicalRequest;
use crate::domain::entities::session::{HomePage, User};
use crate::infra::config::settings::AppConfig;
use crate::infra::export::sink::{DialogSink, DirectorySink};
use crate::infra::mock::source::MockSource;
use crate::infra::payment::simulated::SimulatedGateway;
use crate::usecase::ports::collection::SourceError;
use crate::usecase::ports::export::{DeliveryOutcome, ExportSink};
use crate::usecase::services::export_service::{ExportService, Report};
use crate::usecase::services::payment_service::PaymentService;
use crate::usecase::services::query_service::QueryService;
use crate::usecase::services::session_service::SessionStore;
use crate::usecase::services::workflow_service::RequestWorkflow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
    NewRequest,
    RequestDetails(String),
    Practitioners,
    Admin,
    MapUsage,
    Appointments,
    Payments,
    Agents,
}

impl From<HomePage> for Page {
    fn from(home: HomePage) -> Self {
        match home {
            HomePage::Dashboard => Page::Dashboard,
            HomePage::Admin => Page::Admin,
        }
    }
}

/// Services shared with every page through the Dioxus context.
#[derive(Clone)]
pub struct AppServices {
    pub query: Arc<QueryService>,
    pub export: Arc<ExportService>,
    pub workflow: Arc<RequestWorkflow>,
    pub payments: Arc<PaymentService>,
    pub session: SessionStore,
    pub map_token: Option<String>,
}

impl AppServices {
    pub fn from_config(config: &AppConfig) -> Self {
        let sink: Arc<dyn ExportSink> = match &config.export_dir {
            Some(dir) => Arc::new(DirectorySink::new(dir.clone())),
            None => Arc::new(DialogSink),
        };
        let session = SessionStore::new();

        Self {
            query: Arc::new(QueryService::new(Arc::new(MockSource::new()))),
            export: Arc::new(ExportService::new(sink)),
            workflow: Arc::new(RequestWorkflow::new(Arc::new(session.clone()))),
            payments: Arc::new(PaymentService::new(Arc::new(SimulatedGateway::new(
                config.payment_delay,
            )))),
            session,
            map_token: config.mapbox_token.clone(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub page: Signal<Page>,
    pub user: Signal<Option<User>>,
    pub requests: Signal<Vec<MedicalRequest>>,
    pub appointments: Signal<Vec<Appointment>>,
    pub usage: Signal<Vec<MapUsageEntry>>,
    pub payments: Signal<Vec<Payment>>,
    pub centers: Signal<Vec<MedicalCenter>>,
    pub profiles: Signal<Vec<PractitionerProfile>>,
    pub agents: Signal<Vec<Agent>>,
    pub notifications: Signal<Vec<Notification>>,
    pub status: Signal<String>,
}

/// Every collection read in one pass, so a failure leaves the state alone.
struct Collections {
    requests: Vec<MedicalRequest>,
    appointments: Vec<Appointment>,
    usage: Vec<MapUsageEntry>,
    payments: Vec<Payment>,
    centers: Vec<MedicalCenter>,
    profiles: Vec<PractitionerProfile>,
    agents: Vec<Agent>,
    notifications: Vec<Notification>,
}

impl Collections {
    fn read(query: &QueryService) -> Result<Self, SourceError> {
        Ok(Self {
            requests: query.requests()?,
            appointments: query.appointments()?,
            usage: query.map_usage()?,
            payments: query.payments()?,
            centers: query.medical_centers()?,
            profiles: query.practitioner_profiles()?,
            agents: query.agents()?,
            notifications: query.notifications()?,
        })
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: use_signal(|| Page::Login),
            user: use_signal(|| None::<User>),
            requests: use_signal(Vec::<MedicalRequest>::new),
            appointments: use_signal(Vec::<Appointment>::new),
            usage: use_signal(Vec::<MapUsageEntry>::new),
            payments: use_signal(Vec::<Payment>::new),
            centers: use_signal(Vec::<MedicalCenter>::new),
            profiles: use_signal(Vec::<PractitionerProfile>::new),
            agents: use_signal(Vec::<Agent>::new),
            notifications: use_signal(Vec::<Notification>::new),
            status: use_signal(|| "Prêt".to_string()),
        }
    }

    /// Fills every collection from the source; stops at the first failure.
    pub fn load(mut self, query: &QueryService) {
        match Collections::read(query) {
            Ok(loaded) => {
                self.requests.set(loaded.requests);
                self.appointments.set(loaded.appointments);
                self.usage.set(loaded.usage);
                self.payments.set(loaded.payments);
                self.centers.set(loaded.centers);
                self.profiles.set(loaded.profiles);
                self.agents.set(loaded.agents);
                self.notifications.set(loaded.notifications);
                self.status.set("Données chargées".to_string());
            }
            Err(err) => {
                tracing::error!(%err, "failed to load collections");
                self.status.set(format!("Chargement des données impossible : {err}"));
            }
        }
    }

    pub fn notify(mut self, message: impl Into<String>) {
        self.status.set(message.into());
    }

    pub fn navigate(mut self, page: Page) {
        self.page.set(page);
    }

    /// Runs `edit` on the request with that id and returns its result.
    pub fn update_request<T>(
        mut self,
        id: &str,
        edit: impl FnOnce(&mut MedicalRequest) -> T,
    ) -> Option<T> {
        let mut requests = self.requests.write();
        let result = requests.iter_mut().find(|request| request.id == id).map(edit);
        result
    }

    pub fn export(self, service: &ExportService, report: &Report) {
        let message = match service.export(report) {
            Ok(DeliveryOutcome::Delivered(path)) => {
                format!("Export enregistré : {}", path.display())
            }
            Ok(DeliveryOutcome::Cancelled) => "Export annulé".to_string(),
            Err(err) => format!("Export impossible : {err}"),
        };
        self.notify(message);
    }
}
