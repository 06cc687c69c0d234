use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};

use crate::domain::entities::appointment::Appointment;
use crate::domain::entities::map_usage::MapUsageEntry;
use crate::domain::entities::medical_center::CenterFilters;
use crate::domain::entities::payment::{Payment, PaymentStatus};
use crate::domain::entities::record::Record;
use crate::domain::entities::request::{AppointmentType, MedicalRequest, UrgencyLevel};
use crate::domain::entities::session::UserRole;
use crate::domain::entities::workflow::WorkflowStage;
use crate::domain::query::criteria::{ListFilters, SortSpec};
use crate::infra::export::csv::render_csv;
use crate::infra::export::sink::DirectorySink;
use crate::infra::mock::source::MockSource;
use crate::infra::payment::simulated::SimulatedGateway;
use crate::usecase::ports::export::DeliveryOutcome;
use crate::usecase::services::export_service::{
    appointments_report, payments_report, ExportService,
};
use crate::usecase::services::payment_service::{apply_update, PaymentService};
use crate::usecase::services::query_service::QueryService;
use crate::usecase::services::session_service::SessionStore;
use crate::usecase::services::workflow_service::{
    AppointmentDraft, NewRequestDraft, RequestWorkflow, StageChange,
};

fn query() -> QueryService {
    let loaded_at = Utc
        .with_ymd_and_hms(2024, 2, 25, 12, 0, 0)
        .single()
        .expect("valid instant");
    QueryService::new(Arc::new(MockSource::at(loaded_at)))
}

fn ids<R: Record>(rows: &[&R]) -> Vec<String> {
    rows.iter().map(|row| row.id().to_string()).collect()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 25).expect("valid date")
}

#[test]
fn scheduled_appointments_in_date_order() {
    let appointments = query().appointments().expect("appointments should load");
    assert_eq!(appointments.len(), 5);

    let filters = ListFilters::for_schema(&Appointment::SCHEMA).with_choice("status", "scheduled");
    let rows = QueryService::filter(&appointments, &Appointment::SCHEMA, &filters);

    assert_eq!(ids(&rows), ["APT-001", "APT-005", "APT-004"]);
}

#[test]
fn payments_sorted_by_date_ascending() {
    let payments = query().payments().expect("payments should load");

    let filters =
        ListFilters::for_schema(&Payment::SCHEMA).with_sort(Some(SortSpec::asc("date")));
    let rows = QueryService::filter(&payments, &Payment::SCHEMA, &filters);

    assert_eq!(ids(&rows), ["PAY-003", "PAY-002", "PAY-001"]);
}

#[test]
fn sorting_on_a_filter_only_field_keeps_input_order() {
    let appointments = query().appointments().expect("appointments should load");

    let filters =
        ListFilters::for_schema(&Appointment::SCHEMA).with_sort(Some(SortSpec::asc("symptoms")));
    let rows = QueryService::filter(&appointments, &Appointment::SCHEMA, &filters);

    assert_eq!(ids(&rows), ["APT-001", "APT-002", "APT-003", "APT-004", "APT-005"]);
}

#[test]
fn patient_search_ignores_case() {
    let requests = query().requests().expect("requests should load");

    let filters = ListFilters::for_schema(&MedicalRequest::SCHEMA).with_search("dubois");
    let rows = QueryService::filter(&requests, &MedicalRequest::SCHEMA, &filters);

    assert_eq!(ids(&rows), ["MED-2024-001"]);
    assert_eq!(rows[0].patient_name, "Marie Dubois");
}

#[test]
fn pending_map_usage_newest_first() {
    let usage = query().map_usage().expect("map usage should load");

    let filters =
        ListFilters::for_schema(&MapUsageEntry::SCHEMA).with_choice("billing_status", "pending");
    let rows = QueryService::filter(&usage, &MapUsageEntry::SCHEMA, &filters);

    assert_eq!(ids(&rows), ["4", "3"]);
}

#[test]
fn centre_filters_combine_chips_and_languages() {
    let centers = query().medical_centers().expect("centres should load");

    let mut filters = CenterFilters::default();
    CenterFilters::add(&mut filters.specialties, "dermatologie");
    CenterFilters::toggle(&mut filters.languages, "en");
    CenterFilters::toggle(&mut filters.languages, "ar");
    let names: Vec<&str> = QueryService::filter_centers(&centers, &filters)
        .into_iter()
        .map(|center| center.name.as_str())
        .collect();
    assert_eq!(names, ["Clinique des Champs-Élysées"]);

    let by_city = CenterFilters {
        cities: vec!["neuilly".to_string()],
        ..CenterFilters::default()
    };
    let names: Vec<&str> = QueryService::filter_centers(&centers, &by_city)
        .into_iter()
        .map(|center| center.name.as_str())
        .collect();
    assert_eq!(names, ["Hôpital Américain de Paris"]);
}

#[test]
fn two_rows_and_a_summary_give_four_aligned_lines() {
    let appointments = query().appointments().expect("appointments should load");
    let rows = vec![&appointments[1], &appointments[3]];

    let report = appointments_report(&rows, today());
    let text = render_csv(&report.table).expect("render should succeed");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    for line in &lines {
        assert_eq!(line.split(',').count(), 11, "{line}");
    }
    assert!(lines[3].starts_with("TOTAL,"));
}

#[test]
fn empty_selection_still_exports() {
    let report = payments_report(&[], today());

    let text = render_csv(&report.table).expect("render should succeed");

    assert_eq!(text, "ID,Médecin,Rapports,Montant,Date,Statut");
}

#[test]
fn export_service_writes_into_the_configured_directory() {
    let temp = tempfile::tempdir().expect("should create temp dir");
    let service = ExportService::new(Arc::new(DirectorySink::new(temp.path())));
    let payments = query().payments().expect("payments should load");
    let rows: Vec<&Payment> = payments.iter().collect();

    let outcome = service
        .export(&payments_report(&rows, today()))
        .expect("export should succeed");

    let expected = temp.path().join("paiements_2024-02-25.csv");
    assert_eq!(outcome, DeliveryOutcome::Delivered(expected.clone()));
    let written = std::fs::read_to_string(expected).expect("export should exist");
    assert_eq!(written.lines().count(), 4);
    assert!(written.starts_with("ID,Médecin,Rapports,Montant,Date,Statut\nPAY-001,"));
}

#[test]
fn new_request_goes_through_the_workflow() {
    let session = SessionStore::new();
    session.login(UserRole::Manager);
    let workflow = RequestWorkflow::new(Arc::new(session.clone()));
    let centers = query().medical_centers().expect("centres should load");

    let mut request = workflow
        .create_request(&NewRequestDraft {
            file_number: "MED-2024-100".to_string(),
            patient_name: "Paul Girard".to_string(),
            patient_phone: "+33611111111".to_string(),
            symptoms: "Douleurs abdominales".to_string(),
            location: "Paris, 75011".to_string(),
            urgency: UrgencyLevel::High,
        })
        .expect("request should be created");
    assert_eq!(request.assigned_to.as_deref(), Some("1"));

    workflow
        .add_note(&mut request, "Patient rappelé")
        .expect("note should be added");
    let change = workflow
        .schedule_appointment(
            &mut request,
            &AppointmentDraft {
                date: "2024-03-04T09:30".to_string(),
                kind: AppointmentType::InPerson,
                center: centers.first().cloned(),
            },
        )
        .expect("appointment should be scheduled");
    assert_eq!(
        change,
        StageChange::Moved {
            from: WorkflowStage::InitialContact,
            to: WorkflowStage::AppointmentScheduled
        }
    );

    session.logout();
    workflow.change_stage(&mut request, WorkflowStage::AppointmentCompleted);

    let log: Vec<(String, &str)> = request
        .actions
        .iter()
        .map(|action| (action.description(), action.created_by.as_str()))
        .collect();
    assert_eq!(
        log,
        [
            (
                "Étape du dossier modifiée : Rendez-vous effectué".to_string(),
                "Unknown"
            ),
            (
                "Étape du dossier modifiée : Rendez-vous programmé".to_string(),
                "John"
            ),
            (
                "Consultation programmée pour le 04/03/2024 à 15 Rue Saint-Michel, 75005 Paris"
                    .to_string(),
                "John"
            ),
            ("Nouvelle note ajoutée".to_string(), "John"),
        ]
    );
}

#[tokio::test]
async fn confirmed_payment_leaves_the_pending_filter() {
    let mut payments = query().payments().expect("payments should load");
    let service = PaymentService::new(Arc::new(SimulatedGateway::new(Duration::from_millis(1))));
    let pending = ListFilters::for_schema(&Payment::SCHEMA).with_choice("status", "pending");
    assert_eq!(QueryService::filter(&payments, &Payment::SCHEMA, &pending).len(), 1);

    let updated = service
        .confirm(&payments[0])
        .await
        .expect("pending payment should be confirmed");
    assert!(apply_update(&mut payments, updated));

    assert_eq!(payments[0].status, PaymentStatus::Processing);
    assert!(QueryService::filter(&payments, &Payment::SCHEMA, &pending).is_empty());
}
