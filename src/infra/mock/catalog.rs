use crate::domain::entities::appointment::{Appointment, AppointmentReportStatus, AppointmentStatus};
use crate::domain::entities::map_usage::{Billing, BillingStatus, MapUsageEntry};
use crate::domain::entities::payment::{Payment, PaymentStatus};
use crate::domain::entities::request::AppointmentType;

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: &str,
    request_id: &str,
    patient_name: &str,
    doctor_name: &str,
    location: &str,
    date: &str,
    status: AppointmentStatus,
    kind: AppointmentType,
    report_status: AppointmentReportStatus,
    patient_phone: &str,
    symptoms: &str,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        request_id: request_id.to_string(),
        patient_name: patient_name.to_string(),
        doctor_name: doctor_name.to_string(),
        location: location.to_string(),
        date: date.to_string(),
        status,
        kind,
        report_status,
        patient_phone: patient_phone.to_string(),
        symptoms: symptoms.to_string(),
    }
}

pub fn mock_appointments() -> Vec<Appointment> {
    use AppointmentReportStatus as Report;
    use AppointmentStatus as Status;
    use AppointmentType as Kind;

    vec![
        appointment(
            "APT-001",
            "MED-2024-001",
            "Marie Dubois",
            "Dr. Sarah Chen",
            "Centre Médical Saint-Michel, Paris",
            "2024-02-25T10:30:00Z",
            Status::Scheduled,
            Kind::InPerson,
            Report::Pending,
            "+33612345678",
            "Douleurs thoraciques",
        ),
        appointment(
            "APT-002",
            "MED-2024-002",
            "Jean Martin",
            "Dr. Thomas Martin",
            "Téléconsultation",
            "2024-02-24T14:15:00Z",
            Status::Completed,
            Kind::Teleconsultation,
            Report::Available,
            "+33623456789",
            "Suivi diabète",
        ),
        appointment(
            "APT-003",
            "MED-2024-003",
            "Sophie Bernard",
            "Dr. Marie Laurent",
            "Hôpital Américain, Neuilly",
            "2024-02-23T09:00:00Z",
            Status::Cancelled,
            Kind::InPerson,
            Report::NotRequired,
            "+33634567890",
            "Consultation pré-opératoire",
        ),
        appointment(
            "APT-004",
            "MED-2024-004",
            "Lucas Petit",
            "Dr. Emma Bernard",
            "Cabinet Médical Montmartre",
            "2024-02-26T11:45:00Z",
            Status::Scheduled,
            Kind::InPerson,
            Report::Pending,
            "+33645678901",
            "Allergie cutanée",
        ),
        appointment(
            "APT-005",
            "MED-2024-005",
            "Emma Leroy",
            "Dr. Lucas Silva",
            "Téléconsultation",
            "2024-02-25T16:30:00Z",
            Status::Scheduled,
            Kind::Teleconsultation,
            Report::Pending,
            "+33656789012",
            "Renouvellement ordonnance",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn usage(
    id: &str,
    request_id: &str,
    patient_name: &str,
    agent_name: &str,
    timestamp: &str,
    duration: u32,
    view_count: u32,
    report_date: Option<&str>,
    (map_usage, report_fee, status): (f64, f64, BillingStatus),
) -> MapUsageEntry {
    MapUsageEntry {
        id: id.to_string(),
        request_id: request_id.to_string(),
        patient_name: patient_name.to_string(),
        agent_name: agent_name.to_string(),
        timestamp: timestamp.to_string(),
        duration,
        view_count,
        has_report: report_date.is_some(),
        report_date: report_date.map(str::to_string),
        billing: Billing {
            map_usage,
            report_fee,
            total: map_usage + report_fee,
            status,
        },
    }
}

pub fn mock_map_usage() -> Vec<MapUsageEntry> {
    vec![
        usage(
            "1",
            "MED-2024-001",
            "Marie Dubois",
            "Sophie Martin",
            "2024-02-20T10:30:00Z",
            180,
            2,
            Some("2024-02-21T15:45:00Z"),
            (10.0, 15.0, BillingStatus::Paid),
        ),
        usage(
            "2",
            "MED-2024-002",
            "Jean Martin",
            "Jean Dupont",
            "2024-02-20T11:15:00Z",
            240,
            3,
            Some("2024-02-22T09:30:00Z"),
            (15.0, 15.0, BillingStatus::Billed),
        ),
        usage(
            "3",
            "MED-2024-003",
            "Sophie Bernard",
            "Marie Bernard",
            "2024-02-20T14:20:00Z",
            120,
            1,
            None,
            (5.0, 0.0, BillingStatus::Pending),
        ),
        usage(
            "4",
            "MED-2024-004",
            "Lucas Petit",
            "Sophie Martin",
            "2024-02-21T09:45:00Z",
            300,
            4,
            Some("2024-02-23T11:20:00Z"),
            (20.0, 15.0, BillingStatus::Pending),
        ),
        usage(
            "5",
            "MED-2024-005",
            "Emma Leroy",
            "Jean Dupont",
            "2024-02-21T13:10:00Z",
            150,
            2,
            None,
            (10.0, 0.0, BillingStatus::Billed),
        ),
    ]
}

fn report_ids(first: u32, count: u32) -> Vec<String> {
    (first..first + count)
        .map(|idx| format!("REP-{idx:03}"))
        .collect()
}

pub fn mock_payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "PAY-001".to_string(),
            doctor_id: "DOC-001".to_string(),
            doctor_name: "Dr. Sarah Chen".to_string(),
            reports: 8,
            amount: 1200.0,
            date: "2024-02-15".to_string(),
            status: PaymentStatus::Pending,
            report_ids: report_ids(1, 8),
        },
        Payment {
            id: "PAY-002".to_string(),
            doctor_id: "DOC-002".to_string(),
            doctor_name: "Dr. Thomas Martin".to_string(),
            reports: 5,
            amount: 800.0,
            date: "2024-02-14".to_string(),
            status: PaymentStatus::Paid,
            report_ids: report_ids(9, 5),
        },
        Payment {
            id: "PAY-003".to_string(),
            doctor_id: "DOC-003".to_string(),
            doctor_name: "Dr. Marie Laurent".to_string(),
            reports: 10,
            amount: 1600.0,
            date: "2024-02-13".to_string(),
            status: PaymentStatus::Processing,
            report_ids: report_ids(14, 10),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_totals_add_up() {
        let totals: Vec<f64> = mock_map_usage()
            .iter()
            .map(|entry| entry.billing.total)
            .collect();
        assert_eq!(totals, [25.0, 30.0, 5.0, 35.0, 10.0]);
    }

    #[test]
    fn payment_report_ids_match_the_report_count() {
        for payment in mock_payments() {
            assert_eq!(payment.report_ids.len(), payment.reports as usize, "{}", payment.id);
        }
        assert_eq!(mock_payments()[2].report_ids.last().map(String::as_str), Some("REP-023"));
    }
}
