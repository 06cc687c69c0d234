use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::entities::appointment::{Appointment, AppointmentStatus};
use crate::domain::entities::map_usage::MapUsageEntry;
use crate::domain::entities::payment::Payment;
use crate::domain::entities::record::{parse_instant, EnumField};
use crate::infra::export::csv::{
    export_file_name, format_euros, format_number, render_csv, CsvTable, SummaryRow,
};
use crate::usecase::ports::export::{DeliveryOutcome, ExportError, ExportSink};

pub const APPOINTMENT_HEADERS: &[&str] = &[
    "ID Rendez-vous",
    "ID Dossier",
    "Patient",
    "Téléphone",
    "Médecin",
    "Type",
    "Lieu",
    "Date",
    "Statut",
    "Rapport",
    "Symptômes",
];

pub const MAP_USAGE_HEADERS: &[&str] = &[
    "ID Requête",
    "Patient",
    "Agent",
    "Date",
    "Durée (min)",
    "Nombre de vues",
    "Rapport disponible",
    "Date du rapport",
    "Frais carte",
    "Frais rapport",
    "Total",
    "Statut",
];

pub const PAYMENT_HEADERS: &[&str] = &["ID", "Médecin", "Rapports", "Montant", "Date", "Statut"];

pub const BILLING_HEADERS: &[&str] = &[
    "Date",
    "Médecin",
    "Nombre de rapports",
    "Montant facturé",
    "Utilisation de la carte",
    "Frais de rapports",
    "Total",
];

/// Share of a billed amount attributed to map usage; reports get the rest.
const MAP_USAGE_SHARE: f64 = 0.4;

/// A rendered-ready export: target file name plus its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub file_name: String,
    pub table: CsvTable,
}

/// `dd/mm/yyyy hh:mm:ss` in UTC; unparsable input is exported as is.
fn export_datetime(value: &str) -> String {
    parse_instant(value)
        .map(|instant| instant.format("%d/%m/%Y %H:%M:%S").to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn appointments_report(rows: &[&Appointment], today: NaiveDate) -> Report {
    let mut table = CsvTable::new(APPOINTMENT_HEADERS);
    for appointment in rows {
        table.push_row(vec![
            appointment.id.clone(),
            appointment.request_id.clone(),
            appointment.patient_name.clone(),
            appointment.patient_phone.clone(),
            appointment.doctor_name.clone(),
            appointment.kind.label().to_string(),
            appointment.location.clone(),
            export_datetime(&appointment.date),
            appointment.status.label().to_string(),
            appointment.report_status.label().to_string(),
            appointment.symptoms.clone(),
        ]);
    }

    let count = |status: AppointmentStatus| rows.iter().filter(|row| row.status == status).count();
    let totals = format!(
        "Programmés: {} / Terminés: {} / Annulés: {}",
        count(AppointmentStatus::Scheduled),
        count(AppointmentStatus::Completed),
        count(AppointmentStatus::Cancelled)
    );
    let summary = SummaryRow::new(table.width()).label("TOTAL").set(8, totals);

    Report {
        file_name: export_file_name("rendez-vous", today),
        table: table.with_summary(summary),
    }
}

pub fn map_usage_report(rows: &[&MapUsageEntry], today: NaiveDate) -> Report {
    let mut table = CsvTable::new(MAP_USAGE_HEADERS);
    for entry in rows {
        table.push_row(vec![
            entry.request_id.clone(),
            entry.patient_name.clone(),
            entry.agent_name.clone(),
            export_datetime(&entry.timestamp),
            entry.duration_minutes().to_string(),
            entry.view_count.to_string(),
            if entry.has_report { "Oui" } else { "Non" }.to_string(),
            entry
                .report_date
                .as_deref()
                .map(export_datetime)
                .unwrap_or_else(|| "-".to_string()),
            format_euros(entry.billing.map_usage),
            format_euros(entry.billing.report_fee),
            format_euros(entry.billing.total),
            entry.billing.status.as_str().to_string(),
        ]);
    }

    let sum = |pick: fn(&MapUsageEntry) -> f64| rows.iter().map(|entry| pick(entry)).sum::<f64>();
    let summary = SummaryRow::new(table.width())
        .label("TOTAL")
        .set(8, format_euros(sum(|entry| entry.billing.map_usage)))
        .set(9, format_euros(sum(|entry| entry.billing.report_fee)))
        .set(10, format_euros(sum(|entry| entry.billing.total)));

    Report {
        file_name: export_file_name("utilisation-carte", today),
        table: table.with_summary(summary),
    }
}

pub fn payments_report(rows: &[&Payment], today: NaiveDate) -> Report {
    let mut table = CsvTable::new(PAYMENT_HEADERS);
    for payment in rows {
        table.push_row(vec![
            payment.id.clone(),
            payment.doctor_name.clone(),
            payment.reports.to_string(),
            format_number(payment.amount),
            payment.date.clone(),
            payment.status.as_str().to_string(),
        ]);
    }

    Report {
        file_name: export_file_name("paiements", today),
        table,
    }
}

/// Monthly billing statement of the admin page. `month` is the `YYYY-MM`
/// picked by the administrator.
pub fn billing_report(payments: &[&Payment], month: &str, today: NaiveDate) -> Report {
    let mut table = CsvTable::new(BILLING_HEADERS);
    let mut total_reports = 0_u64;
    let mut total_amount = 0.0;
    let mut total_map_usage = 0.0;
    let mut total_report_fees = 0.0;

    for payment in payments {
        let map_usage = payment.amount * MAP_USAGE_SHARE;
        let report_fees = payment.amount * (1.0 - MAP_USAGE_SHARE);
        table.push_row(vec![
            payment.date.clone(),
            payment.doctor_name.clone(),
            payment.reports.to_string(),
            format_number(payment.amount),
            format!("{map_usage:.2}"),
            format!("{report_fees:.2}"),
            format_number(payment.amount),
        ]);
        total_reports += u64::from(payment.reports);
        total_amount += payment.amount;
        total_map_usage += map_usage;
        total_report_fees += report_fees;
    }

    let summary = SummaryRow::new(table.width())
        .label("TOTAL")
        .set(2, total_reports.to_string())
        .set(3, format_number(total_amount))
        .set(4, format!("{total_map_usage:.2}"))
        .set(5, format!("{total_report_fees:.2}"))
        .set(6, format_number(total_amount));

    Report {
        file_name: export_file_name(&format!("rapport-facturation-{month}"), today),
        table: table.with_summary(summary),
    }
}

pub struct ExportService {
    sink: Arc<dyn ExportSink>,
}

impl ExportService {
    pub fn new(sink: Arc<dyn ExportSink>) -> Self {
        Self { sink }
    }

    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    pub fn export(&self, report: &Report) -> Result<DeliveryOutcome, ExportError> {
        let contents = render_csv(&report.table)?;
        match self.sink.deliver(&report.file_name, &contents) {
            Ok(DeliveryOutcome::Delivered(path)) => {
                tracing::info!(
                    file = %report.file_name,
                    rows = report.table.rows.len(),
                    path = %path.display(),
                    "export delivered"
                );
                Ok(DeliveryOutcome::Delivered(path))
            }
            Ok(DeliveryOutcome::Cancelled) => {
                tracing::info!(file = %report.file_name, "export cancelled");
                Ok(DeliveryOutcome::Cancelled)
            }
            Err(err) => {
                tracing::error!(file = %report.file_name, %err, "export failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::mock::catalog::{mock_appointments, mock_map_usage, mock_payments};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 25).expect("valid date")
    }

    fn lines(report: &Report) -> Vec<String> {
        render_csv(&report.table)
            .expect("render should succeed")
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn appointments_report_counts_statuses() {
        let appointments = mock_appointments();
        let rows: Vec<&Appointment> = appointments.iter().collect();

        let report = appointments_report(&rows, today());
        let lines = lines(&report);

        assert_eq!(report.file_name, "rendez-vous_2024-02-25.csv");
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], APPOINTMENT_HEADERS.join(","));
        assert!(lines[2].starts_with("APT-002,MED-2024-002,Jean Martin,+33623456789,Dr. Thomas Martin,Téléconsultation,Téléconsultation,24/02/2024 14:15:00,Terminé,Disponible,"));
        assert_eq!(
            lines[6],
            "TOTAL,,,,,,,,Programmés: 3 / Terminés: 1 / Annulés: 1,,"
        );
    }

    #[test]
    fn map_usage_report_sums_euros() {
        let usage = mock_map_usage();
        let rows: Vec<&MapUsageEntry> = usage.iter().collect();

        let report = map_usage_report(&rows, today());
        let lines = lines(&report);

        assert_eq!(report.file_name, "utilisation-carte_2024-02-25.csv");
        assert_eq!(
            lines[1],
            "MED-2024-001,Marie Dubois,Sophie Martin,20/02/2024 10:30:00,3,2,Oui,21/02/2024 15:45:00,10€,15€,25€,paid"
        );
        assert_eq!(
            lines[3],
            "MED-2024-003,Sophie Bernard,Marie Bernard,20/02/2024 14:20:00,2,1,Non,-,5€,0€,5€,pending"
        );
        assert_eq!(lines.last().map(String::as_str), Some("TOTAL,,,,,,,,60€,45€,105€,"));
    }

    #[test]
    fn payments_report_has_no_summary() {
        let payments = mock_payments();
        let rows: Vec<&Payment> = payments.iter().collect();

        let report = payments_report(&rows, today());

        assert_eq!(
            lines(&report),
            [
                "ID,Médecin,Rapports,Montant,Date,Statut",
                "PAY-001,Dr. Sarah Chen,8,1200,2024-02-15,pending",
                "PAY-002,Dr. Thomas Martin,5,800,2024-02-14,paid",
                "PAY-003,Dr. Marie Laurent,10,1600,2024-02-13,processing",
            ]
        );
    }

    #[test]
    fn billing_report_splits_amounts() {
        let payments = mock_payments();
        let rows: Vec<&Payment> = payments.iter().collect();

        let report = billing_report(&rows, "2024-02", today());
        let lines = lines(&report);

        assert_eq!(report.file_name, "rapport-facturation-2024-02_2024-02-25.csv");
        assert_eq!(lines[1], "2024-02-15,Dr. Sarah Chen,8,1200,480.00,720.00,1200");
        assert_eq!(lines[4], "TOTAL,,23,3600,1440.00,2160.00,3600");
    }

    #[test]
    fn empty_selection_exports_header_and_summary_only() {
        let report = appointments_report(&[], today());
        let lines = lines(&report);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "TOTAL,,,,,,,,Programmés: 0 / Terminés: 0 / Annulés: 0,,");

        assert_eq!(payments_report(&[], today()).table.rows.len(), 0);
    }
}
