use std::collections::BTreeSet;

use crate::domain::entities::appointment::{Appointment, AppointmentReportStatus, AppointmentStatus};
use crate::domain::entities::map_usage::MapUsageEntry;
use crate::domain::entities::payment::{Payment, PaymentStatus};
use crate::domain::entities::record::{EnumField, Record};
use crate::domain::entities::request::{MedicalRequest, RequestStatus};
use crate::domain::query::criteria::{EnumChoice, Predicate, QueryCriteria, SortDirection};
use crate::domain::query::engine;

const RECENT_LIMIT: usize = 3;

fn status_is(field: &str, value: &str) -> Predicate {
    Predicate::EnumEquals {
        field: field.to_string(),
        choice: EnumChoice::Only(value.to_string()),
    }
}

/// Statistic cards of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOverview {
    pub total: usize,
    pub new: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Distinct agents holding at least one request.
    pub agents: usize,
}

impl RequestOverview {
    pub fn compute(requests: &[MedicalRequest]) -> Self {
        let count = |status: RequestStatus| {
            engine::count_matching(requests, &status_is("status", status.as_str()))
        };
        let agents: BTreeSet<&str> = requests
            .iter()
            .filter_map(|request| request.assigned_to.as_deref())
            .collect();

        Self {
            total: requests.len(),
            new: count(RequestStatus::New),
            in_progress: count(RequestStatus::InProgress),
            completed: count(RequestStatus::Completed),
            agents: agents.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentSearches {
    pub name: String,
    pub searches: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminOverview {
    pub map_searches: f64,
    pub map_revenue: f64,
    pub average_views_per_request: f64,
    pub report_revenue: f64,
    pub completed_reports: usize,
    pub appointments_total: usize,
    pub appointments_completed: usize,
    pub pending_reports: usize,
    pub pending_payments_total: f64,
    pub doctors_awaiting_payment: usize,
    pub top_agents: Vec<AgentSearches>,
    pub recent_appointments: Vec<Appointment>,
    pub recent_payments: Vec<Payment>,
}

impl AdminOverview {
    pub fn compute(usage: &[MapUsageEntry], appointments: &[Appointment], payments: &[Payment]) -> Self {
        let all_usage: Vec<&MapUsageEntry> = usage.iter().collect();
        let map_searches = engine::sum_field(&all_usage, "view_count");
        let requests: BTreeSet<&str> = usage.iter().map(|entry| entry.request_id.as_str()).collect();
        let average_views_per_request = if requests.is_empty() {
            0.0
        } else {
            map_searches / requests.len() as f64
        };

        let pending_payments = engine::run(
            payments,
            &QueryCriteria::new().enum_eq("status", PaymentStatus::Pending.as_str()),
        );
        let doctors: BTreeSet<&str> = pending_payments
            .iter()
            .map(|payment| payment.doctor_id.as_str())
            .collect();

        Self {
            map_searches,
            map_revenue: engine::sum_field(&all_usage, "map_usage"),
            average_views_per_request,
            report_revenue: engine::sum_field(&all_usage, "report_fee"),
            completed_reports: usage.iter().filter(|entry| entry.has_report).count(),
            appointments_total: appointments.len(),
            appointments_completed: engine::count_matching(
                appointments,
                &status_is("status", AppointmentStatus::Completed.as_str()),
            ),
            pending_reports: engine::count_matching(
                appointments,
                &status_is("report_status", AppointmentReportStatus::Pending.as_str()),
            ),
            pending_payments_total: engine::sum_field(&pending_payments, "amount"),
            doctors_awaiting_payment: doctors.len(),
            top_agents: top_agents(usage),
            recent_appointments: recent(appointments, "date"),
            recent_payments: recent(payments, "date"),
        }
    }
}

fn recent<R: Record + Clone>(records: &[R], field: &str) -> Vec<R> {
    engine::run(records, &QueryCriteria::new().sort_by(field, SortDirection::Desc))
        .into_iter()
        .take(RECENT_LIMIT)
        .cloned()
        .collect()
}

/// Agents ranked by map searches; ties keep first-seen order.
fn top_agents(usage: &[MapUsageEntry]) -> Vec<AgentSearches> {
    let mut agents: Vec<AgentSearches> = Vec::new();
    for entry in usage {
        match agents.iter_mut().find(|agent| agent.name == entry.agent_name) {
            Some(agent) => agent.searches += entry.view_count,
            None => agents.push(AgentSearches {
                name: entry.agent_name.clone(),
                searches: entry.view_count,
            }),
        }
    }
    agents.sort_by(|a, b| b.searches.cmp(&a.searches));
    agents.truncate(RECENT_LIMIT);
    agents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::mock::catalog::{mock_appointments, mock_map_usage, mock_payments};
    use crate::infra::mock::requests::mock_requests;
    use chrono::Utc;

    #[test]
    fn dashboard_counts_by_status() {
        let overview = RequestOverview::compute(&mock_requests(Utc::now()));
        assert_eq!(
            overview,
            RequestOverview {
                total: 10,
                new: 3,
                in_progress: 4,
                completed: 2,
                agents: 4,
            }
        );
    }

    #[test]
    fn admin_overview_from_mock_data() {
        let overview = AdminOverview::compute(&mock_map_usage(), &mock_appointments(), &mock_payments());

        assert_eq!(overview.map_searches, 12.0);
        assert_eq!(overview.map_revenue, 60.0);
        assert!((overview.average_views_per_request - 2.4).abs() < 1e-9);
        assert_eq!(overview.report_revenue, 45.0);
        assert_eq!(overview.completed_reports, 3);
        assert_eq!(overview.appointments_total, 5);
        assert_eq!(overview.appointments_completed, 1);
        assert_eq!(overview.pending_reports, 3);
        assert_eq!(overview.pending_payments_total, 1200.0);
        assert_eq!(overview.doctors_awaiting_payment, 1);

        let agents: Vec<(&str, u32)> = overview
            .top_agents
            .iter()
            .map(|agent| (agent.name.as_str(), agent.searches))
            .collect();
        assert_eq!(agents, [("Sophie Martin", 6), ("Jean Dupont", 5), ("Marie Bernard", 1)]);

        let recent: Vec<&str> = overview.recent_appointments.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(recent, ["APT-004", "APT-005", "APT-001"]);
        let paid: Vec<&str> = overview.recent_payments.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(paid, ["PAY-001", "PAY-002", "PAY-003"]);
    }

    #[test]
    fn empty_collections_give_zeroes() {
        let overview = AdminOverview::compute(&[], &[], &[]);
        assert_eq!(overview.map_searches, 0.0);
        assert_eq!(overview.average_views_per_request, 0.0);
        assert!(overview.top_agents.is_empty());
        assert!(overview.recent_payments.is_empty());
    }
}
