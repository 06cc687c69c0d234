use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entities::record::EnumField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentStatus {
    Available,
    Busy,
    Offline,
}

impl EnumField for AgentStatus {
    const ALL: &'static [Self] = &[AgentStatus::Available, AgentStatus::Busy, AgentStatus::Offline];

    fn as_str(self) -> &'static str {
        match self {
            AgentStatus::Available => "available",
            AgentStatus::Busy => "busy",
            AgentStatus::Offline => "offline",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AgentStatus::Available => "Disponible",
            AgentStatus::Busy => "Occupé",
            AgentStatus::Offline => "Hors ligne",
        }
    }
}

/// Workload of one agent over a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentDay {
    pub date: NaiveDate,
    pub active_requests: u32,
    pub completed_requests: u32,
    pub status: AgentStatus,
}

/// Assistant handling requests, with a day-by-day activity history.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub role: String,
    pub location: String,
    pub phone: String,
    pub status: AgentStatus,
    pub active_requests: u32,
    pub completed_today: u32,
    pub last_active: DateTime<Utc>,
    pub history: Vec<AgentDay>,
}

impl Agent {
    /// Live figures without a date, the recorded day otherwise. A day with
    /// no record reads as an offline day with no activity.
    pub fn activity_on(&self, date: Option<NaiveDate>) -> AgentDay {
        let Some(date) = date else {
            return AgentDay {
                date: self.last_active.date_naive(),
                active_requests: self.active_requests,
                completed_requests: self.completed_today,
                status: self.status,
            };
        };
        self.history
            .iter()
            .find(|day| day.date == date)
            .copied()
            .unwrap_or(AgentDay {
                date,
                active_requests: 0,
                completed_requests: 0,
                status: AgentStatus::Offline,
            })
    }
}

/// Agents not offline on that day, or right now without a date.
pub fn active_count(agents: &[Agent], date: Option<NaiveDate>) -> usize {
    agents
        .iter()
        .filter(|agent| agent.activity_on(date).status != AgentStatus::Offline)
        .count()
}
