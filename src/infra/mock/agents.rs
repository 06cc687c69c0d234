use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::agent::{Agent, AgentDay, AgentStatus};
use crate::domain::entities::record::EnumField;

const HISTORY_DAYS: u32 = 30;

struct Seed {
    id: &'static str,
    name: &'static str,
    role: &'static str,
    location: &'static str,
    phone: &'static str,
    status: AgentStatus,
    active_requests: u32,
    completed_today: u32,
    idle_minutes: i64,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        name: "Sophie Martin",
        role: "Assistant médical",
        location: "Paris, 75001",
        phone: "+33 6 12 34 56 78",
        status: AgentStatus::Available,
        active_requests: 2,
        completed_today: 5,
        idle_minutes: 0,
    },
    Seed {
        id: "2",
        name: "Jean Dupont",
        role: "Assistant médical senior",
        location: "Lyon, 69001",
        phone: "+33 6 23 45 67 89",
        status: AgentStatus::Busy,
        active_requests: 4,
        completed_today: 7,
        idle_minutes: 0,
    },
    Seed {
        id: "3",
        name: "Marie Bernard",
        role: "Assistant médical",
        location: "Marseille, 13001",
        phone: "+33 6 34 56 78 90",
        status: AgentStatus::Offline,
        active_requests: 0,
        completed_today: 3,
        idle_minutes: 30,
    },
];

/// Oldest day first, ending on the day of `now`. Figures cycle so the same
/// seed always yields the same history.
fn history(seed: u32, now: DateTime<Utc>) -> Vec<AgentDay> {
    let today = now.date_naive();
    (0..HISTORY_DAYS)
        .rev()
        .map(|back| {
            let turn = seed + back;
            AgentDay {
                date: today - Duration::days(i64::from(back)),
                active_requests: (turn * 3) % 5 + 1,
                completed_requests: (turn * 5) % 8 + 2,
                status: AgentStatus::ALL[(turn % 3) as usize],
            }
        })
        .collect()
}

pub fn mock_agents(now: DateTime<Utc>) -> Vec<Agent> {
    SEEDS
        .iter()
        .zip(0u32..)
        .map(|(seed, idx)| Agent {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            role: seed.role.to_string(),
            location: seed.location.to_string(),
            phone: seed.phone.to_string(),
            status: seed.status,
            active_requests: seed.active_requests,
            completed_today: seed.completed_today,
            last_active: now - Duration::minutes(seed.idle_minutes),
            history: history(idx, now),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn each_agent_has_thirty_days_up_to_today() {
        let now = Utc
            .with_ymd_and_hms(2024, 2, 25, 12, 0, 0)
            .single()
            .expect("valid instant");

        let first = NaiveDate::from_ymd_opt(2024, 1, 27).expect("valid date");
        let last = NaiveDate::from_ymd_opt(2024, 2, 25).expect("valid date");

        let agents = mock_agents(now);

        assert_eq!(agents.len(), 3);
        for agent in &agents {
            assert_eq!(agent.history.len(), 30);
            assert_eq!(agent.history[0].date, first);
            assert_eq!(agent.history[29].date, last);
        }
        assert_eq!(agents[2].last_active, now - Duration::minutes(30));
    }
}
