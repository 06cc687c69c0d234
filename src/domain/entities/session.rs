use chrono::{DateTime, Utc};

use crate::domain::entities::record::EnumField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserRole {
    #[default]
    Assistant,
    Manager,
    Admin,
}

impl EnumField for UserRole {
    const ALL: &'static [Self] = &[UserRole::Assistant, UserRole::Manager, UserRole::Admin];

    fn as_str(self) -> &'static str {
        match self {
            UserRole::Assistant => "assistant",
            UserRole::Manager => "manager",
            UserRole::Admin => "admin",
        }
    }

    fn label(self) -> &'static str {
        match self {
            UserRole::Assistant => "Assistant",
            UserRole::Manager => "Responsable",
            UserRole::Admin => "Administrateur",
        }
    }
}

/// Where a role lands right after signing in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomePage {
    Dashboard,
    Admin,
}

impl UserRole {
    pub fn home_page(self) -> HomePage {
        match self {
            UserRole::Admin => HomePage::Admin,
            UserRole::Assistant | UserRole::Manager => HomePage::Dashboard,
        }
    }

    pub fn sees_team_statistics(self) -> bool {
        self == UserRole::Manager
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub department: Option<String>,
    pub phone_number: Option<String>,
    pub is_active: bool,
}

impl User {
    /// Stand-in account used by the role-selection sign in.
    pub fn mock_for(role: UserRole, now: DateTime<Utc>) -> Self {
        Self {
            id: "1".to_string(),
            email: "user@example.com".to_string(),
            role,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            created_at: now,
            department: Some("Medical Assistance".to_string()),
            phone_number: Some("+33123456789".to_string()),
            is_active: true,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admins_land_on_the_admin_page() {
        assert_eq!(UserRole::Admin.home_page(), HomePage::Admin);
        assert_eq!(UserRole::Assistant.home_page(), HomePage::Dashboard);
        assert_eq!(UserRole::Manager.home_page(), HomePage::Dashboard);
    }

    #[test]
    fn only_managers_see_team_statistics() {
        assert!(UserRole::Manager.sees_team_statistics());
        assert!(!UserRole::Assistant.sees_team_statistics());
        assert!(!UserRole::Admin.sees_team_statistics());
    }

    #[test]
    fn mock_user_keeps_the_requested_role() {
        let user = User::mock_for(UserRole::Manager, Utc::now());
        assert_eq!(user.role, UserRole::Manager);
        assert_eq!(user.full_name(), "John Doe");
    }
}
