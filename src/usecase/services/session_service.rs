use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::domain::entities::record::EnumField;
use crate::domain::entities::session::{User, UserRole};
use crate::usecase::ports::identity::IdentityAccessor;

/// Signed-in user shared by the whole window. Written on login and logout,
/// read everywhere else through [`IdentityAccessor`].
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    current: Arc<RwLock<Option<User>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Role-selection sign in: no credentials are checked.
    pub fn login(&self, role: UserRole) -> User {
        let user = User::mock_for(role, Utc::now());
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = Some(user.clone());
        tracing::info!(role = role.as_str(), user = %user.email, "signed in");
        user
    }

    pub fn logout(&self) {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(user) = current.take() {
            tracing::info!(user = %user.email, "signed out");
        }
    }
}

impl IdentityAccessor for SessionStore {
    fn current_user(&self) -> Option<User> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_then_logout() {
        let store = SessionStore::new();
        assert_eq!(store.current_user(), None);
        assert_eq!(store.actor_name(), "Unknown");

        let user = store.login(UserRole::Admin);
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(store.current_user().map(|user| user.role), Some(UserRole::Admin));
        assert_eq!(store.actor_name(), "John");

        store.logout();
        assert_eq!(store.current_user(), None);
    }

    #[test]
    fn clones_share_the_same_session() {
        let store = SessionStore::new();
        let reader = store.clone();
        store.login(UserRole::Manager);
        assert_eq!(reader.current_user().map(|user| user.role), Some(UserRole::Manager));
    }
}
