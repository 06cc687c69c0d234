use crate::domain::entities::session::User;

pub const UNKNOWN_ACTOR: &str = "Unknown";

/// Read access to whoever is signed in.
pub trait IdentityAccessor: Send + Sync {
    fn current_user(&self) -> Option<User>;

    /// Name written on actions and notes.
    fn actor_name(&self) -> String {
        self.current_user()
            .map(|user| user.first_name)
            .unwrap_or_else(|| UNKNOWN_ACTOR.to_string())
    }
}
