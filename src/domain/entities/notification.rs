use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    AppointmentCompleted,
    PaymentPending,
}

impl NotificationKind {
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::AppointmentCompleted => "✔",
            NotificationKind::PaymentPending => "€",
        }
    }
}

/// Amount a practitioner is waiting for, attached to payment notices.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAmount {
    pub amount: f64,
    pub reports: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub request_id: String,
    pub practitioner: Option<String>,
    pub pending: Option<PendingAmount>,
    pub read: bool,
}

impl Notification {
    /// `Montant en attente : 800€ (5 rapports)` for payment notices.
    pub fn pending_label(&self) -> Option<String> {
        if self.kind != NotificationKind::PaymentPending {
            return None;
        }
        let pending = self.pending.as_ref()?;
        let mut label = format!("Montant en attente : {}€", pending.amount);
        if let Some(reports) = pending.reports {
            label.push_str(&format!(" ({reports} rapports)"));
        }
        Some(label)
    }
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|notification| !notification.read).count()
}

/// Returns false when no notification has that id.
pub fn mark_read(notifications: &mut [Notification], id: &str) -> bool {
    match notifications.iter_mut().find(|notification| notification.id == id) {
        Some(notification) => {
            notification.read = true;
            true
        }
        None => false,
    }
}

pub fn dismiss(notifications: &mut Vec<Notification>, id: &str) -> bool {
    let before = notifications.len();
    notifications.retain(|notification| notification.id != id);
    notifications.len() != before
}
