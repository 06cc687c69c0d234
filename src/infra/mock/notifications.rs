use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::notification::{Notification, NotificationKind, PendingAmount};

pub fn mock_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            kind: NotificationKind::AppointmentCompleted,
            title: "Rendez-vous terminé".to_string(),
            message: "Dr. Sarah Chen a terminé la consultation".to_string(),
            timestamp: now - Duration::minutes(5),
            request_id: "MED-2024-001".to_string(),
            practitioner: Some("Dr. Sarah Chen".to_string()),
            pending: None,
            read: false,
        },
        Notification {
            id: "2".to_string(),
            kind: NotificationKind::PaymentPending,
            title: "Paiement en attente".to_string(),
            message: "Paiement en attente pour 5 rapports médicaux".to_string(),
            timestamp: now - Duration::minutes(30),
            request_id: "PAY-2024-004".to_string(),
            practitioner: Some("Dr. Martin".to_string()),
            pending: Some(PendingAmount {
                amount: 800.0,
                reports: Some(5),
            }),
            read: false,
        },
        Notification {
            id: "3".to_string(),
            kind: NotificationKind::AppointmentCompleted,
            title: "Rendez-vous terminé".to_string(),
            message: "Dr. Dubois a terminé la téléconsultation".to_string(),
            timestamp: now - Duration::minutes(60),
            request_id: "MED-2024-007".to_string(),
            practitioner: Some("Dr. Dubois".to_string()),
            pending: None,
            read: true,
        },
    ]
}
