use std::sync::Arc;

use crate::domain::entities::payment::{Payment, PaymentStatus};
use crate::domain::entities::record::EnumField;
use crate::usecase::ports::payment::{PaymentError, PaymentGateway};

pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Sends a pending payment to the gateway and returns it marked
    /// `processing`.
    pub async fn try_confirm(&self, payment: &Payment) -> Result<Payment, PaymentError> {
        if !payment.can_initiate() {
            return Err(PaymentError::InvalidStatus {
                id: payment.id.clone(),
                status: payment.status.as_str(),
            });
        }
        self.gateway.initiate(payment).await?;

        let mut updated = payment.clone();
        updated.status = PaymentStatus::Processing;
        tracing::info!(payment = %updated.id, doctor = %updated.doctor_name, amount = updated.amount, "payment initiated");
        Ok(updated)
    }

    /// Same as [`Self::try_confirm`] but failures are only logged; the
    /// caller keeps its current state when `None` comes back.
    pub async fn confirm(&self, payment: &Payment) -> Option<Payment> {
        match self.try_confirm(payment).await {
            Ok(updated) => Some(updated),
            Err(err) => {
                tracing::error!(payment = %payment.id, %err, "failed to initiate payment");
                None
            }
        }
    }
}

/// Replaces the payment with the same id; unknown ids are ignored.
pub fn apply_update(payments: &mut [Payment], updated: Payment) -> bool {
    match payments.iter_mut().find(|payment| payment.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}
