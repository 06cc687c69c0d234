use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::payment::Payment;
use crate::usecase::ports::payment::{PaymentError, PaymentGateway};

/// Stand-in for the payment provider: waits, then accepts (or rejects).
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
    reject: bool,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            reject: false,
        }
    }

    #[cfg(test)]
    pub fn rejecting(delay: Duration) -> Self {
        Self {
            delay,
            reject: true,
        }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn initiate(&self, payment: &Payment) -> Result<(), PaymentError> {
        tracing::debug!(payment = %payment.id, delay_ms = self.delay.as_millis() as u64, "simulating payment call");
        tokio::time::sleep(self.delay).await;
        if self.reject {
            return Err(PaymentError::Rejected(payment.id.clone()));
        }
        Ok(())
    }
}
