use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::payment::Payment;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("payment {id} is {status}, only pending payments can be initiated")]
    InvalidStatus { id: String, status: &'static str },
    #[error("payment {0} was rejected by the gateway")]
    Rejected(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn initiate(&self, payment: &Payment) -> Result<(), PaymentError>;
}
