//! Settlement domain errors

use thiserror::Error;

use core_kernel::money::MoneyError;
use core_kernel::temporal::TemporalError;

/// Errors raised by the settlement engine
#[derive(Debug, Error)]
pub enum SettlementError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Booking source error: {0}")]
    Source(String),
}

impl SettlementError {
    pub fn source(message: impl Into<String>) -> Self {
        SettlementError::Source(message.into())
    }
}
