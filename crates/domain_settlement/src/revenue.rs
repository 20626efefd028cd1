//! Per-booking revenue calculation
//!
//! Derives the countable host revenue for one booking. Itemized components
//! win over the collapsed fallback whenever either is positive; no
//! reconciliation between the two representations is attempted.

use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::booking::BookingRecord;
use crate::error::SettlementError;
use crate::state::SettlementState;

/// Computes the host revenue for a booking
///
/// - Itemized: `accommodation_total + pet_total` when either is positive.
///   Service fees are never part of host revenue.
/// - Fallback: `max(0, total_price - service_fee)`, with a missing fee
///   treated as zero. The clamp guarantees a non-negative result.
///
/// # Errors
///
/// Returns [`SettlementError::Money`] if the record mixes currencies.
pub fn host_revenue(record: &BookingRecord) -> Result<Money, SettlementError> {
    let currency = record.total_price.currency();
    let accommodation = record
        .accommodation_total
        .unwrap_or_else(|| Money::zero(currency));
    let pet = record.pet_total.unwrap_or_else(|| Money::zero(currency));

    if accommodation.is_positive() || pet.is_positive() {
        return Ok(accommodation.checked_add(&pet)?);
    }

    let fee = record.service_fee.unwrap_or_else(|| Money::zero(currency));
    Ok(record.total_price.sub_or_zero(&fee)?)
}

/// A booking's revenue paired with its settlement state
///
/// Computed fresh on every query; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeLineItem {
    /// Countable host revenue
    pub amount: Money,
    /// Settlement state at the instant of the query
    pub state: SettlementState,
}

impl IncomeLineItem {
    pub fn new(amount: Money, state: SettlementState) -> Self {
        Self { amount, state }
    }
}
