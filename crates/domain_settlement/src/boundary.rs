//! Stay boundary calculation
//!
//! Derives the three instants that drive a booking's settlement lifecycle:
//! check-in, check-out, and payable-after (check-out plus the 24-hour
//! payout clearance).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::temporal::{compose, payout_clearance};

use crate::booking::BookingRecord;
use crate::error::SettlementError;

/// Default check-in time applied when a booking carries no explicit time
pub const DEFAULT_CHECK_IN_TIME: &str = "14:00";

/// Default check-out time applied when a booking carries no explicit time
pub const DEFAULT_CHECK_OUT_TIME: &str = "12:00";

/// The three instants bounding a booking's settlement lifecycle
///
/// # Invariants
///
/// - `payable_after - check_out` is exactly 86,400,000 ms. The field is
///   only ever produced by adding [`payout_clearance`] to `check_out`, so
///   the offset cannot drift even across calendar irregularities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayBoundaries {
    /// When the guest may check in
    pub check_in: DateTime<Utc>,
    /// When the guest must check out
    pub check_out: DateTime<Utc>,
    /// When the revenue becomes withdrawable
    pub payable_after: DateTime<Utc>,
}

impl StayBoundaries {
    /// Computes the boundaries for a booking
    ///
    /// Absent check-in/check-out times fall back to
    /// [`DEFAULT_CHECK_IN_TIME`] and [`DEFAULT_CHECK_OUT_TIME`].
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::Temporal`] when either timestamp fails to
    /// compose. Malformed timestamps are never substituted with a sentinel
    /// instant.
    pub fn for_booking(record: &BookingRecord) -> Result<Self, SettlementError> {
        let check_in_time = record
            .check_in_time
            .as_deref()
            .unwrap_or(DEFAULT_CHECK_IN_TIME);
        let check_out_time = record
            .check_out_time
            .as_deref()
            .unwrap_or(DEFAULT_CHECK_OUT_TIME);

        let check_in = compose(record.check_in_date, check_in_time)?;
        let check_out = compose(record.check_out_date, check_out_time)?;
        let payable_after = check_out + payout_clearance();

        Ok(Self {
            check_in,
            check_out,
            payable_after,
        })
    }
}
