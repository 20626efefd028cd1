//! Settlement state classification
//!
//! A pure function of the stay boundaries and an explicit "now": no system
//! clock, no stored state. For a fixed booking and monotonically increasing
//! time the states visited are exactly `pending -> confirmed -> payable`,
//! never skipping and never reversing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::boundary::StayBoundaries;

/// Lifecycle stage of a booking's revenue
///
/// Ordered by lifecycle progression, so `Pending < Confirmed < Payable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementState {
    /// Guest is mid-stay
    Pending,
    /// Checked out, inside the payout clearance window
    Confirmed,
    /// Clearance elapsed; revenue is withdrawable
    Payable,
}

impl fmt::Display for SettlementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SettlementState::Pending => "pending",
            SettlementState::Confirmed => "confirmed",
            SettlementState::Payable => "payable",
        };
        write!(f, "{}", s)
    }
}

/// Classifies a booking's revenue at the given instant
///
/// Returns `None` while the check-in instant has not yet occurred; such a
/// booking is excluded from all settlement views.
///
/// Each comparison is strict-less-than: an instant exactly equal to a
/// boundary belongs to the *later* state (`now == check_out` classifies as
/// `Confirmed`, not `Pending`).
pub fn classify(bounds: &StayBoundaries, now: DateTime<Utc>) -> Option<SettlementState> {
    if now < bounds.check_in {
        None
    } else if now < bounds.check_out {
        Some(SettlementState::Pending)
    } else if now < bounds.payable_after {
        Some(SettlementState::Confirmed)
    } else {
        Some(SettlementState::Payable)
    }
}
