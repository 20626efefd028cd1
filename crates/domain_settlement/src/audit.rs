//! Audit rendering for settlement decisions
//!
//! Renders the boundary instants, the query instant, and the resulting
//! state as fixed-format UTC text for logs and support tooling. One-way
//! diagnostic output: no engine component reads it back.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::boundary::StayBoundaries;
use crate::state::SettlementState;

const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

fn render(instant: DateTime<Utc>) -> String {
    instant.format(UTC_FORMAT).to_string()
}

/// A settlement decision rendered for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRecord {
    /// Check-in instant, UTC text
    pub check_in: String,
    /// Check-out instant, UTC text
    pub check_out: String,
    /// Payable-after instant, UTC text
    pub payable_after: String,
    /// The "now" the classification was computed against, UTC text
    pub observed_at: String,
    /// Resulting state; `None` when the stay has not started
    pub state: Option<SettlementState>,
}

impl AuditRecord {
    /// Captures a classification outcome for diagnostics
    pub fn capture(
        bounds: &StayBoundaries,
        now: DateTime<Utc>,
        state: Option<SettlementState>,
    ) -> Self {
        Self {
            check_in: render(bounds.check_in),
            check_out: render(bounds.check_out),
            payable_after: render(bounds.payable_after),
            observed_at: render(now),
            state,
        }
    }

    /// Emits the record at debug level
    pub fn emit(&self) {
        debug!(
            check_in = %self.check_in,
            check_out = %self.check_out,
            payable_after = %self.payable_after,
            observed_at = %self.observed_at,
            state = %self.state_label(),
            "settlement classification"
        );
    }

    fn state_label(&self) -> &'static str {
        match self.state {
            None => "none",
            Some(SettlementState::Pending) => "pending",
            Some(SettlementState::Confirmed) => "confirmed",
            Some(SettlementState::Payable) => "payable",
        }
    }
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "check_in={} check_out={} payable_after={} observed_at={} state={}",
            self.check_in,
            self.check_out,
            self.payable_after,
            self.observed_at,
            self.state_label()
        )
    }
}
