//! Settlement Domain - Booking Revenue Lifecycle
//!
//! This crate decides, for each paid booking, whether its revenue is still
//! mid-stay, confirmed but not yet withdrawable, or available for payout,
//! and aggregates many bookings into a host's total revenue and available
//! balance.
//!
//! # Revenue Lifecycle
//!
//! Every eligible booking walks the same one-way path as wall-clock time
//! advances past its stay boundaries:
//!
//! - **Pending**: the guest is mid-stay (check-in reached, check-out not yet)
//! - **Confirmed**: checked out, inside the 24-hour payout clearance window
//! - **Payable**: clearance elapsed; the amount is withdrawable
//!
//! Before check-in the booking carries no settlement state and is excluded
//! from every view.
//!
//! # Determinism
//!
//! The engine is a set of pure functions over immutable inputs. The current
//! instant is always an explicit parameter, never read from the system
//! clock, so every computation is deterministic and testable without
//! mocking time.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_settlement::{settle, BookingRecord};
//!
//! let result = settle(&bookings, now, Currency::VND)?;
//! println!("total: {}, available: {}", result.total_revenue, result.available_balance);
//! ```

pub mod booking;
pub mod boundary;
pub mod state;
pub mod eligibility;
pub mod revenue;
pub mod aggregate;
pub mod audit;
pub mod ports;
pub mod error;

pub use booking::{BookingRecord, BookingStatus, PaymentStatus};
pub use boundary::{StayBoundaries, DEFAULT_CHECK_IN_TIME, DEFAULT_CHECK_OUT_TIME};
pub use state::{classify, SettlementState};
pub use eligibility::{eligible_state, is_eligible};
pub use revenue::{host_revenue, IncomeLineItem};
pub use aggregate::{aggregate, settle, AggregateResult};
pub use audit::AuditRecord;
pub use ports::{settle_host, BookingSource};
pub use error::SettlementError;
