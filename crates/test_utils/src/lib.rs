//! Test Utilities - Shared fixtures and helpers for the settlement test suite
//!
//! This crate provides:
//! - Builders for constructing booking records with sensible defaults
//! - Fixtures for common money amounts and instants
//! - Assertion helpers for settlement totals

pub mod builders;
pub mod fixtures;
pub mod assertions;

pub use builders::BookingRecordBuilder;
pub use fixtures::{MoneyFixtures, TemporalFixtures};
pub use assertions::{assert_money_eq, assert_totals};
