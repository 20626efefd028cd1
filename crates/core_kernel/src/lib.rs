//! Core Kernel - Foundational types and utilities for the settlement engine
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Market-timezone timestamp composition
//! - Common identifiers and value objects

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{compose, market_offset, parse_clock, payout_clearance, TemporalError, PAYOUT_CLEARANCE_MS};
pub use identifiers::{BookingId, ListingId, HostId, GuestId};
pub use error::CoreError;
