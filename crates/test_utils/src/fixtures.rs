//! Common fixture values for settlement tests

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{market_offset, Currency, Money};
use rust_decimal_macros::dec;

/// Money amounts used across the test suite
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical two-night accommodation total
    pub fn accommodation() -> Money {
        Money::new(dec!(1000000), Currency::VND)
    }

    /// A typical platform service fee
    pub fn service_fee() -> Money {
        Money::new(dec!(150000), Currency::VND)
    }

    /// An arbitrary VND amount
    pub fn vnd(amount: i64) -> Money {
        Money::from_minor(amount, Currency::VND)
    }

    /// A zero VND amount
    pub fn zero() -> Money {
        Money::zero(Currency::VND)
    }
}

/// Instants and dates used across the test suite
///
/// All fixtures describe the reference stay: check-in 2026-01-10 14:00,
/// check-out 2026-01-12 12:00, both in the +07:00 market offset.
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Reference check-in date
    pub fn check_in_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()
    }

    /// Reference check-out date
    pub fn check_out_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
    }

    /// A market-local wall-clock instant converted to UTC
    pub fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        market_offset()
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .unwrap()
            .with_timezone(&Utc)
    }

    /// An instant before the reference stay begins
    pub fn before_stay() -> DateTime<Utc> {
        Self::local(2026, 1, 5, 0, 0, 0)
    }

    /// An instant in the middle of the reference stay
    pub fn mid_stay() -> DateTime<Utc> {
        Self::local(2026, 1, 11, 0, 0, 0)
    }

    /// An instant inside the payout clearance window
    pub fn in_clearance() -> DateTime<Utc> {
        Self::local(2026, 1, 13, 0, 0, 0)
    }

    /// An instant after the payout clearance has elapsed
    pub fn after_clearance() -> DateTime<Utc> {
        Self::local(2026, 1, 14, 0, 0, 0)
    }
}
