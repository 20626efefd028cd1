//! Ports to external collaborators
//!
//! The engine owns no storage; booking records arrive through the
//! [`BookingSource`] seam. Adapters (database, API client, in-memory test
//! double) implement the trait on the caller's side.

use chrono::{DateTime, Utc};

use core_kernel::{Currency, HostId};

use crate::aggregate::{settle, AggregateResult};
use crate::booking::BookingRecord;
use crate::error::SettlementError;

/// Read-only access to a host's booking records
pub trait BookingSource {
    /// Fetches all booking records for a host
    fn bookings_for_host(&self, host: HostId) -> Result<Vec<BookingRecord>, SettlementError>;
}

/// Settles every booking of a host at the given instant
pub fn settle_host(
    source: &dyn BookingSource,
    host: HostId,
    now: DateTime<Utc>,
    currency: Currency,
) -> Result<AggregateResult, SettlementError> {
    let records = source.bookings_for_host(host)?;
    settle(&records, now, currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{BookingStatus, PaymentStatus};
    use chrono::{NaiveDate, TimeZone};
    use core_kernel::{ListingId, Money};
    use rust_decimal_macros::dec;

    struct FixedSource(Vec<BookingRecord>);

    impl BookingSource for FixedSource {
        fn bookings_for_host(&self, host: HostId) -> Result<Vec<BookingRecord>, SettlementError> {
            Ok(self
                .0
                .iter()
                .filter(|b| b.host_id == host)
                .cloned()
                .collect())
        }
    }

    #[test]
    fn test_settle_host_only_counts_that_hosts_bookings() {
        let host = HostId::new();
        let other = HostId::new();

        let booking = |h| {
            BookingRecord::new(
                h,
                ListingId::new(),
                NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
                NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
                Money::new(dec!(1000000), Currency::VND),
            )
            .with_payment_status(PaymentStatus::Paid)
            .with_booking_status(BookingStatus::Completed)
        };

        let source = FixedSource(vec![booking(host), booking(other)]);
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();

        let result = settle_host(&source, host, now, Currency::VND).unwrap();
        assert_eq!(result.total_revenue.amount(), dec!(1000000));
    }

    #[test]
    fn test_source_errors_propagate() {
        struct FailingSource;

        impl BookingSource for FailingSource {
            fn bookings_for_host(
                &self,
                _host: HostId,
            ) -> Result<Vec<BookingRecord>, SettlementError> {
                Err(SettlementError::source("connection refused"))
            }
        }

        let now = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
        let result = settle_host(&FailingSource, HostId::new(), now, Currency::VND);
        assert!(matches!(result, Err(SettlementError::Source(_))));
    }
}
