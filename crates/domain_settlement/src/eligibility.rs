//! Eligibility filtering
//!
//! Decides whether a booking is counted toward settlement at all. A booking
//! must be paid, in a settleable lifecycle status, and past its check-in
//! instant. Records with malformed timestamps are excluded (and logged),
//! never defaulted to a sentinel instant that could masquerade as payable.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::booking::{BookingRecord, PaymentStatus};
use crate::boundary::StayBoundaries;
use crate::state::{classify, SettlementState};

/// Returns the settlement state of an eligible booking, or `None` when the
/// booking is excluded
///
/// Exclusion reasons, in evaluation order:
/// - not paid
/// - lifecycle status outside `{confirmed, completed}`
/// - malformed check-in/check-out timestamps
/// - check-in instant not yet reached
///
/// Side-effect free apart from a warning log on malformed timestamps; safe
/// to call repeatedly.
pub fn eligible_state(record: &BookingRecord, now: DateTime<Utc>) -> Option<SettlementState> {
    if record.payment_status != PaymentStatus::Paid {
        return None;
    }
    if !record.booking_status.is_settleable() {
        return None;
    }

    let bounds = match StayBoundaries::for_booking(record) {
        Ok(bounds) => bounds,
        Err(err) => {
            warn!(booking = %record.id, error = %err, "excluding booking with malformed timestamps");
            return None;
        }
    };

    classify(&bounds, now)
}

/// Returns true if the booking counts toward settlement at the given instant
pub fn is_eligible(record: &BookingRecord, now: DateTime<Utc>) -> bool {
    eligible_state(record, now).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingStatus;
    use chrono::{NaiveDate, TimeZone};
    use core_kernel::{Currency, HostId, ListingId, Money};
    use rust_decimal_macros::dec;

    fn paid_confirmed() -> BookingRecord {
        BookingRecord::new(
            HostId::new(),
            ListingId::new(),
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            Money::new(dec!(1000000), Currency::VND),
        )
        .with_payment_status(PaymentStatus::Paid)
        .with_booking_status(BookingStatus::Confirmed)
    }

    fn long_after_stay() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_paid_confirmed_past_stay_is_payable() {
        assert_eq!(
            eligible_state(&paid_confirmed(), long_after_stay()),
            Some(SettlementState::Payable)
        );
    }

    #[test]
    fn test_unpaid_is_excluded_even_when_time_eligible() {
        let record = paid_confirmed().with_payment_status(PaymentStatus::Unpaid);
        assert!(!is_eligible(&record, long_after_stay()));
    }

    #[test]
    fn test_cancelled_is_excluded_even_when_time_eligible() {
        let record = paid_confirmed().with_booking_status(BookingStatus::Cancelled);
        assert!(!is_eligible(&record, long_after_stay()));
    }

    #[test]
    fn test_pending_approval_is_excluded() {
        let record = paid_confirmed().with_booking_status(BookingStatus::Pending);
        assert!(!is_eligible(&record, long_after_stay()));
    }

    #[test]
    fn test_completed_is_eligible() {
        let record = paid_confirmed().with_booking_status(BookingStatus::Completed);
        assert!(is_eligible(&record, long_after_stay()));
    }

    #[test]
    fn test_before_check_in_is_excluded() {
        let before = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert!(!is_eligible(&paid_confirmed(), before));
    }

    #[test]
    fn test_malformed_timestamp_is_excluded_not_payable() {
        let record = paid_confirmed().with_check_in_time("??");
        assert_eq!(eligible_state(&record, long_after_stay()), None);
    }

    #[test]
    fn test_hour_only_time_is_valid_not_malformed() {
        let record = paid_confirmed()
            .with_check_in_time("14")
            .with_check_out_time("12");
        assert_eq!(
            eligible_state(&record, long_after_stay()),
            Some(SettlementState::Payable)
        );
    }
}
