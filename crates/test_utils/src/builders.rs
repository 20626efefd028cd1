//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. Tests specify only the relevant fields and inherit defaults
//! for everything else.

use chrono::NaiveDate;
use core_kernel::{HostId, ListingId, Money};
use domain_settlement::booking::{BookingRecord, BookingStatus, PaymentStatus};

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for booking records
///
/// Defaults to a paid, confirmed two-night stay (2026-01-10 to 2026-01-12)
/// priced at 1,000,000 VND with no itemization, no explicit times, and no
/// service fee.
pub struct BookingRecordBuilder {
    host_id: HostId,
    listing_id: ListingId,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    check_in_time: Option<String>,
    check_out_time: Option<String>,
    payment_status: PaymentStatus,
    booking_status: BookingStatus,
    accommodation_total: Option<Money>,
    pet_total: Option<Money>,
    total_price: Money,
    service_fee: Option<Money>,
}

impl Default for BookingRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingRecordBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            host_id: HostId::new(),
            listing_id: ListingId::new(),
            check_in_date: TemporalFixtures::check_in_date(),
            check_out_date: TemporalFixtures::check_out_date(),
            check_in_time: None,
            check_out_time: None,
            payment_status: PaymentStatus::Paid,
            booking_status: BookingStatus::Confirmed,
            accommodation_total: None,
            pet_total: None,
            total_price: MoneyFixtures::accommodation(),
            service_fee: None,
        }
    }

    /// Sets the host
    pub fn with_host(mut self, host_id: HostId) -> Self {
        self.host_id = host_id;
        self
    }

    /// Sets the stay dates
    pub fn with_stay(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in_date = check_in;
        self.check_out_date = check_out;
        self
    }

    /// Sets the check-in time
    pub fn with_check_in_time(mut self, time: impl Into<String>) -> Self {
        self.check_in_time = Some(time.into());
        self
    }

    /// Sets the check-out time
    pub fn with_check_out_time(mut self, time: impl Into<String>) -> Self {
        self.check_out_time = Some(time.into());
        self
    }

    /// Sets the payment status
    pub fn with_payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = status;
        self
    }

    /// Sets the booking status
    pub fn with_booking_status(mut self, status: BookingStatus) -> Self {
        self.booking_status = status;
        self
    }

    /// Sets itemized pricing
    pub fn with_itemized(mut self, accommodation: Money, pet: Money) -> Self {
        self.accommodation_total = Some(accommodation);
        self.pet_total = Some(pet);
        self
    }

    /// Sets the gross price
    pub fn with_total_price(mut self, price: Money) -> Self {
        self.total_price = price;
        self
    }

    /// Sets the service fee
    pub fn with_service_fee(mut self, fee: Money) -> Self {
        self.service_fee = Some(fee);
        self
    }

    /// Builds the booking record
    pub fn build(self) -> BookingRecord {
        let mut record = BookingRecord::new(
            self.host_id,
            self.listing_id,
            self.check_in_date,
            self.check_out_date,
            self.total_price,
        )
        .with_payment_status(self.payment_status)
        .with_booking_status(self.booking_status);

        record.check_in_time = self.check_in_time;
        record.check_out_time = self.check_out_time;
        record.accommodation_total = self.accommodation_total;
        record.pet_total = self.pet_total;
        record.service_fee = self.service_fee;
        record
    }
}
