//! Booking records consumed from the booking-storage collaborator
//!
//! A [`BookingRecord`] is immutable input to the settlement engine: the
//! engine never mutates or persists it. Field names serialize in the
//! collaborator's camelCase wire shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{BookingId, GuestId, HostId, ListingId, Money};

/// Payment status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Payment captured in full
    Paid,
    /// Not yet paid, or payment failed
    Unpaid,
}

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting host approval
    Pending,
    /// Approved by the host
    Confirmed,
    /// Stay finished
    Completed,
    /// Cancelled by guest or host
    Cancelled,
}

impl BookingStatus {
    /// Returns true for statuses whose revenue counts toward settlement
    pub fn is_settleable(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::Completed)
    }
}

/// A booking as stored by the marketplace
///
/// Check-in and check-out carry a calendar date plus an optional wall-clock
/// time; absent times fall back to the property-wide defaults (14:00 in,
/// 12:00 out). Pricing is either itemized (`accommodation_total`,
/// `pet_total`) or collapsed into `total_price` less `service_fee`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    /// Unique identifier
    pub id: BookingId,
    /// Listing being booked
    pub listing_id: ListingId,
    /// Host receiving the revenue
    pub host_id: HostId,
    /// Guest who placed the booking
    pub guest_id: GuestId,
    /// Check-in calendar date
    pub check_in_date: NaiveDate,
    /// Check-out calendar date
    pub check_out_date: NaiveDate,
    /// Check-in wall-clock time (`HH`, `HH:MM`, or `HH:MM:SS`)
    pub check_in_time: Option<String>,
    /// Check-out wall-clock time
    pub check_out_time: Option<String>,
    /// Payment status
    pub payment_status: PaymentStatus,
    /// Booking lifecycle status
    pub booking_status: BookingStatus,
    /// Itemized accommodation revenue
    pub accommodation_total: Option<Money>,
    /// Itemized pet-fee revenue
    pub pet_total: Option<Money>,
    /// Gross price paid by the guest
    pub total_price: Money,
    /// Platform service fee (never part of host revenue)
    pub service_fee: Option<Money>,
}

impl BookingRecord {
    /// Creates a new booking record
    ///
    /// The record starts unpaid and pending approval, with no explicit
    /// check-in/check-out times and no itemized pricing.
    pub fn new(
        host_id: HostId,
        listing_id: ListingId,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
        total_price: Money,
    ) -> Self {
        Self {
            id: BookingId::new_v7(),
            listing_id,
            host_id,
            guest_id: GuestId::new(),
            check_in_date,
            check_out_date,
            check_in_time: None,
            check_out_time: None,
            payment_status: PaymentStatus::Unpaid,
            booking_status: BookingStatus::Pending,
            accommodation_total: None,
            pet_total: None,
            total_price,
            service_fee: None,
        }
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

    /// Sets the platform service fee
    pub fn with_service_fee(mut self, fee: Money) -> Self {
        self.service_fee = Some(fee);
        self
    }
}
