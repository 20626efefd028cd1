//! Host balance aggregation
//!
//! Folds income line items into two totals. `available_balance` is a second
//! independent running sum over payable items only; it is never derived by
//! subtracting from `total_revenue`, which rules out the double-subtraction
//! class of bugs when states change between queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use core_kernel::{Currency, Money};

use crate::booking::BookingRecord;
use crate::eligibility::eligible_state;
use crate::error::SettlementError;
use crate::revenue::{host_revenue, IncomeLineItem};
use crate::state::SettlementState;

/// A host's settlement totals at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Lifetime revenue across all eligible bookings, regardless of state
    pub total_revenue: Money,
    /// Revenue restricted to bookings in the payable state
    pub available_balance: Money,
}

impl AggregateResult {
    /// Zero totals in the given currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            total_revenue: Money::zero(currency),
            available_balance: Money::zero(currency),
        }
    }
}

/// Folds line items into settlement totals
///
/// Every item counts toward `total_revenue`; only `Payable` items also
/// count toward `available_balance`, so `available_balance <=
/// total_revenue` always. The fold is plain addition and therefore
/// order-independent.
///
/// # Errors
///
/// Returns [`SettlementError::Money`] if any item's currency differs from
/// `currency`.
pub fn aggregate(
    items: &[IncomeLineItem],
    currency: Currency,
) -> Result<AggregateResult, SettlementError> {
    let mut total_revenue = Money::zero(currency);
    let mut available_balance = Money::zero(currency);

    for item in items {
        total_revenue = total_revenue.checked_add(&item.amount)?;
        if item.state == SettlementState::Payable {
            available_balance = available_balance.checked_add(&item.amount)?;
        }
    }

    Ok(AggregateResult {
        total_revenue,
        available_balance,
    })
}

/// Settles a batch of booking records at the given instant
///
/// The hot path of the revenue view: filters eligibility, prices each
/// booking, and folds the results. Ineligible records are skipped, not
/// errors; a record whose own pricing fields are inconsistent (mixed
/// currencies) is skipped with a warning rather than failing the batch.
pub fn settle(
    records: &[BookingRecord],
    now: DateTime<Utc>,
    currency: Currency,
) -> Result<AggregateResult, SettlementError> {
    let mut items = Vec::with_capacity(records.len());

    for record in records {
        let Some(state) = eligible_state(record, now) else {
            continue;
        };
        match host_revenue(record) {
            Ok(amount) => items.push(IncomeLineItem::new(amount, state)),
            Err(err) => {
                warn!(booking = %record.id, error = %err, "skipping booking with inconsistent pricing");
            }
        }
    }

    aggregate(&items, currency)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_state() -> impl Strategy<Value = SettlementState> {
        prop_oneof![
            Just(SettlementState::Pending),
            Just(SettlementState::Confirmed),
            Just(SettlementState::Payable),
        ]
    }

    fn arb_items() -> impl Strategy<Value = Vec<IncomeLineItem>> {
        prop::collection::vec(
            (0i64..1_000_000_000i64, arb_state()).prop_map(|(amount, state)| {
                IncomeLineItem::new(Money::from_minor(amount, Currency::VND), state)
            }),
            0..32,
        )
    }

    proptest! {
        #[test]
        fn available_balance_never_exceeds_total_revenue(items in arb_items()) {
            let result = aggregate(&items, Currency::VND).unwrap();
            prop_assert!(result.available_balance.amount() <= result.total_revenue.amount());
        }

        #[test]
        fn aggregation_is_order_independent(items in arb_items()) {
            let mut reversed = items.clone();
            reversed.reverse();

            prop_assert_eq!(
                aggregate(&items, Currency::VND).unwrap(),
                aggregate(&reversed, Currency::VND).unwrap()
            );
        }

        #[test]
        fn totals_are_never_negative(items in arb_items()) {
            let result = aggregate(&items, Currency::VND).unwrap();
            prop_assert!(!result.total_revenue.is_negative());
            prop_assert!(!result.available_balance.is_negative());
        }
    }
}
