//! Assertion helpers for settlement tests

use core_kernel::Money;
use domain_settlement::aggregate::AggregateResult;
use rust_decimal::Decimal;

/// Asserts a money value has the expected decimal amount
pub fn assert_money_eq(actual: Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "expected {} but got {}",
        expected,
        actual
    );
}

/// Asserts both settlement totals at once
pub fn assert_totals(result: &AggregateResult, total: Decimal, available: Decimal) {
    assert_money_eq(result.total_revenue, total);
    assert_money_eq(result.available_balance, available);
}
