//! Unit tests for the core error types

use core_kernel::money::MoneyError;
use core_kernel::temporal::TemporalError;
use core_kernel::CoreError;

#[test]
fn test_money_error_converts_into_core_error() {
    let err: CoreError = MoneyError::CurrencyMismatch("VND".into(), "USD".into()).into();
    assert!(matches!(err, CoreError::Money(_)));
}

#[test]
fn test_temporal_error_converts_into_core_error() {
    let err: CoreError = TemporalError::InvalidClock {
        text: "nope".into(),
    }
    .into();
    assert!(matches!(err, CoreError::Temporal(_)));
}

#[test]
fn test_validation_helper_carries_message() {
    let err = CoreError::validation("check-out precedes check-in");
    assert_eq!(
        err.to_string(),
        "Validation error: check-out precedes check-in"
    );
}
