//! Boundary and message checks for the value-object constructors.

use deposit_core::prelude::*;
use deposit_core::{create_annual_interest_rate, create_duration_months, create_principal};
use proptest::prelude::*;

// ============================================================================
// Boundary acceptance
// ============================================================================

#[test]
fn boundaries_are_inclusive() {
    assert!(create_principal(1.0).is_ok());
    assert!(create_principal(10_000_000.0).is_ok());
    assert!(create_annual_interest_rate(0.0).is_ok());
    assert!(create_annual_interest_rate(15.0).is_ok());
    assert!(create_duration_months(3.0).is_ok());
    assert!(create_duration_months(60.0).is_ok());
}

// ============================================================================
// Boundary rejection
// ============================================================================

#[test]
fn principal_rejections() {
    let cases = [
        (0.0, "Principal amount must be between $1 and $10,000,000. Received: $0"),
        (
            10_000_001.0,
            "Principal amount must be between $1 and $10,000,000. Received: $10,000,001",
        ),
    ];
    for (raw, message) in cases {
        let err = create_principal(raw).unwrap_err();
        assert!(err.is_range_violation());
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn rate_rejections() {
    let cases = [
        (-1.0, "Interest rate must be between 0.00% and 15.00%. Received: -1.00%"),
        (15.01, "Interest rate must be between 0.00% and 15.00%. Received: 15.01%"),
        (-0.001, "Interest rate must be between 0.00% and 15.00%. Received: -0.00%"),
        (1e21, "Interest rate must be between 0.00% and 15.00%. Received: 1e+21%"),
    ];
    for (raw, message) in cases {
        let err = create_annual_interest_rate(raw).unwrap_err();
        assert!(err.is_range_violation());
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn duration_rejections() {
    let cases = [
        (2.0, "Duration must be between 3 and 60 months. Received: 2 months"),
        (61.0, "Duration must be between 3 and 60 months. Received: 61 months"),
        (1e21, "Duration must be between 3 and 60 months. Received: 1e+21 months"),
    ];
    for (raw, message) in cases {
        let err = create_duration_months(raw).unwrap_err();
        assert!(err.is_range_violation());
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn non_finite_inputs_get_invalid_number_message() {
    assert_eq!(
        create_principal(f64::NEG_INFINITY).unwrap_err().to_string(),
        "Principal amount must be a valid number. Received: -Infinity"
    );
    assert_eq!(
        create_annual_interest_rate(f64::NAN).unwrap_err().to_string(),
        "Interest rate must be a valid number. Received: NaN"
    );
    assert_eq!(
        create_duration_months(f64::INFINITY).unwrap_err().to_string(),
        "Duration must be a valid number. Received: Infinity"
    );
}

#[test]
fn deserialization_goes_through_validation() {
    let ok: PrincipalAmount = serde_json::from_str("2500").unwrap();
    assert_eq!(ok.value(), 2500.0);

    let err = serde_json::from_str::<DurationMonths>("72").unwrap_err();
    assert!(err
        .to_string()
        .contains("Duration must be between 3 and 60 months. Received: 72 months"));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn valid_principal_is_returned_unchanged(raw in 1.0f64..=10_000_000.0) {
        let p = create_principal(raw).unwrap();
        prop_assert_eq!(p.value(), raw);
    }

    #[test]
    fn rate_validation_is_deterministic(raw in -50.0f64..50.0) {
        let first = create_annual_interest_rate(raw);
        let second = create_annual_interest_rate(raw);
        prop_assert_eq!(first, second);
        prop_assert_eq!(create_annual_interest_rate(raw).is_ok(), (0.0..=15.0).contains(&raw));
    }

    #[test]
    fn whole_durations_pass_integrality(months in 3u32..=60) {
        let d = DurationMonths::new_whole(f64::from(months)).unwrap();
        prop_assert_eq!(d.whole_months(), months);
    }
}
