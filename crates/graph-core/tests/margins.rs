// File: crates/graph-core/tests/margins.rs
// Purpose: Margin validation properties.

use graph_core::{GraphError, Margin};

#[test]
fn default_margin_matches_construction_contract() {
    let m = Margin::default();
    assert_eq!((m.top, m.right, m.bottom, m.left), (20.0, 20.0, 20.0, 32.0));
}

#[test]
fn valid_margins_pass_and_stay_unchanged() {
    let m = Margin::new(1.0, 2.5, 3.0, 4.25);
    m.validate().expect("finite margins validate");
    assert_eq!(m, Margin::new(1.0, 2.5, 3.0, 4.25));
}

#[test]
fn from_entries_overrides_supplied_keys() {
    let m = Margin::from_entries([("top", 10.0), ("left", 48.0)]).expect("valid entries");
    assert_eq!(m.top, 10.0);
    assert_eq!(m.left, 48.0);
    // keys not supplied keep their defaults
    assert_eq!(m.right, 20.0);
    assert_eq!(m.bottom, 20.0);
}

#[test]
fn unknown_key_is_rejected() {
    let err = Margin::from_entries([("center", 5.0)]).unwrap_err();
    assert!(matches!(err, GraphError::InvalidMargin(_)), "got {err:?}");
    let msg = err.to_string();
    assert!(msg.contains("center"), "message should name the key: {msg}");
}

#[test]
fn non_finite_values_are_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = Margin::from_entries([("top", bad)]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidMargin(_)));

        let err = Margin::new(bad, 0.0, 0.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, GraphError::InvalidMargin(_)));
    }
}

#[test]
fn unknown_key_wins_over_bad_value() {
    // a record can be wrong twice; the key check runs first
    let err = Margin::from_entries([("center", f64::NAN)]).unwrap_err();
    assert!(err.to_string().contains("unknown margin key"));
}
