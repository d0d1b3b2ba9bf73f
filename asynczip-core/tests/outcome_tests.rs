// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use asynczip_core::{Fetched, Outcome, Row, ZipError};

#[test]
fn test_outcome_value_predicates() {
    let outcome: Outcome<i32> = Outcome::Value(42);
    assert!(outcome.is_value());
    assert!(!outcome.is_pending());
    assert!(!outcome.is_exhausted());
    assert!(!outcome.is_failed());
}

#[test]
fn test_outcome_value_accessors() {
    let outcome = Outcome::Value(42);
    assert_eq!(outcome.value(), Some(&42));
    assert_eq!(outcome.into_value(), Some(42));
}

#[test]
fn test_outcome_pending_has_no_value() {
    let outcome: Outcome<i32> = Outcome::Pending;
    assert!(outcome.is_pending());
    assert_eq!(outcome.value(), None);
    assert_eq!(outcome.into_value(), None);
}

#[test]
fn test_outcome_failed_exposes_error() {
    let outcome: Outcome<i32> = Outcome::Failed(ZipError::fetch_failed("boom"));
    assert!(outcome.is_failed());
    assert!(outcome.error().is_some());
}

#[test]
fn test_outcome_map_transforms_value_only() {
    assert_eq!(Outcome::Value(5).map(|x| x * 2), Outcome::Value(10));
    assert_eq!(Outcome::<i32>::Pending.map(|x| x * 2), Outcome::Pending);
    assert_eq!(Outcome::<i32>::Exhausted.map(|x| x * 2), Outcome::Exhausted);
}

#[test]
fn test_outcome_failures_never_compare_equal() {
    let a: Outcome<i32> = Outcome::Failed(ZipError::fetch_failed("boom"));
    let b: Outcome<i32> = Outcome::Failed(ZipError::fetch_failed("boom"));
    assert_ne!(a, b);
}

#[test]
fn test_fetched_predicates() {
    assert!(Fetched::Value(1).is_value());
    assert!(Fetched::<i32>::Exhausted.is_exhausted());
    assert!(Fetched::<i32>::Failed(ZipError::fetch_failed("boom")).is_failed());
}

#[test]
fn test_fetched_ok_extracts_value() {
    assert_eq!(Fetched::Value(7).ok(), Some(7));
    assert_eq!(Fetched::<i32>::Exhausted.ok(), None);
}

#[test]
fn test_fetched_map_passes_exhaustion_through() {
    assert_eq!(
        Fetched::<i32>::Exhausted.map(|x| x + 1),
        Fetched::Exhausted
    );
    assert_eq!(Fetched::Value(1).map(|x| x + 1), Fetched::Value(2));
}

#[test]
fn test_row_preserves_input_order() {
    let row = Row::new(vec![Outcome::Value('a'), Outcome::Pending, Outcome::Exhausted]);
    assert_eq!(row.len(), 3);
    assert_eq!(row[0], Outcome::Value('a'));
    assert_eq!(row[1], Outcome::Pending);
    assert_eq!(row[2], Outcome::Exhausted);
}

#[test]
fn test_row_get_is_bounds_checked() {
    let row = Row::new(vec![Outcome::Value(1)]);
    assert!(row.get(0).is_some());
    assert!(row.get(1).is_none());
}

#[test]
fn test_row_iteration_matches_outcomes() {
    let row = Row::new(vec![Outcome::Value(1), Outcome::Value(2)]);
    let values: Vec<i32> = row.into_iter().filter_map(Outcome::into_value).collect();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn test_empty_row() {
    let row: Row<i32> = Row::new(vec![]);
    assert!(row.is_empty());
    assert_eq!(row.len(), 0);
}
