//! Property-based tests for the sparse matrix storage engine.
//!
//! Random write sequences are replayed against both a `Matrix` and a
//! `BTreeMap` model that only keeps non-default values.

use std::collections::BTreeMap;

use infmat::{Matrix, Triple};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

const DEFAULT: i32 = 0;

// ── Strategies ──────────────────────────────────────────────────────────────

/// A write at a small coordinate range so positions collide often, with
/// values that hit the default regularly.
fn arb_write() -> impl Strategy<Value = (i64, i64, i32)> {
    (-6i64..6, -6i64..6, prop_oneof![Just(DEFAULT), -3i32..4])
}

fn apply(writes: &[(i64, i64, i32)]) -> (Matrix<i32>, BTreeMap<(i64, i64), i32>) {
    let mut matrix = Matrix::new(DEFAULT);
    let mut model = BTreeMap::new();
    for &(row, column, value) in writes {
        matrix.access(row, column).assign(value).unwrap();
        if value == DEFAULT {
            model.remove(&(row, column));
        } else {
            model.insert((row, column), value);
        }
    }
    (matrix, model)
}

// ── Property tests ───────────────────────────────────────────────────────────

proptest! {
    /// Iteration matches the model exactly, in row-major order.
    #[test]
    fn iteration_matches_model(writes in prop::collection::vec(arb_write(), 0..200)) {
        let (matrix, model) = apply(&writes);
        let stored: Vec<_> = matrix.iter().map(Triple::into_tuple).collect();
        let expected: Vec<_> = model.iter().map(|(&(r, c), &v)| (r, c, v)).collect();
        prop_assert_eq!(stored, expected);
    }

    /// `size()` always equals the number of iterated triples.
    #[test]
    fn size_matches_iteration(writes in prop::collection::vec(arb_write(), 0..200)) {
        let (matrix, model) = apply(&writes);
        prop_assert_eq!(matrix.size(), model.len());
        prop_assert_eq!(matrix.iter().count(), matrix.size());
        prop_assert_eq!(matrix.iter().len(), matrix.size());
    }

    /// No row is empty and no default value is ever stored.
    #[test]
    fn compaction_invariants_hold(writes in prop::collection::vec(arb_write(), 0..200)) {
        let (matrix, _) = apply(&writes);
        let mut total = 0;
        for row in matrix.rows() {
            prop_assert!(row.size() > 0, "row {} is empty", row.index());
            prop_assert!(row.entries().iter().all(|e| e.read() != DEFAULT));
            total += row.size();
        }
        prop_assert_eq!(total, matrix.size());
    }

    /// Reads never change the stored state.
    #[test]
    fn reads_are_pure(
        writes in prop::collection::vec(arb_write(), 0..100),
        reads in prop::collection::vec((-10i64..10, -10i64..10), 0..50),
    ) {
        let (mut matrix, model) = apply(&writes);
        let before = matrix.clone();
        for (row, column) in reads {
            let expected = model.get(&(row, column)).copied().unwrap_or(DEFAULT);
            prop_assert_eq!(matrix.access(row, column).read(), expected);
            prop_assert_eq!(matrix[(row, column)], expected);
        }
        prop_assert_eq!(matrix, before);
    }

    /// A fresh non-default write grows the size by exactly one.
    #[test]
    fn fresh_write_grows_by_one(
        writes in prop::collection::vec(arb_write(), 0..100),
        row in 10i64..20,
        column in any::<i64>(),
        value in 1i32..100,
    ) {
        let (mut matrix, _) = apply(&writes);
        let size = matrix.size();
        matrix.set(row, column, value).unwrap();
        prop_assert_eq!(matrix.size(), size + 1);
        prop_assert_eq!(matrix.get(row, column), value);

        matrix.set(row, column, DEFAULT).unwrap();
        prop_assert_eq!(matrix.size(), size);
        prop_assert!(matrix.row(row).is_none());
    }
}

// ── Randomized churn ────────────────────────────────────────────────────────

#[test]
fn random_churn_drains_to_empty() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut matrix = Matrix::new(-1i64);
    let mut written = Vec::new();

    for _ in 0..2_000 {
        let row = rng.gen_range(-50..50);
        let column = rng.gen_range(-50..50);
        let value = rng.gen_range(0..1_000);
        matrix.set(row, column, value).unwrap();
        written.push((row, column));
    }
    assert!(matrix.size() <= written.len());

    for (row, column) in written {
        matrix.set(row, column, -1).unwrap();
    }
    assert!(matrix.is_empty());
    assert_eq!(matrix.row_count(), 0);
    assert_eq!(matrix.begin(), matrix.end());
}
