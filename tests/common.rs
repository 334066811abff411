//! Common test utilities for building catalogs and player state.
use craftplan::prelude::*;

/// A single artifact with no ingredients.
///
/// `A`: 10 xp, base cost 100
#[allow(dead_code)]
pub fn create_single_catalog() -> Catalog {
    Catalog::new([("A".to_string(), Recipe::new(10.0, 100.0))]).unwrap()
}

/// One artifact made from a raw material.
///
/// `A`: 5 xp, free, needs 2 `raw`
#[allow(dead_code)]
pub fn create_raw_catalog() -> Catalog {
    Catalog::new([(
        "A".to_string(),
        Recipe::new(5.0, 0.0).with_ingredient("raw", 2.0),
    )])
    .unwrap()
}

/// A two-level recipe tree.
///
/// `gem`: 5 xp, cost 100, needs 2 `shard` + 1 `ore`
/// `shard`: 1 xp, cost 50, needs 3 `ore`
/// `ore` is raw.
#[allow(dead_code)]
pub fn create_gem_catalog() -> Catalog {
    Catalog::new([
        (
            "gem".to_string(),
            Recipe::new(5.0, 100.0)
                .with_ingredient("shard", 2.0)
                .with_ingredient("ore", 1.0),
        ),
        (
            "shard".to_string(),
            Recipe::new(1.0, 50.0).with_ingredient("ore", 3.0),
        ),
    ])
    .unwrap()
}

/// A malformed catalog where `A` and `B` require each other.
#[allow(dead_code)]
pub fn create_cyclic_catalog() -> Catalog {
    Catalog::new([
        ("A".to_string(), Recipe::new(1.0, 10.0).with_ingredient("B", 1.0)),
        ("B".to_string(), Recipe::new(1.0, 10.0).with_ingredient("A", 1.0)),
    ])
    .unwrap()
}

/// Builds an inventory or craft-count map from literal pairs.
#[allow(dead_code)]
pub fn counts(pairs: &[(&str, u64)]) -> Inventory {
    pairs
        .iter()
        .map(|(id, n)| (id.to_string(), *n))
        .collect()
}

/// Builds solver columns from literal pairs.
#[allow(dead_code)]
pub fn columns(pairs: &[(&str, f64)]) -> Columns {
    pairs
        .iter()
        .map(|(id, v)| (id.to_string(), Column::new(*v)))
        .collect()
}

/// A solver that ignores the problem and always answers with the same columns.
#[allow(dead_code)]
pub fn fixed_solver(
    pairs: &[(&str, f64)],
) -> impl Fn(&str) -> std::result::Result<Columns, SolverError> {
    let solved = columns(pairs);
    move |_| Ok(solved.clone())
}

/// A solver that always fails with `error`.
#[allow(dead_code)]
pub fn failing_solver(
    error: SolverError,
) -> impl Fn(&str) -> std::result::Result<Columns, SolverError> {
    move |_| Err(error.clone())
}
