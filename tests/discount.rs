//! Tests for the discount curve and batched direct costs.
mod common;
use craftplan::prelude::*;

#[test]
fn test_discount_follows_curve() {
    let expected = [100.0, 71.0, 66.0, 64.0, 62.0, 60.0];
    for (crafts, unit) in expected.iter().enumerate() {
        assert_eq!(discount(100.0, crafts as u64).unit_cost, *unit, "crafts = {}", crafts);
    }
    let d = discount(100.0, 1);
    assert!((d.fraction - 0.29).abs() < 1e-9);
}

#[test]
fn test_discount_floor_after_horizon() {
    // 100 * (1 - 0.9) lands just below 10 in floating point.
    assert_eq!(discount(100.0, 300).unit_cost, 9.0);
    assert_eq!(discount(100.0, 300), discount(100.0, 10_000));
}

#[test]
fn test_batch_direct_cost_steps_along_curve() {
    assert_eq!(batch_direct_cost(100.0, 0, 3.0), 100.0 + 71.0 + 66.0);
    assert_eq!(batch_direct_cost(100.0, 2, 2.0), 66.0 + 64.0);
}

#[test]
fn test_batch_direct_cost_degenerate_inputs() {
    assert_eq!(batch_direct_cost(100.0, 0, 0.0), 0.0);
    assert_eq!(batch_direct_cost(100.0, 0, -4.0), 0.0);
    assert_eq!(batch_direct_cost(0.0, 0, 5.0), 0.0);
    // Fractional quantities are rounded to whole crafts.
    assert_eq!(batch_direct_cost(100.0, 0, 1.6), 100.0 + 71.0);
    assert_eq!(batch_direct_cost(100.0, 0, 0.4), 0.0);
}
