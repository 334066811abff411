use serde::Serialize;

/// Cumulative crafts at which the discount curve reaches its floor.
pub const DISCOUNT_HORIZON: f64 = 300.0;
/// Largest fraction of the base cost the curve can take off.
pub const MAX_DISCOUNT: f64 = 0.9;
/// Curve exponent; values below 1 front-load the discount.
pub const DISCOUNT_EXPONENT: f64 = 0.2;

/// The price of one craft after applying craft-history discount.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    /// Whole-unit cost actually paid.
    pub unit_cost: f64,
    /// Fraction of the base cost saved, in `[0, 1]`.
    pub fraction: f64,
}

/// Applies the discount curve to `base_cost` after `crafts_so_far` prior crafts.
///
/// `multiplier = 1 - 0.9 * min(1, crafts / 300)^0.2`, and the unit cost is floored.
pub fn discount(base_cost: f64, crafts_so_far: u64) -> Discount {
    if base_cost <= 0.0 || !base_cost.is_finite() {
        return Discount::default();
    }

    let progress = (crafts_so_far as f64 / DISCOUNT_HORIZON).min(1.0);
    let multiplier = 1.0 - MAX_DISCOUNT * progress.powf(DISCOUNT_EXPONENT);
    let unit_cost = (base_cost * multiplier).floor();

    Discount {
        unit_cost,
        fraction: 1.0 - unit_cost / base_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_history_means_full_price() {
        let d = discount(1000.0, 0);
        assert_eq!(d.unit_cost, 1000.0);
        assert_eq!(d.fraction, 0.0);
    }

    #[test]
    fn saturates_at_horizon() {
        // 1 - 0.9 is not exactly 0.1 in binary, so the floor can land one unit low.
        let floor = discount(1000.0, 300).unit_cost;
        assert!((99.0..=100.0).contains(&floor));
        assert_eq!(discount(1000.0, 5000), discount(1000.0, 300));
    }

    #[test]
    fn free_recipes_stay_free() {
        assert_eq!(discount(0.0, 10), Discount::default());
        assert_eq!(discount(-5.0, 10), Discount::default());
    }
}
