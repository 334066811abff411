//! Property-based tests for the discount curve and the crafting policies.
mod common;
use common::*;
use craftplan::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn discount_never_increases_with_history(base in 1u32..100_000, crafts in 0u64..400) {
        let base = base as f64;
        prop_assert!(discount(base, crafts + 1).unit_cost <= discount(base, crafts).unit_cost);
    }

    #[test]
    fn discount_is_free_with_no_history(base in 1u32..100_000) {
        let d = discount(base as f64, 0);
        prop_assert_eq!(d.unit_cost, base as f64);
        prop_assert_eq!(d.fraction, 0.0);
    }

    #[test]
    fn discount_fraction_stays_in_range(base in 1u32..100_000, crafts in 0u64..1_000) {
        let d = discount(base as f64, crafts);
        prop_assert!((0.0..=1.0).contains(&d.fraction));
        prop_assert!(d.unit_cost >= 0.0);
    }

    #[test]
    fn batch_cost_is_sum_of_unit_costs(base in 1u32..10_000, start in 0u64..400, quantity in 0u64..50) {
        let base = base as f64;
        let expected: f64 = (0..quantity).map(|i| discount(base, start + i).unit_cost).sum();
        prop_assert_eq!(batch_direct_cost(base, start, quantity as f64), expected);
    }

    #[test]
    fn auto_craft_never_yields_fewer(ore in 0u64..60, shard in 0u64..6, gem_history in 0u64..50) {
        let catalog = create_gem_catalog();
        let simulator = CraftSimulator::new(&catalog);
        let inventory = counts(&[("ore", ore), ("shard", shard)]);
        let history = counts(&[("gem", gem_history)]);

        let comparison = simulator.compare_modes(&inventory, &history, "gem").unwrap();
        let auto = comparison.auto.unwrap();
        prop_assert!(auto.count >= comparison.direct.count);
    }
}
