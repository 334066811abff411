use crate::data::{CraftCounts, normalize_count};
use crate::discount::{Discount, discount};
use crate::error::CraftError;
use crate::recipe::{Catalog, Recipe};
use serde::Serialize;

mod recursive;

use recursive::RecursiveCost;

/// Cost of one ingredient line of a recipe, for a single parent craft.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCost {
    pub artifact: String,
    /// Whole units consumed per parent craft.
    pub quantity: u64,
    /// 0 when the ingredient is a raw material.
    pub base_cost: f64,
    pub unit_cost: f64,
    pub discount: f64,
    /// Cost of crafting `quantity` units back to back from the current history.
    pub total_cost: f64,
}

/// Economic diagnostics for one artifact at a planned batch size.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostDetails {
    pub base_cost: f64,
    /// Discounted price of the next craft.
    pub unit_cost: f64,
    /// Fraction saved on the next craft.
    pub discount: f64,
    /// Cost of the whole planned batch, stepping along the curve per unit.
    pub total_direct_cost: f64,
    /// Cost of building one unit entirely from raw materials.
    pub recursive_cost: f64,
    pub ingredients: Vec<IngredientCost>,
}

/// Sums the discounted cost of `quantity` sequential crafts starting at `start_crafts` history.
///
/// `quantity` is rounded to whole crafts; zero or negative batches cost nothing.
pub fn batch_direct_cost(base_cost: f64, start_crafts: u64, quantity: f64) -> f64 {
    let crafts = normalize_count(quantity);
    if crafts == 0 || base_cost <= 0.0 {
        return 0.0;
    }
    (0..crafts)
        .map(|i| discount(base_cost, start_crafts + i).unit_cost)
        .sum()
}

/// Computes discounted, batched, and from-scratch costs against a fixed catalog.
pub struct CostEvaluator<'a> {
    catalog: &'a Catalog,
}

impl<'a> CostEvaluator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Price of the next craft of `artifact` given the current history.
    pub fn unit_cost(&self, artifact: &str, craft_counts: &CraftCounts) -> Discount {
        discount(
            self.catalog.base_cost(artifact),
            crafts_of(craft_counts, artifact),
        )
    }

    /// Full cost report for crafting `planned_count` units of `artifact`.
    ///
    /// Unknown artifacts produce an all-zero report. Fails only if the recursive
    /// expansion runs into a recipe cycle.
    pub fn cost_details(
        &self,
        artifact: &str,
        craft_counts: &CraftCounts,
        planned_count: f64,
    ) -> Result<CostDetails, CraftError> {
        let Some(recipe) = self.catalog.get(artifact) else {
            return Ok(CostDetails::default());
        };

        let crafts = crafts_of(craft_counts, artifact);
        let current = discount(recipe.cost, crafts);

        Ok(CostDetails {
            base_cost: recipe.cost,
            unit_cost: current.unit_cost,
            discount: current.fraction,
            total_direct_cost: batch_direct_cost(recipe.cost, crafts, planned_count),
            recursive_cost: self.recursive_cost(artifact, craft_counts)?,
            ingredients: self.ingredient_costs(recipe, craft_counts),
        })
    }

    /// One level of the ingredient tree: what each input costs for a single parent craft.
    pub fn ingredient_costs(&self, recipe: &Recipe, craft_counts: &CraftCounts) -> Vec<IngredientCost> {
        recipe
            .ingredients
            .iter()
            .map(|(id, quantity)| {
                let base_cost = self.catalog.base_cost(id);
                let crafts = crafts_of(craft_counts, id);
                let current = discount(base_cost, crafts);
                IngredientCost {
                    artifact: id.clone(),
                    quantity: normalize_count(*quantity),
                    base_cost,
                    unit_cost: current.unit_cost,
                    discount: current.fraction,
                    total_cost: batch_direct_cost(base_cost, crafts, *quantity),
                }
            })
            .collect()
    }

    /// Cost of one unit of `artifact` built entirely from raw materials.
    ///
    /// Every intermediate craft advances a projected copy of the history, so repeated
    /// ingredients get progressively cheaper. `craft_counts` itself is never touched.
    pub fn recursive_cost(&self, artifact: &str, craft_counts: &CraftCounts) -> Result<f64, CraftError> {
        RecursiveCost::new(self.catalog, craft_counts).unit_build(artifact)
    }
}

pub(crate) fn crafts_of(craft_counts: &CraftCounts, artifact: &str) -> u64 {
    craft_counts.get(artifact).copied().unwrap_or(0)
}
