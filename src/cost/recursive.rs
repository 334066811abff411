use crate::data::CraftCounts;
use crate::discount::discount;
use crate::error::CraftError;
use crate::recipe::Catalog;
use crate::recipe::visit::VisitStack;

/// Depth-first, post-order cost walk over the ingredient graph.
///
/// Owns its projected craft history; each finished unit build bumps the projection
/// for that artifact before the next sibling build starts.
pub(super) struct RecursiveCost<'a> {
    catalog: &'a Catalog,
    projected: CraftCounts,
    visiting: VisitStack,
}

impl<'a> RecursiveCost<'a> {
    pub(super) fn new(catalog: &'a Catalog, craft_counts: &CraftCounts) -> Self {
        Self {
            catalog,
            projected: craft_counts.clone(),
            visiting: VisitStack::new(),
        }
    }

    /// Cost of building a single unit of `artifact`. Raw materials cost nothing.
    pub(super) fn unit_build(&mut self, artifact: &str) -> Result<f64, CraftError> {
        let Some(recipe) = self.catalog.get(artifact) else {
            return Ok(0.0);
        };

        self.visiting.enter(artifact)?;
        let mut total = 0.0;
        for (ingredient, quantity) in recipe.required_ingredients() {
            if !self.catalog.contains(ingredient) {
                continue;
            }
            for _ in 0..quantity {
                total += self.unit_build(ingredient)?;
            }
        }
        self.visiting.leave();

        let crafts = self.projected.entry(artifact.to_string()).or_insert(0);
        total += discount(recipe.cost, *crafts).unit_cost;
        *crafts += 1;
        Ok(total)
    }
}
