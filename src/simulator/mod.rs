use crate::data::{CraftCounts, Inventory};
use crate::discount::discount;
use crate::error::CraftError;
use crate::recipe::visit::VisitStack;
use crate::recipe::{Catalog, Recipe};
use serde::Serialize;
use tracing::{trace, warn};

/// Default cap on crafts per simulation. Recipes without ingredients never run out.
pub const DEFAULT_MAX_CRAFTS: u64 = 10_000;

/// How missing ingredients are handled during a craft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CraftMode {
    /// Only materials already on hand may be consumed.
    Direct,
    /// Missing craftable ingredients are crafted recursively first.
    Auto,
}

impl CraftMode {
    fn allows_autocraft(self) -> bool {
        matches!(self, CraftMode::Auto)
    }
}

/// Bounds applied to a single simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationLimits {
    pub max_crafts: u64,
}

impl Default for SimulationLimits {
    fn default() -> Self {
        Self {
            max_crafts: DEFAULT_MAX_CRAFTS,
        }
    }
}

/// A private, mutable snapshot of the world a simulation crafts against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CraftState {
    pub inventory: Inventory,
    pub craft_counts: CraftCounts,
    /// Discounted cost paid for every successful craft so far, intermediates included.
    pub spent: f64,
}

impl CraftState {
    pub fn new(inventory: Inventory, craft_counts: CraftCounts) -> Self {
        Self {
            inventory,
            craft_counts,
            spent: 0.0,
        }
    }

    pub fn on_hand(&self, artifact: &str) -> u64 {
        self.inventory.get(artifact).copied().unwrap_or(0)
    }
}

/// Result of crafting one artifact repeatedly until materials run out.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeOutcome {
    pub count: u64,
    pub cost: f64,
    /// True when the run stopped at the craft limit rather than on missing materials.
    pub limited: bool,
}

/// Direct-only versus auto-craft yield for one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeComparison {
    pub direct: ModeOutcome,
    /// `None` when no ingredient is craftable, since auto mode would equal direct mode.
    pub auto: Option<ModeOutcome>,
}

/// Greedy crafting engine used to compare crafting policies.
pub struct CraftSimulator<'a> {
    catalog: &'a Catalog,
    limits: SimulationLimits,
}

impl<'a> CraftSimulator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            limits: SimulationLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: SimulationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Attempts exactly one craft of `artifact`.
    ///
    /// Returns `Ok(false)` when materials are insufficient. A failed direct craft leaves
    /// `state` untouched; a failed auto craft keeps any intermediates it already made,
    /// along with their cost. A recipe cycle aborts with `CraftError::CycleDetected`.
    pub fn craft_one(
        &self,
        state: &mut CraftState,
        artifact: &str,
        mode: CraftMode,
    ) -> Result<bool, CraftError> {
        self.try_craft(state, artifact, mode, &mut VisitStack::new())
    }

    /// Crafts `artifact` from a private copy of the inputs until a craft fails.
    pub fn simulate_craft_mode(
        &self,
        inventory: &Inventory,
        craft_counts: &CraftCounts,
        artifact: &str,
        mode: CraftMode,
    ) -> Result<ModeOutcome, CraftError> {
        let mut state = CraftState::new(inventory.clone(), craft_counts.clone());
        let mut count = 0;
        while count < self.limits.max_crafts {
            if !self.craft_one(&mut state, artifact, mode)? {
                break;
            }
            count += 1;
        }

        let limited = count >= self.limits.max_crafts;
        if limited {
            warn!(
                artifact,
                ?mode,
                max_crafts = self.limits.max_crafts,
                "simulation stopped at the craft limit"
            );
        }

        Ok(ModeOutcome {
            count,
            cost: state.spent,
            limited,
        })
    }

    /// Runs both policies for `artifact`. Auto mode is skipped when it cannot differ.
    pub fn compare_modes(
        &self,
        inventory: &Inventory,
        craft_counts: &CraftCounts,
        artifact: &str,
    ) -> Result<ModeComparison, CraftError> {
        let direct = self.simulate_craft_mode(inventory, craft_counts, artifact, CraftMode::Direct)?;
        let auto = if self.catalog.has_craftable_ingredient(artifact) {
            Some(self.simulate_craft_mode(inventory, craft_counts, artifact, CraftMode::Auto)?)
        } else {
            None
        };
        Ok(ModeComparison { direct, auto })
    }

    fn try_craft(
        &self,
        state: &mut CraftState,
        artifact: &str,
        mode: CraftMode,
        visiting: &mut VisitStack,
    ) -> Result<bool, CraftError> {
        let Some(recipe) = self.catalog.get(artifact) else {
            return Ok(false);
        };

        visiting.enter(artifact)?;
        let gathered = self.gather_ingredients(state, recipe, mode, visiting);
        visiting.leave();
        if !gathered? {
            return Ok(false);
        }
        // An ingredient crafted later may have used up one gathered earlier; floor at 0.
        for (ingredient, required) in recipe.required_ingredients() {
            if let Some(held) = state.inventory.get_mut(ingredient) {
                *held = held.saturating_sub(required);
            }
        }

        let crafts = state.craft_counts.entry(artifact.to_string()).or_insert(0);
        let price = discount(recipe.cost, *crafts).unit_cost;
        state.spent += price;
        *crafts += 1;
        let history = *crafts;
        *state.inventory.entry(artifact.to_string()).or_insert(0) += 1;

        trace!(artifact, price, history, "crafted");
        Ok(true)
    }

    /// Makes every ingredient available in the required quantity, crafting when allowed.
    fn gather_ingredients(
        &self,
        state: &mut CraftState,
        recipe: &Recipe,
        mode: CraftMode,
        visiting: &mut VisitStack,
    ) -> Result<bool, CraftError> {
        for (ingredient, required) in recipe.required_ingredients() {
            while state.on_hand(ingredient) < required {
                if !mode.allows_autocraft() || !self.catalog.contains(ingredient) {
                    return Ok(false);
                }
                if !self.try_craft(state, ingredient, mode, visiting)? {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}
