use crate::cost::{CostDetails, CostEvaluator};
use crate::data::{CraftCounts, Inventory};
use crate::error::{CraftError, OptimizeError, SolverError};
use crate::problem::{Problem, ProblemBuilder};
use crate::recipe::{Catalog, Recipe};
use crate::simulator::{CraftSimulator, DEFAULT_MAX_CRAFTS, ModeComparison, SimulationLimits};
use crate::solver::{Columns, Solver, validate_columns};
use serde::Serialize;
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Knobs for a planning run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizerConfig {
    /// Upper bound on crafts per mode-comparison simulation.
    pub max_simulated_crafts: u64,
    /// When false, `ArtifactPlan::modes` is left empty and no simulation runs.
    pub compare_modes: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_simulated_crafts: DEFAULT_MAX_CRAFTS,
            compare_modes: true,
        }
    }
}

/// The solved plan and diagnostics for one artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactPlan {
    pub artifact: String,
    /// Crafts chosen by the solver. Fractional only if the solver relaxed integrality.
    pub count: f64,
    pub xp: f64,
    pub cost: f64,
    /// 0 when the plan costs nothing.
    pub xp_per_cost: f64,
    pub cost_details: CostDetails,
    pub modes: Option<ModeComparison>,
}

/// The complete result of one optimization call.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// One entry per solved catalog artifact, in lexicographic order.
    pub artifacts: Vec<ArtifactPlan>,
    pub total_xp: f64,
    pub total_cost: f64,
}

impl Solution {
    pub fn get(&self, artifact: &str) -> Option<&ArtifactPlan> {
        self.artifacts.iter().find(|p| p.artifact == artifact)
    }

    /// Artifacts the plan actually crafts.
    pub fn planned(&self) -> impl Iterator<Item = &ArtifactPlan> {
        self.artifacts.iter().filter(|p| p.count > 0.0)
    }
}

/// Orchestrates problem building, the solver round trip, and per-artifact reporting.
pub struct Optimizer<'a> {
    catalog: &'a Catalog,
    solver: Box<dyn Solver + 'a>,
    config: OptimizerConfig,
}

pub struct OptimizerBuilder<'a> {
    catalog: &'a Catalog,
    solver: Box<dyn Solver + 'a>,
    config: OptimizerConfig,
}

impl<'a> OptimizerBuilder<'a> {
    pub fn new(catalog: &'a Catalog, solver: impl Solver + 'a) -> Self {
        Self {
            catalog,
            solver: Box::new(solver),
            config: OptimizerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: OptimizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_max_simulated_crafts(mut self, max_crafts: u64) -> Self {
        self.config.max_simulated_crafts = max_crafts;
        self
    }

    pub fn without_mode_comparison(mut self) -> Self {
        self.config.compare_modes = false;
        self
    }

    pub fn build(self) -> Optimizer<'a> {
        Optimizer {
            catalog: self.catalog,
            solver: self.solver,
            config: self.config,
        }
    }
}

impl<'a> Optimizer<'a> {
    pub fn builder(catalog: &'a Catalog, solver: impl Solver + 'a) -> OptimizerBuilder<'a> {
        OptimizerBuilder::new(catalog, solver)
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// The problem that `optimize` would send to the solver.
    pub fn problem(&self, inventory: &Inventory) -> Problem {
        ProblemBuilder::new(self.catalog, inventory).build()
    }

    /// Solves for the XP-maximizing craft counts and reports costs for each artifact.
    ///
    /// Neither `inventory` nor `craft_counts` is modified. Solver failures and invalid
    /// solver output surface as `OptimizeError::Solver`; a recipe cycle met while
    /// costing or simulating surfaces as `OptimizeError::Craft`.
    pub fn optimize(
        &self,
        inventory: &Inventory,
        craft_counts: &CraftCounts,
    ) -> Result<Solution, OptimizeError> {
        let problem = self.problem(inventory).to_string();
        let columns = self.solver.solve(&problem)?;
        validate_columns(&columns)?;
        debug!(columns = columns.len(), "solver returned");

        let solved = self.pair_with_catalog(&columns);
        if solved.is_empty() {
            return Err(SolverError::EmptyResponse.into());
        }

        let planner = ArtifactPlanner {
            catalog: self.catalog,
            config: self.config,
            inventory,
            craft_counts,
        };

        #[cfg(feature = "parallel")]
        let rows: Vec<Result<ArtifactPlan, CraftError>> = solved
            .par_iter()
            .map(|(id, recipe, count)| planner.plan(id, recipe, *count))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let rows: Vec<Result<ArtifactPlan, CraftError>> = solved
            .iter()
            .map(|(id, recipe, count)| planner.plan(id, recipe, *count))
            .collect();

        let artifacts = rows.into_iter().collect::<Result<Vec<_>, _>>()?;
        let total_xp = artifacts.iter().map(|p| p.xp).sum();
        let total_cost = artifacts.iter().map(|p| p.cost).sum();

        Ok(Solution {
            artifacts,
            total_xp,
            total_cost,
        })
    }

    /// Solved columns that name a catalog artifact, in lexicographic order.
    fn pair_with_catalog<'c>(&'c self, columns: &Columns) -> Vec<(&'c str, &'c Recipe, f64)> {
        for id in columns.keys().filter(|id| !self.catalog.contains(id.as_str())) {
            warn!(artifact = %id, "solver returned a column for an unknown artifact");
        }
        self.catalog
            .iter_sorted()
            .filter_map(|(id, recipe)| columns.get(id).map(|c| (id, recipe, c.primal_value)))
            .collect()
    }
}

/// Read-only context for building one `ArtifactPlan` row.
struct ArtifactPlanner<'a> {
    catalog: &'a Catalog,
    config: OptimizerConfig,
    inventory: &'a Inventory,
    craft_counts: &'a CraftCounts,
}

impl ArtifactPlanner<'_> {
    fn plan(&self, artifact: &str, recipe: &Recipe, count: f64) -> Result<ArtifactPlan, CraftError> {
        let cost_details =
            CostEvaluator::new(self.catalog).cost_details(artifact, self.craft_counts, count)?;
        let xp = count * recipe.xp;
        let cost = cost_details.total_direct_cost;

        let modes = if self.config.compare_modes {
            let simulator = CraftSimulator::new(self.catalog).with_limits(SimulationLimits {
                max_crafts: self.config.max_simulated_crafts,
            });
            Some(simulator.compare_modes(self.inventory, self.craft_counts, artifact)?)
        } else {
            None
        };

        Ok(ArtifactPlan {
            artifact: artifact.to_string(),
            count,
            xp,
            cost,
            xp_per_cost: if cost > 0.0 { xp / cost } else { 0.0 },
            cost_details,
            modes,
        })
    }
}

/// One-shot convenience wrapper around [`Optimizer`] with default settings.
pub fn optimize_crafts<'a, S: Solver + 'a>(
    solver: S,
    catalog: &'a Catalog,
    inventory: &Inventory,
    craft_counts: &CraftCounts,
) -> Result<Solution, OptimizeError> {
    Optimizer::builder(catalog, solver)
        .build()
        .optimize(inventory, craft_counts)
}
