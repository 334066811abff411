//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the craftplan crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use craftplan::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Catalog::from_file("path/to/catalog.json")?;
//! let state = PlayerState::from_file("path/to/player.json")?;
//! let solver = PrecomputedSolver::from_file("path/to/columns.json")?;
//!
//! let solution = optimize_crafts(solver, &catalog, state.inventory(), state.craft_counts())?;
//! println!("Total XP: {}", solution.total_xp);
//! # Ok(())
//! # }
//! ```

// Planning
pub use crate::optimizer::{
    ArtifactPlan, Optimizer, OptimizerBuilder, OptimizerConfig, Solution, optimize_crafts,
};
pub use crate::problem::{Problem, ProblemBuilder, build_problem};
pub use crate::solver::{Column, Columns, CommandSolver, PrecomputedSolver, Solver, SolverResponse};

// Cost model and simulation
pub use crate::cost::{CostDetails, CostEvaluator, IngredientCost, batch_direct_cost};
pub use crate::discount::{Discount, discount};
pub use crate::simulator::{
    CraftMode, CraftSimulator, CraftState, ModeComparison, ModeOutcome, SimulationLimits,
};

// Data structures
pub use crate::data::{CraftCounts, Inventory, PlayerState};
pub use crate::recipe::{Catalog, IntoCatalog, Recipe};

// Error types
pub use crate::error::{CatalogError, CraftError, DataError, OptimizeError, SolverError};

// Report formatting
pub use crate::report::SolutionFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
