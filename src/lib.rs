//! # Craftplan - Artifact Crafting Planner
//!
//! **Craftplan** decides how many of each craftable artifact to produce so that total XP is
//! maximized under the materials a player owns, and reports what those crafts really cost
//! once the craft-history discount curve is taken into account.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Parse a [`recipe::Catalog`] (artifact -> xp, cost, ingredients) and a
//!     [`data::PlayerState`] (inventory plus per-artifact craft history). Custom catalog formats
//!     plug in through the [`recipe::IntoCatalog`] trait.
//! 2.  **Build the Problem**: [`problem::ProblemBuilder`] turns the catalog and inventory into an
//!     integer program in LP text form.
//! 3.  **Solve**: Any [`solver::Solver`] implementation solves it. The crate ships a
//!     [`solver::CommandSolver`] that pipes the problem through an external program, and a
//!     [`solver::PrecomputedSolver`] for replaying saved results.
//! 4.  **Report**: [`optimizer::Optimizer`] pairs every solved count with a
//!     [`cost::CostDetails`] breakdown and a direct-versus-auto-craft comparison from the
//!     [`simulator::CraftSimulator`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use craftplan::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let catalog = Catalog::new([
//!         ("gem".to_string(), Recipe::new(5.0, 40.0).with_ingredient("ore", 2.0)),
//!     ])?;
//!     let state = PlayerState::from_file("player.json")?;
//!
//!     let optimizer = Optimizer::builder(&catalog, CommandSolver::new("lp-solve-json")).build();
//!     let solution = optimizer.optimize(state.inventory(), state.craft_counts())?;
//!
//!     println!("{}", SolutionFormatter::format_table(&solution));
//!     Ok(())
//! }
//! ```

pub mod cost;
pub mod data;
pub mod discount;
pub mod error;
pub mod optimizer;
pub mod prelude;
pub mod problem;
pub mod recipe;
pub mod report;
pub mod simulator;
pub mod solver;
