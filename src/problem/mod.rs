//! The integer program handed to the external solver.
//!
//! A [`Problem`] is built from the catalog and inventory by [`ProblemBuilder`] and rendered
//! through `Display` into the LP dialect the solver reads:
//!
//! ```text
//! Maximize
//! obj: 5 A + 3 B
//! Subject To
//! c_B: 2 A - 1 B <= 4
//! c_ore: 3 B <= 10
//! Bounds
//! A >= 0
//! B >= 0
//! General
//! A B
//! End
//! ```

use crate::data::Inventory;
use crate::recipe::Catalog;
use std::fmt;

mod builder;

pub use builder::ProblemBuilder;

/// A single `<coefficient> <variable>` monomial.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub variable: String,
}

impl Term {
    pub fn new(coefficient: f64, variable: &str) -> Self {
        Self {
            coefficient,
            variable: variable.to_string(),
        }
    }
}

/// `c_<artifact>: <consumption> [- 1 <artifact>] <= <on hand>`
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// The artifact whose supply this row balances.
    pub artifact: String,
    pub terms: Vec<Term>,
    pub rhs: u64,
}

impl Constraint {
    pub fn name(&self) -> String {
        format!("c_{}", self.artifact)
    }
}

/// Maximize total XP subject to per-artifact resource balance, all variables
/// non-negative integers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Problem {
    pub objective: Vec<Term>,
    pub constraints: Vec<Constraint>,
    /// Decision variables in lexicographic order, one per catalog entry.
    pub variables: Vec<String>,
}

impl Problem {
    pub fn constraint(&self, artifact: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.artifact == artifact)
    }
}

/// Builds the solver input text for `catalog` and `inventory`.
pub fn build_problem(catalog: &Catalog, inventory: &Inventory) -> String {
    ProblemBuilder::new(catalog, inventory).build().to_string()
}

fn write_expression(f: &mut fmt::Formatter<'_>, terms: &[Term]) -> fmt::Result {
    for (i, term) in terms.iter().enumerate() {
        let negative = term.coefficient < 0.0;
        let magnitude = term.coefficient.abs();
        match (i, negative) {
            (0, false) => write!(f, "{} {}", magnitude, term.variable)?,
            (0, true) => write!(f, "-{} {}", magnitude, term.variable)?,
            (_, false) => write!(f, " + {} {}", magnitude, term.variable)?,
            (_, true) => write!(f, " - {} {}", magnitude, term.variable)?,
        }
    }
    Ok(())
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maximize")?;
        write!(f, "obj: ")?;
        write_expression(f, &self.objective)?;
        writeln!(f)?;

        writeln!(f, "Subject To")?;
        for constraint in &self.constraints {
            write!(f, "{}: ", constraint.name())?;
            write_expression(f, &constraint.terms)?;
            writeln!(f, " <= {}", constraint.rhs)?;
        }

        writeln!(f, "Bounds")?;
        for variable in &self.variables {
            writeln!(f, "{} >= 0", variable)?;
        }

        writeln!(f, "General")?;
        writeln!(f, "{}", self.variables.join(" "))?;
        write!(f, "End")
    }
}
