use super::{Constraint, Problem, Term};
use crate::data::Inventory;
use crate::recipe::Catalog;
use std::collections::BTreeMap;
use tracing::debug;

/// Translates a recipe catalog plus inventory into a [`Problem`].
///
/// Output is a pure function of the inputs: variables, constraints, and the terms inside
/// each constraint all follow lexicographic artifact order.
pub struct ProblemBuilder<'a> {
    catalog: &'a Catalog,
    inventory: &'a Inventory,
}

impl<'a> ProblemBuilder<'a> {
    pub fn new(catalog: &'a Catalog, inventory: &'a Inventory) -> Self {
        Self { catalog, inventory }
    }

    pub fn build(&self) -> Problem {
        let mut objective = Vec::with_capacity(self.catalog.len());
        let mut variables = Vec::with_capacity(self.catalog.len());
        // consumed artifact -> (parent, quantity per parent craft)
        let mut consumers: BTreeMap<&str, Vec<Term>> = BTreeMap::new();

        for (id, recipe) in self.catalog.iter_sorted() {
            objective.push(Term::new(recipe.xp, id));
            variables.push(id.to_string());
            for (ingredient, quantity) in &recipe.ingredients {
                consumers
                    .entry(ingredient.as_str())
                    .or_default()
                    .push(Term::new(*quantity, id));
            }
        }

        let constraints: Vec<Constraint> = consumers
            .into_iter()
            .map(|(artifact, mut terms)| {
                if self.catalog.contains(artifact) {
                    terms.push(Term::new(-1.0, artifact));
                }
                Constraint {
                    artifact: artifact.to_string(),
                    terms,
                    rhs: self.inventory.get(artifact).copied().unwrap_or(0),
                }
            })
            .collect();

        debug!(
            variables = variables.len(),
            constraints = constraints.len(),
            "built crafting problem"
        );

        Problem {
            objective,
            constraints,
            variables,
        }
    }
}
