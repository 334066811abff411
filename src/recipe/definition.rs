use crate::data::normalize_count;
use crate::error::CatalogError;
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

/// XP yield, base cost, and ingredient requirements for crafting one unit of an artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub xp: f64,
    #[serde(default)]
    pub cost: f64,
    /// Ingredient id -> quantity consumed per craft. Ordered so every walk over it is deterministic.
    #[serde(default)]
    pub ingredients: BTreeMap<String, f64>,
}

impl Recipe {
    pub fn new(xp: f64, cost: f64) -> Self {
        Self {
            xp,
            cost,
            ingredients: BTreeMap::new(),
        }
    }

    pub fn with_ingredient(mut self, artifact: &str, quantity: f64) -> Self {
        self.ingredients.insert(artifact.to_string(), quantity);
        self
    }

    /// Ingredients paired with their whole-unit requirement per craft.
    pub fn required_ingredients(&self) -> impl Iterator<Item = (&str, u64)> {
        self.ingredients
            .iter()
            .map(|(id, quantity)| (id.as_str(), normalize_count(*quantity)))
    }
}

/// The immutable recipe table every planning component reads from.
///
/// A catalog is an explicit value rather than ambient state, so test fixtures and
/// production tables can live side by side. Ingredients that have no entry here are
/// treated as raw materials: free, and never expanded further.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    recipes: AHashMap<String, Recipe>,
}

impl Catalog {
    /// Builds a catalog, rejecting recipes that carry NaN or infinite numbers.
    pub fn new<I, S>(recipes: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (S, Recipe)>,
        S: Into<String>,
    {
        let recipes: AHashMap<String, Recipe> = recipes
            .into_iter()
            .map(|(id, recipe)| (id.into(), recipe))
            .collect();

        for (id, recipe) in &recipes {
            Self::check_finite(id, "xp", recipe.xp)?;
            Self::check_finite(id, "cost", recipe.cost)?;
            for (ingredient, quantity) in &recipe.ingredients {
                Self::check_finite(id, &format!("quantity of '{}'", ingredient), *quantity)?;
            }
        }

        Ok(Self { recipes })
    }

    /// Parses a catalog from its canonical JSON form: `{ "<id>": { "xp", "cost", "ingredients" } }`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: AHashMap<String, Recipe> =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        Self::new(recipes)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn get(&self, artifact: &str) -> Option<&Recipe> {
        self.recipes.get(artifact)
    }

    pub fn contains(&self, artifact: &str) -> bool {
        self.recipes.contains_key(artifact)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Base cost of an artifact, 0 for raw materials.
    pub fn base_cost(&self, artifact: &str) -> f64 {
        self.recipes.get(artifact).map_or(0.0, |r| r.cost)
    }

    /// All recipes in lexicographic id order.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, &Recipe)> {
        self.recipes
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(id, recipe)| (id.as_str(), recipe))
    }

    /// True when at least one ingredient of `artifact` is itself craftable.
    pub fn has_craftable_ingredient(&self, artifact: &str) -> bool {
        self.recipes
            .get(artifact)
            .is_some_and(|r| r.ingredients.keys().any(|id| self.contains(id)))
    }

    fn check_finite(artifact: &str, field: &str, value: f64) -> Result<(), CatalogError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(CatalogError::NonFiniteNumber {
                artifact: artifact.to_string(),
                field: field.to_string(),
                value,
            })
        }
    }
}
