use crate::error::DataError;
use ahash::AHashMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;

/// Artifact id -> units on hand.
pub type Inventory = AHashMap<String, u64>;

/// Artifact id -> cumulative crafts performed so far. Drives the discount curve.
pub type CraftCounts = AHashMap<String, u64>;

/// Rounds an untrusted count to a whole, non-negative number.
///
/// NaN, infinities and anything below one half collapse to 0.
pub fn normalize_count(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        0
    } else {
        value.round() as u64
    }
}

/// A player's inventory and craft history, as supplied by the account-data collaborator.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    #[serde(default, deserialize_with = "deserialize_counts")]
    pub inventory: Inventory,
    #[serde(default, deserialize_with = "deserialize_counts")]
    pub craft_counts: CraftCounts,
}

impl PlayerState {
    pub fn new(inventory: Inventory, craft_counts: CraftCounts) -> Self {
        Self {
            inventory,
            craft_counts,
        }
    }

    /// Parses player state from JSON. Negative or fractional counts are normalized, not rejected.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        serde_json::from_str(json).map_err(|e| DataError::JsonParseError(e.to_string()))
    }

    /// Load player state from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DataError> {
        let content = fs::read_to_string(path).map_err(|e| DataError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Get a reference to the inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Get a reference to the craft history.
    pub fn craft_counts(&self) -> &CraftCounts {
        &self.craft_counts
    }
}

fn deserialize_counts<'de, D>(deserializer: D) -> Result<AHashMap<String, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: AHashMap<String, f64> = AHashMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(id, value)| (id, normalize_count(value)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_degenerate_counts() {
        assert_eq!(normalize_count(-3.0), 0);
        assert_eq!(normalize_count(f64::NAN), 0);
        assert_eq!(normalize_count(2.4), 2);
        assert_eq!(normalize_count(2.5), 3);
    }

    #[test]
    fn loads_camel_case_state() {
        let state = PlayerState::from_json(
            r#"{ "inventory": { "ore": 4.6, "dust": -2 }, "craftCounts": { "gem": 12 } }"#,
        )
        .unwrap();
        assert_eq!(state.inventory()["ore"], 5);
        assert_eq!(state.inventory()["dust"], 0);
        assert_eq!(state.craft_counts()["gem"], 12);
    }
}
