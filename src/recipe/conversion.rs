use super::definition::{Catalog, Recipe};
use crate::error::CatalogError;
use ahash::{AHashMap, AHashSet};

/// A trait for custom catalog formats that can be converted into a `Catalog`.
///
/// Game data dumps rarely arrive in the canonical `{ id: recipe }` shape. Implement this
/// on your own deserialized structs to provide the translation layer.
///
/// # Example
///
/// ```rust,no_run
/// use craftplan::error::CatalogError;
/// use craftplan::recipe::{Catalog, IntoCatalog, Recipe};
///
/// struct DumpEntry { name: String, xp: f64, price: f64 }
/// struct Dump { entries: Vec<DumpEntry> }
///
/// impl IntoCatalog for Dump {
///     fn into_catalog(self) -> Result<Catalog, CatalogError> {
///         Catalog::new(
///             self.entries
///                 .into_iter()
///                 .map(|e| (e.name, Recipe::new(e.xp, e.price))),
///         )
///     }
/// }
/// ```
pub trait IntoCatalog {
    /// Consumes the object and converts it into a validated catalog.
    fn into_catalog(self) -> Result<Catalog, CatalogError>;
}

impl IntoCatalog for AHashMap<String, Recipe> {
    fn into_catalog(self) -> Result<Catalog, CatalogError> {
        Catalog::new(self)
    }
}

impl IntoCatalog for Vec<(String, Recipe)> {
    fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let mut seen = AHashSet::with_capacity(self.len());
        for (id, _) in &self {
            if !seen.insert(id.as_str()) {
                return Err(CatalogError::ValidationError(format!(
                    "artifact '{}' is defined more than once",
                    id
                )));
            }
        }
        Catalog::new(self)
    }
}
