//! Reference food catalog adapter.
//!
//! The engine only reads from a catalog. Field mapping from any external
//! naming happens in [`import`]; everything downstream sees [`ReferenceFood`].

mod cache;
mod import;
mod memory;

pub use cache::CachedCatalog;
pub use import::{load_catalog, parse_catalog_json, read_catalog_csv};
pub use memory::InMemoryCatalog;

use crate::error::Result;
use crate::models::{FoodId, ReferenceFood};

/// Read-only lookup of reference foods.
pub trait FoodCatalog {
    /// Entries whose name contains `text` (case-insensitive), unmodified.
    ///
    /// The iterator is lazy and single-pass; call again for a fresh lookup.
    fn find_by_query<'a>(&'a self, text: &str) -> Box<dyn Iterator<Item = ReferenceFood> + 'a>;

    /// Fetch one entry, or [`crate::PlanError::FoodNotFound`].
    fn get_by_id(&self, id: &FoodId) -> Result<ReferenceFood>;
}
