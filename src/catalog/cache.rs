use std::cell::RefCell;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::{FoodId, ReferenceFood};

struct CacheEntry {
    food: ReferenceFood,
    fetched_at: Instant,
}

/// Id-lookup cache in front of another catalog.
///
/// Owned by whoever constructs it; entries expire after `ttl` and can be
/// dropped early with [`invalidate`](Self::invalidate) or [`clear`](Self::clear).
/// Queries always go to the inner catalog. Failed lookups are not cached.
pub struct CachedCatalog<C> {
    inner: C,
    ttl: Duration,
    entries: RefCell<HashMap<FoodId, CacheEntry>>,
}

impl<C: FoodCatalog> CachedCatalog<C> {
    pub fn new(inner: C, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: RefCell::new(HashMap::new()),
        }
    }

    pub fn invalidate(&self, id: &FoodId) {
        self.entries.borrow_mut().remove(id);
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Number of entries currently held, fresh or expired.
    pub fn cached_len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: FoodCatalog> FoodCatalog for CachedCatalog<C> {
    fn find_by_query<'a>(&'a self, text: &str) -> Box<dyn Iterator<Item = ReferenceFood> + 'a> {
        self.inner.find_by_query(text)
    }

    fn get_by_id(&self, id: &FoodId) -> Result<ReferenceFood> {
        if let Some(entry) = self.entries.borrow().get(id) {
            if entry.fetched_at.elapsed() < self.ttl {
                trace!(food = %id, "catalog cache hit");
                return Ok(entry.food.clone());
            }
        }

        trace!(food = %id, "catalog cache miss");
        let food = self.inner.get_by_id(id)?;
        self.entries.borrow_mut().insert(
            id.clone(),
            CacheEntry {
                food: food.clone(),
                fetched_at: Instant::now(),
            },
        );
        Ok(food)
    }
}
