use std::collections::HashMap;

use crate::catalog::FoodCatalog;
use crate::error::{PlanError, Result};
use crate::models::{FoodId, ReferenceFood};

/// Catalog held in memory, keyed by id, listing in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    foods: Vec<ReferenceFood>,
    index: HashMap<FoodId, usize>,
}

impl InMemoryCatalog {
    /// Build from a list of foods. Duplicate ids: last occurrence wins.
    pub fn new(foods: Vec<ReferenceFood>) -> Self {
        let mut catalog = Self::default();
        for food in foods {
            catalog.insert(food);
        }
        catalog
    }

    /// Add a food, replacing any existing entry with the same id.
    pub fn insert(&mut self, food: ReferenceFood) {
        match self.index.get(&food.id) {
            Some(&pos) => self.foods[pos] = food,
            None => {
                self.index.insert(food.id.clone(), self.foods.len());
                self.foods.push(food);
            }
        }
    }

    pub fn all(&self) -> &[ReferenceFood] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl FoodCatalog for InMemoryCatalog {
    fn find_by_query<'a>(&'a self, text: &str) -> Box<dyn Iterator<Item = ReferenceFood> + 'a> {
        let needle = text.trim().to_lowercase();
        Box::new(
            self.foods
                .iter()
                .filter(move |f| f.matches(&needle))
                .cloned(),
        )
    }

    fn get_by_id(&self, id: &FoodId) -> Result<ReferenceFood> {
        self.index
            .get(id)
            .map(|&pos| self.foods[pos].clone())
            .ok_or_else(|| PlanError::FoodNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Macros;

    fn food(id: &str, name: &str, kcal: f64) -> ReferenceFood {
        ReferenceFood {
            id: FoodId::new(id),
            name: name.to_string(),
            reference_portion_label: "1 unit".to_string(),
            reference_weight_grams: 100.0,
            reference_macros: Macros::new(kcal, 1.0, 1.0, 1.0),
            fiber_grams: None,
            sodium_milligrams: None,
        }
    }

    fn sample_catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            food("1", "Apple", 62.0),
            food("2", "Pineapple", 82.0),
            food("3", "Brown Rice", 216.0),
        ])
    }

    #[test]
    fn test_find_by_query_case_insensitive() {
        let catalog = sample_catalog();
        let names: Vec<String> = catalog.find_by_query("APPLE").map(|f| f.name).collect();
        assert_eq!(names, vec!["Apple", "Pineapple"]);
        assert_eq!(catalog.find_by_query("quinoa").count(), 0);
    }

    #[test]
    fn test_blank_query_lists_everything() {
        assert_eq!(sample_catalog().find_by_query("  ").count(), 3);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get_by_id(&FoodId::new("3")).unwrap().name, "Brown Rice");
        assert!(matches!(
            catalog.get_by_id(&FoodId::new("99")),
            Err(PlanError::FoodNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_ids_last_wins_in_place() {
        let catalog = InMemoryCatalog::new(vec![
            food("1", "Apple", 62.0),
            food("2", "Pear", 57.0),
            food("1", "Apple (large)", 95.0),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all()[0].name, "Apple (large)");
        assert_eq!(
            catalog.get_by_id(&FoodId::new("1")).unwrap().reference_macros.energy_kcal,
            95.0
        );
    }
}
