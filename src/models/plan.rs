use serde::Serialize;

use crate::models::{LineItem, LineItemId, MealId, PlanId, Totals};
use crate::planner::aggregation;

/// A named, ordered group of line items.
///
/// `totals` is always the sum over `line_items`; it is derived on every
/// construction and has no setter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    id: MealId,
    name: String,
    line_items: Vec<LineItem>,
    totals: Totals,
}

impl Meal {
    /// Create an empty meal.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_items(name, Vec::new())
    }

    /// Create a meal holding the given items, in order.
    pub fn from_items(name: impl Into<String>, line_items: Vec<LineItem>) -> Self {
        Self::from_parts(MealId::new(), name.into(), line_items)
    }

    pub(crate) fn from_parts(id: MealId, name: String, line_items: Vec<LineItem>) -> Self {
        let totals = aggregation::sum_line_items(&line_items);
        Self {
            id,
            name,
            line_items,
            totals,
        }
    }

    /// Same meal identity with a new item sequence; totals re-derived.
    pub(crate) fn with_line_items(&self, line_items: Vec<LineItem>) -> Self {
        Self::from_parts(self.id, self.name.clone(), line_items)
    }

    /// Same items in a different order. Order does not affect sums, so the
    /// existing totals are carried over untouched.
    pub(crate) fn with_order(&self, line_items: Vec<LineItem>) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            line_items,
            totals: self.totals,
        }
    }

    pub fn id(&self) -> MealId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn line_item(&self, id: LineItemId) -> Option<&LineItem> {
        self.line_items.iter().find(|i| i.id() == id)
    }

    pub fn position(&self, id: LineItemId) -> Option<usize> {
        self.line_items.iter().position(|i| i.id() == id)
    }

    pub fn len(&self) -> usize {
        self.line_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

/// Top-level aggregate: one plan per patient per day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealPlan {
    id: PlanId,
    label: String,
    meals: Vec<Meal>,
    totals: Totals,
}

impl MealPlan {
    pub fn new(label: impl Into<String>) -> Self {
        Self::from_meals(label, Vec::new())
    }

    pub fn from_meals(label: impl Into<String>, meals: Vec<Meal>) -> Self {
        Self::from_parts(PlanId::new(), label.into(), meals)
    }

    pub(crate) fn from_parts(id: PlanId, label: String, meals: Vec<Meal>) -> Self {
        let totals = aggregation::sum_meals(&meals);
        Self {
            id,
            label,
            meals,
            totals,
        }
    }

    /// Same plan identity with a new meal sequence; totals re-derived.
    pub(crate) fn with_meals(&self, meals: Vec<Meal>) -> Self {
        Self::from_parts(self.id, self.label.clone(), meals)
    }

    pub fn id(&self) -> PlanId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn meal(&self, id: MealId) -> Option<&Meal> {
        self.meals.iter().find(|m| m.id() == id)
    }

    /// Find a meal by id or by case-insensitive name.
    pub fn find_meal(&self, selector: &str) -> Option<&Meal> {
        if let Ok(id) = selector.parse::<MealId>() {
            if let Some(meal) = self.meal(id) {
                return Some(meal);
            }
        }
        let wanted = selector.trim().to_lowercase();
        self.meals.iter().find(|m| m.name.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_meal_has_zero_totals() {
        let meal = Meal::new("Breakfast");
        assert!(meal.is_empty());
        assert_eq!(*meal.totals(), Totals::zero());
    }

    #[test]
    fn test_find_meal_by_name_or_id() {
        let lunch = Meal::new("Lunch");
        let lunch_id = lunch.id();
        let plan = MealPlan::from_meals("Monday", vec![Meal::new("Breakfast"), lunch]);

        assert_eq!(plan.find_meal("lunch").map(|m| m.id()), Some(lunch_id));
        assert_eq!(
            plan.find_meal(&lunch_id.to_string()).map(|m| m.id()),
            Some(lunch_id)
        );
        assert!(plan.find_meal("dinner").is_none());
    }
}
