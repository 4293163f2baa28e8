//! Tree edits. Every function takes a snapshot and returns a new tree; on
//! error the input is untouched because nothing is mutated in place.

use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::{LineItem, LineItemId, Meal, MealId, MealPlan};
use crate::planner::calculations::rescale_line_item;

/// Append an item to the end of a meal.
pub fn add_line_item(meal: &Meal, item: LineItem) -> Meal {
    debug!(meal = %meal.name(), item = %item.id(), food = %item.food_name(), "adding line item");
    let mut items = meal.line_items().to_vec();
    items.push(item);
    meal.with_line_items(items)
}

/// Remove an item; meal totals are re-derived from what remains.
pub fn remove_line_item(meal: &Meal, item_id: LineItemId) -> Result<Meal> {
    let pos = meal
        .position(item_id)
        .ok_or(PlanError::UnknownLineItem(item_id))?;

    debug!(meal = %meal.name(), item = %item_id, "removing line item");
    let mut items = meal.line_items().to_vec();
    items.remove(pos);
    Ok(meal.with_line_items(items))
}

/// Rescale one item in place within its meal and re-derive meal totals.
pub fn rescale_item_in_meal(meal: &Meal, item_id: LineItemId, quantity: f64) -> Result<Meal> {
    let pos = meal
        .position(item_id)
        .ok_or(PlanError::UnknownLineItem(item_id))?;

    let rescaled = rescale_line_item(&meal.line_items()[pos], quantity)?;
    debug!(meal = %meal.name(), item = %item_id, quantity, "rescaled line item");

    let mut items = meal.line_items().to_vec();
    items[pos] = rescaled;
    Ok(meal.with_line_items(items))
}

/// Move the item at `from` so it ends up at index `to`.
///
/// Pure permutation: ids, quantities, consumed values and meal totals are
/// left exactly as they were.
pub fn reorder_line_items(meal: &Meal, from: usize, to: usize) -> Result<Meal> {
    let len = meal.len();
    for index in [from, to] {
        if index >= len {
            return Err(PlanError::IndexOutOfRange { index, len });
        }
    }

    let mut items = meal.line_items().to_vec();
    let item = items.remove(from);
    items.insert(to, item);
    Ok(meal.with_order(items))
}

/// Append a meal to the plan.
pub fn add_meal(plan: &MealPlan, meal: Meal) -> MealPlan {
    debug!(plan = %plan.label(), meal = %meal.name(), "adding meal");
    let mut meals = plan.meals().to_vec();
    meals.push(meal);
    plan.with_meals(meals)
}

/// Replace one meal with the result of `edit` and re-derive plan totals.
fn edit_meal<F>(plan: &MealPlan, meal_id: MealId, edit: F) -> Result<MealPlan>
where
    F: FnOnce(&Meal) -> Result<Meal>,
{
    let pos = plan
        .meals()
        .iter()
        .position(|m| m.id() == meal_id)
        .ok_or_else(|| PlanError::UnknownMeal(meal_id.to_string()))?;

    let updated = edit(&plan.meals()[pos])?;
    let mut meals = plan.meals().to_vec();
    meals[pos] = updated;
    Ok(plan.with_meals(meals))
}

pub fn add_item_to_plan(plan: &MealPlan, meal_id: MealId, item: LineItem) -> Result<MealPlan> {
    edit_meal(plan, meal_id, |meal| Ok(add_line_item(meal, item)))
}

pub fn remove_item_from_plan(
    plan: &MealPlan,
    meal_id: MealId,
    item_id: LineItemId,
) -> Result<MealPlan> {
    edit_meal(plan, meal_id, |meal| remove_line_item(meal, item_id))
}

/// Rescale one item and propagate through its meal's totals to the plan's.
pub fn rescale_item_in_plan(
    plan: &MealPlan,
    meal_id: MealId,
    item_id: LineItemId,
    quantity: f64,
) -> Result<MealPlan> {
    edit_meal(plan, meal_id, |meal| rescale_item_in_meal(meal, item_id, quantity))
}

pub fn reorder_items_in_plan(
    plan: &MealPlan,
    meal_id: MealId,
    from: usize,
    to: usize,
) -> Result<MealPlan> {
    edit_meal(plan, meal_id, |meal| reorder_line_items(meal, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodId, Macros, ReferenceFood};
    use crate::planner::create_line_item;

    fn food(id: &str, kcal: f64) -> ReferenceFood {
        ReferenceFood {
            id: FoodId::new(id),
            name: id.to_string(),
            reference_portion_label: "1 portion".to_string(),
            reference_weight_grams: 100.0,
            reference_macros: Macros::new(kcal, 1.0, 2.0, 3.0),
            fiber_grams: None,
            sodium_milligrams: None,
        }
    }

    fn three_item_meal() -> Meal {
        Meal::from_items(
            "Lunch",
            vec![
                create_line_item(&food("a", 100.0), 1.0).unwrap(),
                create_line_item(&food("b", 200.0), 1.0).unwrap(),
                create_line_item(&food("c", 300.0), 1.0).unwrap(),
            ],
        )
    }

    fn names(meal: &Meal) -> Vec<&str> {
        meal.line_items().iter().map(|i| i.food_name()).collect()
    }

    #[test]
    fn test_add_and_remove_update_totals() {
        let meal = three_item_meal();
        assert_eq!(meal.totals().energy_kcal, 600.0);

        let extra = create_line_item(&food("d", 50.0), 2.0).unwrap();
        let extra_id = extra.id();
        let bigger = add_line_item(&meal, extra);
        assert_eq!(bigger.totals().energy_kcal, 700.0);

        let back = remove_line_item(&bigger, extra_id).unwrap();
        assert_eq!(back.totals(), meal.totals());
        assert_eq!(back.id(), meal.id());
    }

    #[test]
    fn test_remove_unknown_item() {
        let meal = three_item_meal();
        let missing = LineItemId::new();
        assert!(matches!(
            remove_line_item(&meal, missing),
            Err(PlanError::UnknownLineItem(id)) if id == missing
        ));
    }

    #[test]
    fn test_reorder_forward_and_backward() {
        let meal = three_item_meal();

        let moved = reorder_line_items(&meal, 0, 2).unwrap();
        assert_eq!(names(&moved), vec!["b", "c", "a"]);

        let moved = reorder_line_items(&meal, 2, 0).unwrap();
        assert_eq!(names(&moved), vec!["c", "a", "b"]);

        let same = reorder_line_items(&meal, 1, 1).unwrap();
        assert_eq!(same, meal);
    }

    #[test]
    fn test_reorder_out_of_range() {
        let meal = three_item_meal();
        assert!(matches!(
            reorder_line_items(&meal, 0, 3),
            Err(PlanError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(reorder_line_items(&Meal::new("Empty"), 0, 0).is_err());
    }

    #[test]
    fn test_rescale_in_plan_propagates() {
        let meal = three_item_meal();
        let meal_id = meal.id();
        let target = meal.line_items()[1].id();
        let plan = MealPlan::from_meals("Day", vec![meal, Meal::new("Dinner")]);
        assert_eq!(plan.totals().energy_kcal, 600.0);

        let plan = rescale_item_in_plan(&plan, meal_id, target, 3.0).unwrap();
        let meal = plan.meal(meal_id).unwrap();
        assert_eq!(meal.line_item(target).unwrap().consumed().macros.energy_kcal, 600.0);
        assert_eq!(meal.totals().energy_kcal, 1000.0);
        assert_eq!(plan.totals().energy_kcal, 1000.0);
    }

    #[test]
    fn test_unknown_meal() {
        let plan = MealPlan::new("Day");
        let item = create_line_item(&food("a", 100.0), 1.0).unwrap();
        assert!(matches!(
            add_item_to_plan(&plan, MealId::new(), item),
            Err(PlanError::UnknownMeal(_))
        ));
    }
}
