use crate::models::{LineItem, Meal, MealPlan, Totals};

/// Sum consumed values over a sequence of line items.
///
/// This and [`sum_meals`] are the only places totals are produced.
pub fn sum_line_items(items: &[LineItem]) -> Totals {
    items.iter().map(|item| Totals::from(item.consumed())).sum()
}

/// Sum meal totals.
pub fn sum_meals(meals: &[Meal]) -> Totals {
    meals.iter().map(Meal::totals).sum()
}

/// Re-derive a meal's totals from its line items.
pub fn recompute_meal_totals(meal: &Meal) -> Totals {
    sum_line_items(meal.line_items())
}

/// Re-derive a plan's totals from its meals' totals.
pub fn recompute_plan_totals(plan: &MealPlan) -> Totals {
    sum_meals(plan.meals())
}
