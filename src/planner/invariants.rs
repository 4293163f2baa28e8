//! Consistency checks over a plan tree.
//!
//! A tree built only through the planner always passes; these exist to
//! vet trees restored from storage and to back the test suite.

use std::collections::HashSet;

use crate::error::{PlanError, Result};
use crate::models::{LineItem, Meal, MealPlan, Totals};
use crate::planner::aggregation::{recompute_meal_totals, recompute_plan_totals};
use crate::planner::calculations::scale_nutrients;

/// Consumed values must equal the rounded reference values times quantity.
pub fn check_line_item(item: &LineItem) -> Result<()> {
    item.reference()
        .check_reference(item.reference_food_id().as_str())?;

    let quantity = item.quantity();
    if !(quantity.is_finite() && quantity > 0.0) {
        return Err(PlanError::Inconsistent(format!(
            "line item {} has non-positive quantity {}",
            item.id(),
            quantity
        )));
    }

    let expected = scale_nutrients(item.reference(), quantity);
    if expected != *item.consumed() {
        return Err(PlanError::Inconsistent(format!(
            "line item {} ({}) consumed values {:?} differ from {:?} at quantity {}",
            item.id(),
            item.food_name(),
            item.consumed(),
            expected,
            quantity
        )));
    }

    Ok(())
}

fn check_totals(what: &str, stored: &Totals, derived: &Totals) -> Result<()> {
    for ((field, s), (_, d)) in stored.fields().into_iter().zip(derived.fields()) {
        if s != d {
            return Err(PlanError::Inconsistent(format!(
                "{} total {} is {} but its parts sum to {}",
                what, field, s, d
            )));
        }
    }
    Ok(())
}

/// Every item is consistent, ids are unique and totals equal the item sums.
pub fn check_meal(meal: &Meal) -> Result<()> {
    let mut seen = HashSet::new();
    for item in meal.line_items() {
        if !seen.insert(item.id()) {
            return Err(PlanError::Inconsistent(format!(
                "line item {} appears twice in meal '{}'",
                item.id(),
                meal.name()
            )));
        }
        check_line_item(item)?;
    }

    check_totals(
        &format!("meal '{}'", meal.name()),
        meal.totals(),
        &recompute_meal_totals(meal),
    )
}

/// Every meal passes [`check_meal`], ids are unique across the whole plan and
/// plan totals equal the meal sums.
pub fn check_plan(plan: &MealPlan) -> Result<()> {
    let mut meal_ids = HashSet::new();
    let mut item_ids = HashSet::new();

    for meal in plan.meals() {
        if !meal_ids.insert(meal.id()) {
            return Err(PlanError::Inconsistent(format!(
                "meal {} appears twice in plan '{}'",
                meal.id(),
                plan.label()
            )));
        }
        check_meal(meal)?;
        for item in meal.line_items() {
            if !item_ids.insert(item.id()) {
                return Err(PlanError::Inconsistent(format!(
                    "line item {} appears in more than one meal",
                    item.id()
                )));
            }
        }
    }

    check_totals(
        &format!("plan '{}'", plan.label()),
        plan.totals(),
        &recompute_plan_totals(plan),
    )
}
