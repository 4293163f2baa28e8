use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::{LineItem, Meal, MealPlan};
use crate::planner::{check_plan, check_quantity, scale_nutrients};
use crate::state::stored::{StoredLineItem, StoredMeal, StoredPlan};

/// Rebuild a line item from storage.
///
/// The catalog is consulted only when the item has no reference snapshot.
pub fn restore_line_item<C: FoodCatalog + ?Sized>(
    stored: StoredLineItem,
    catalog: &C,
) -> Result<LineItem> {
    check_quantity(stored.quantity)?;

    let (reference, food_name) = match stored.reference {
        Some(reference) => {
            let name = stored
                .food_name
                .unwrap_or_else(|| stored.reference_food_id.to_string());
            (reference, name)
        }
        None => {
            debug!(food = %stored.reference_food_id, "no reference snapshot, fetching from catalog");
            let food = catalog.get_by_id(&stored.reference_food_id)?;
            food.validate()?;
            (food.per_portion(), stored.food_name.unwrap_or(food.name))
        }
    };
    reference.check_reference(stored.reference_food_id.as_str())?;

    let consumed = scale_nutrients(&reference, stored.quantity);
    if let Some(cached) = stored.consumed {
        if cached != consumed {
            warn!(item = %stored.id, food = %food_name, "stale consumed values replaced on load");
        }
    }

    Ok(LineItem::from_parts(
        stored.id,
        stored.reference_food_id,
        food_name,
        stored.quantity,
        reference,
        consumed,
    ))
}

fn restore_meal<C: FoodCatalog + ?Sized>(stored: StoredMeal, catalog: &C) -> Result<Meal> {
    let items = stored
        .line_items
        .into_iter()
        .map(|item| restore_line_item(item, catalog))
        .collect::<Result<Vec<_>>>()?;
    Ok(Meal::from_parts(stored.id, stored.name, items))
}

/// Rebuild a full plan, re-deriving every consumed value and total.
pub fn restore_plan<C: FoodCatalog + ?Sized>(stored: StoredPlan, catalog: &C) -> Result<MealPlan> {
    let meals = stored
        .meals
        .into_iter()
        .map(|meal| restore_meal(meal, catalog))
        .collect::<Result<Vec<_>>>()?;

    let plan = MealPlan::from_parts(stored.id, stored.label, meals);
    check_plan(&plan)?;
    Ok(plan)
}

/// Load a plan from a JSON file.
pub fn load_plan<P: AsRef<Path>, C: FoodCatalog + ?Sized>(path: P, catalog: &C) -> Result<MealPlan> {
    let content = fs::read_to_string(path.as_ref())?;
    let stored: StoredPlan = serde_json::from_str(&content)?;
    let plan = restore_plan(stored, catalog)?;
    info!(
        path = %path.as_ref().display(),
        meals = plan.meals().len(),
        "loaded meal plan"
    );
    Ok(plan)
}

/// Save a plan, including consumed values and totals for readers.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &MealPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path.as_ref(), json)?;
    debug!(path = %path.as_ref().display(), "saved meal plan");
    Ok(())
}

/// Write a fresh plan with the given empty meals.
pub fn new_plan_file<P: AsRef<Path>>(path: P, label: &str, meal_names: &[String]) -> Result<MealPlan> {
    let meals = meal_names.iter().map(|name| Meal::new(name.trim())).collect();
    let plan = MealPlan::from_meals(label, meals);
    save_plan(path, &plan)?;
    Ok(plan)
}
