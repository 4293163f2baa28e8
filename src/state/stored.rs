use serde::Deserialize;

use crate::models::{FoodId, LineItemId, MealId, Nutrients, PlanId};

/// On-disk plan as read back from storage.
///
/// Ids and quantities are authoritative. Per-portion `reference` snapshots
/// are used when present; consumed values and totals are only a cache and
/// are re-derived on restore.
#[derive(Debug, Deserialize)]
pub struct StoredPlan {
    pub id: PlanId,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub meals: Vec<StoredMeal>,
}

#[derive(Debug, Deserialize)]
pub struct StoredMeal {
    pub id: MealId,
    pub name: String,
    #[serde(default)]
    pub line_items: Vec<StoredLineItem>,
}

#[derive(Debug, Deserialize)]
pub struct StoredLineItem {
    pub id: LineItemId,
    pub reference_food_id: FoodId,
    #[serde(default)]
    pub food_name: Option<String>,
    pub quantity: f64,
    #[serde(default)]
    pub reference: Option<Nutrients>,
    #[serde(default)]
    pub consumed: Option<Nutrients>,
}
