use serde::Serialize;

use crate::models::{FoodId, LineItemId, Nutrients};

/// One food entry within a meal, at a specific quantity.
///
/// Only the planner constructs or updates line items, so `consumed` can never
/// drift from `reference * quantity`. The per-portion `reference` snapshot is
/// kept so rescaling never needs the catalog and never works from rounded
/// consumed values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    id: LineItemId,
    reference_food_id: FoodId,
    food_name: String,
    quantity: f64,
    reference: Nutrients,
    consumed: Nutrients,
}

impl LineItem {
    pub(crate) fn from_parts(
        id: LineItemId,
        reference_food_id: FoodId,
        food_name: String,
        quantity: f64,
        reference: Nutrients,
        consumed: Nutrients,
    ) -> Self {
        Self {
            id,
            reference_food_id,
            food_name,
            quantity,
            reference,
            consumed,
        }
    }

    /// Same identity and source food, new quantity and consumed values.
    pub(crate) fn with_quantity(&self, quantity: f64, consumed: Nutrients) -> Self {
        Self {
            quantity,
            consumed,
            ..self.clone()
        }
    }

    pub fn id(&self) -> LineItemId {
        self.id
    }

    pub fn reference_food_id(&self) -> &FoodId {
        &self.reference_food_id
    }

    pub fn food_name(&self) -> &str {
        &self.food_name
    }

    /// Multiplier of the reference portion.
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Per-reference-portion values captured when the item was created.
    pub fn reference(&self) -> &Nutrients {
        &self.reference
    }

    /// Consumed values, rounded per the line-item rounding policy.
    pub fn consumed(&self) -> &Nutrients {
        &self.consumed
    }

    pub fn consumed_weight_grams(&self) -> f64 {
        self.consumed.weight_grams
    }
}
