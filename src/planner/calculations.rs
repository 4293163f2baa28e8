use crate::error::{PlanError, Result};
use crate::models::{LineItem, LineItemId, Macros, Nutrients, ReferenceFood};
use crate::planner::constants::*;

/// Round to a fixed number of decimal places, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Reject zero, negative and non-finite quantities.
pub fn check_quantity(quantity: f64) -> Result<()> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidQuantity(quantity))
    }
}

/// Scale per-portion values by `quantity` and apply the rounding policy.
///
/// Always called with the immutable reference values, never with previously
/// consumed values.
pub fn scale_nutrients(reference: &Nutrients, quantity: f64) -> Nutrients {
    let m = &reference.macros;
    Nutrients {
        weight_grams: round_to(reference.weight_grams * quantity, WEIGHT_DECIMALS),
        macros: Macros {
            energy_kcal: round_to(m.energy_kcal * quantity, ENERGY_DECIMALS),
            protein_grams: round_to(m.protein_grams * quantity, MACRO_DECIMALS),
            carb_grams: round_to(m.carb_grams * quantity, MACRO_DECIMALS),
            fat_grams: round_to(m.fat_grams * quantity, MACRO_DECIMALS),
        },
        fiber_grams: reference
            .fiber_grams
            .map(|v| round_to(v * quantity, FIBER_DECIMALS)),
        sodium_milligrams: reference
            .sodium_milligrams
            .map(|v| round_to(v * quantity, SODIUM_DECIMALS)),
    }
}

/// Derive a new line item for `quantity` reference portions of `food`.
///
/// The food is validated here rather than trusted from the catalog.
pub fn create_line_item(food: &ReferenceFood, quantity: f64) -> Result<LineItem> {
    check_quantity(quantity)?;
    food.validate()?;

    let reference = food.per_portion();
    let consumed = scale_nutrients(&reference, quantity);

    Ok(LineItem::from_parts(
        LineItemId::new(),
        food.id.clone(),
        food.name.clone(),
        quantity,
        reference,
        consumed,
    ))
}

/// Change an item's quantity, keeping its id.
///
/// Consumed values are recomputed from the item's reference snapshot, so
/// rescaling a→b→a reproduces the original values exactly.
pub fn rescale_line_item(item: &LineItem, new_quantity: f64) -> Result<LineItem> {
    check_quantity(new_quantity)?;
    let consumed = scale_nutrients(item.reference(), new_quantity);
    Ok(item.with_quantity(new_quantity, consumed))
}
