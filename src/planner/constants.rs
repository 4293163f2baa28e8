//! Rounding policy for consumed line-item values.
//!
//! Rounding happens once, per line item. Meal and plan totals are plain sums
//! of the rounded item values and are never rounded again.

/// Consumed weight rounds to whole grams.
pub const WEIGHT_DECIMALS: u32 = 0;

/// Energy rounds to whole kcal.
pub const ENERGY_DECIMALS: u32 = 0;

/// Protein, carbohydrate and fat round to one decimal (nutrition-label convention).
pub const MACRO_DECIMALS: u32 = 1;

pub const FIBER_DECIMALS: u32 = 1;

/// Sodium rounds to whole milligrams.
pub const SODIUM_DECIMALS: u32 = 0;
