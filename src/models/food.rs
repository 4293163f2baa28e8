use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Opaque catalog identifier for a reference food.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(pub String);

impl FoodId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FoodId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The four headline macros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub energy_kcal: f64,
    pub protein_grams: f64,
    pub carb_grams: f64,
    pub fat_grams: f64,
}

impl Macros {
    pub fn new(energy_kcal: f64, protein_grams: f64, carb_grams: f64, fat_grams: f64) -> Self {
        Self {
            energy_kcal,
            protein_grams,
            carb_grams,
            fat_grams,
        }
    }
}

/// Weight plus nutrients for some amount of a food.
///
/// Used both for the immutable per-reference-portion values of a food and for
/// the consumed (scaled and rounded) values of a line item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    pub weight_grams: f64,
    #[serde(flatten)]
    pub macros: Macros,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_grams: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium_milligrams: Option<f64>,
}

impl Nutrients {
    /// Reject values that cannot act as a per-portion reference.
    ///
    /// Every nutrient must be finite and non-negative; weight must be
    /// strictly positive.
    pub fn check_reference(&self, food_id: &str) -> Result<()> {
        let invalid = |reason: String| PlanError::InvalidReferenceFood {
            id: food_id.to_string(),
            reason,
        };

        if !self.weight_grams.is_finite() || self.weight_grams <= 0.0 {
            return Err(invalid(format!(
                "reference weight must be positive, got {}",
                self.weight_grams
            )));
        }

        let fields = [
            ("energy_kcal", Some(self.macros.energy_kcal)),
            ("protein_grams", Some(self.macros.protein_grams)),
            ("carb_grams", Some(self.macros.carb_grams)),
            ("fat_grams", Some(self.macros.fat_grams)),
            ("fiber_grams", self.fiber_grams),
            ("sodium_milligrams", self.sodium_milligrams),
        ];
        for (name, value) in fields {
            if let Some(v) = value {
                // NaN fails this comparison too.
                if !(v.is_finite() && v >= 0.0) {
                    return Err(invalid(format!("{} must be non-negative, got {}", name, v)));
                }
            }
        }

        Ok(())
    }
}

/// A catalog food with nutrients defined per one reference portion.
///
/// Values are per portion (e.g. "1 medium unit = 120g = 62 kcal"), not per 100g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceFood {
    pub id: FoodId,
    pub name: String,
    pub reference_portion_label: String,
    pub reference_weight_grams: f64,
    pub reference_macros: Macros,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_grams: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium_milligrams: Option<f64>,
}

impl ReferenceFood {
    /// Per-portion values as a [`Nutrients`] snapshot.
    pub fn per_portion(&self) -> Nutrients {
        Nutrients {
            weight_grams: self.reference_weight_grams,
            macros: self.reference_macros,
            fiber_grams: self.fiber_grams,
            sodium_milligrams: self.sodium_milligrams,
        }
    }

    /// Validate the food before anything is derived from it.
    pub fn validate(&self) -> Result<()> {
        self.per_portion().check_reference(self.id.as_str())
    }

    /// Case-insensitive substring match on the display name.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Short description for listings.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}, {}g): {} kcal, P:{} C:{} F:{}",
            self.name,
            self.reference_portion_label,
            self.reference_weight_grams,
            self.reference_macros.energy_kcal,
            self.reference_macros.protein_grams,
            self.reference_macros.carb_grams,
            self.reference_macros.fat_grams
        )
    }
}
