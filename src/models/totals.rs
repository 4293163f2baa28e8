use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::models::Nutrients;
use crate::planner::constants::{
    ENERGY_DECIMALS, FIBER_DECIMALS, MACRO_DECIMALS, SODIUM_DECIMALS, WEIGHT_DECIMALS,
};

/// Summed weight and nutrients for a meal or a whole plan.
///
/// Absent secondary nutrients contribute zero. Sums are accumulated as whole
/// rounding steps, so the result does not depend on the order of the parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub weight_grams: f64,
    pub energy_kcal: f64,
    pub protein_grams: f64,
    pub carb_grams: f64,
    pub fat_grams: f64,
    pub fiber_grams: f64,
    pub sodium_milligrams: f64,
}

/// Totals counted in rounding steps (tenths of a gram for macros and fiber,
/// whole units for weight, energy and sodium).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Steps([i64; 7]);

const DECIMALS: [u32; 7] = [
    WEIGHT_DECIMALS,
    ENERGY_DECIMALS,
    MACRO_DECIMALS,
    MACRO_DECIMALS,
    MACRO_DECIMALS,
    FIBER_DECIMALS,
    SODIUM_DECIMALS,
];

fn scale(decimals: u32) -> f64 {
    10_f64.powi(decimals as i32)
}

impl Steps {
    fn add(self, other: Steps) -> Steps {
        let mut out = self.0;
        for (acc, v) in out.iter_mut().zip(other.0) {
            *acc += v;
        }
        Steps(out)
    }
}

impl Totals {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Field values in a fixed order, paired with their names.
    pub fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("weight_grams", self.weight_grams),
            ("energy_kcal", self.energy_kcal),
            ("protein_grams", self.protein_grams),
            ("carb_grams", self.carb_grams),
            ("fat_grams", self.fat_grams),
            ("fiber_grams", self.fiber_grams),
            ("sodium_milligrams", self.sodium_milligrams),
        ]
    }

    fn steps(&self) -> Steps {
        let mut out = [0_i64; 7];
        for (i, (_, value)) in self.fields().into_iter().enumerate() {
            out[i] = (value * scale(DECIMALS[i])).round() as i64;
        }
        Steps(out)
    }

    fn from_steps(steps: Steps) -> Self {
        let v: [f64; 7] =
            std::array::from_fn(|i| steps.0[i] as f64 / scale(DECIMALS[i]));
        Self {
            weight_grams: v[0],
            energy_kcal: v[1],
            protein_grams: v[2],
            carb_grams: v[3],
            fat_grams: v[4],
            fiber_grams: v[5],
            sodium_milligrams: v[6],
        }
    }
}

impl From<&Nutrients> for Totals {
    fn from(n: &Nutrients) -> Self {
        Self {
            weight_grams: n.weight_grams,
            energy_kcal: n.macros.energy_kcal,
            protein_grams: n.macros.protein_grams,
            carb_grams: n.macros.carb_grams,
            fat_grams: n.macros.fat_grams,
            fiber_grams: n.fiber_grams.unwrap_or(0.0),
            sodium_milligrams: n.sodium_milligrams.unwrap_or(0.0),
        }
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, other: Totals) -> Totals {
        Totals::from_steps(self.steps().add(other.steps()))
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let steps = iter.fold(Steps::default(), |acc, t| acc.add(t.steps()));
        Totals::from_steps(steps)
    }
}

impl<'a> Sum<&'a Totals> for Totals {
    fn sum<I: Iterator<Item = &'a Totals>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
