//! Nutrient totals and daily targets.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Derived nutrient values for a quantity, meal or day.
///
/// Always computed from its inputs, never stored independently.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutrientTotals {
    pub energy_kcal: f64,
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub sodium_mg: f64,
}

impl NutrientTotals {
    /// All-zero totals.
    pub const ZERO: NutrientTotals = NutrientTotals {
        energy_kcal: 0.0,
        protein_g: 0.0,
        carb_g: 0.0,
        fat_g: 0.0,
        fiber_g: 0.0,
        sodium_mg: 0.0,
    };

    /// Multiply every field by `factor`.
    pub fn scaled_by(&self, factor: f64) -> Self {
        Self {
            energy_kcal: self.energy_kcal * factor,
            protein_g: self.protein_g * factor,
            carb_g: self.carb_g * factor,
            fat_g: self.fat_g * factor,
            fiber_g: self.fiber_g * factor,
            sodium_mg: self.sodium_mg * factor,
        }
    }

    /// Whether every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Field-wise comparison with an absolute-or-relative tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        let close = |a: f64, b: f64| {
            let diff = (a - b).abs();
            diff <= tolerance || diff <= tolerance * a.abs().max(b.abs())
        };
        close(self.energy_kcal, other.energy_kcal)
            && close(self.protein_g, other.protein_g)
            && close(self.carb_g, other.carb_g)
            && close(self.fat_g, other.fat_g)
            && close(self.fiber_g, other.fiber_g)
            && close(self.sodium_mg, other.sodium_mg)
    }

    /// Rounded presentation values: kcal and mg with no decimals, grams with one.
    pub fn display(&self) -> DisplayTotals {
        DisplayTotals {
            energy_kcal: format!("{:.0}", self.energy_kcal),
            protein_g: format!("{:.1}", self.protein_g),
            carb_g: format!("{:.1}", self.carb_g),
            fat_g: format!("{:.1}", self.fat_g),
            fiber_g: format!("{:.1}", self.fiber_g),
            sodium_mg: format!("{:.0}", self.sodium_mg),
        }
    }
}

impl Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            energy_kcal: self.energy_kcal + rhs.energy_kcal,
            protein_g: self.protein_g + rhs.protein_g,
            carb_g: self.carb_g + rhs.carb_g,
            fat_g: self.fat_g + rhs.fat_g,
            fiber_g: self.fiber_g + rhs.fiber_g,
            sodium_mg: self.sodium_mg + rhs.sodium_mg,
        }
    }
}

impl AddAssign for NutrientTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a NutrientTotals> for NutrientTotals {
    fn sum<I: Iterator<Item = &'a NutrientTotals>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Formatted totals for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayTotals {
    pub energy_kcal: String,
    pub protein_g: String,
    pub carb_g: String,
    pub fat_g: String,
    pub fiber_g: String,
    pub sodium_mg: String,
}

/// Nutrient selector, used to label target progress.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nutrient {
    Energy,
    Protein,
    Carbohydrate,
    Fat,
    Fiber,
    Sodium,
}

impl Nutrient {
    pub const ALL: [Nutrient; 6] = [
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Carbohydrate,
        Nutrient::Fat,
        Nutrient::Fiber,
        Nutrient::Sodium,
    ];

    /// Read this nutrient's value from a totals record.
    pub fn value_in(&self, totals: &NutrientTotals) -> f64 {
        match self {
            Nutrient::Energy => totals.energy_kcal,
            Nutrient::Protein => totals.protein_g,
            Nutrient::Carbohydrate => totals.carb_g,
            Nutrient::Fat => totals.fat_g,
            Nutrient::Fiber => totals.fiber_g,
            Nutrient::Sodium => totals.sodium_mg,
        }
    }

    /// Unit label for display.
    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Energy => "kcal",
            Nutrient::Sodium => "mg",
            _ => "g",
        }
    }
}

/// Optional per-nutrient daily targets set by the professional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyTargets {
    pub energy_kcal: Option<f64>,
    pub protein_g: Option<f64>,
    pub carb_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub fiber_g: Option<f64>,
    pub sodium_mg: Option<f64>,
}

/// Progress of a day's totals against one target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetProgress {
    pub nutrient: Nutrient,
    pub actual: f64,
    pub target: f64,
    /// actual / target * 100, unclamped
    pub percent: f64,
    /// target - actual, never below zero
    pub remaining: f64,
}

impl DailyTargets {
    /// Target for a nutrient, ignoring unset and non-positive values.
    pub fn target_for(&self, nutrient: Nutrient) -> Option<f64> {
        let value = match nutrient {
            Nutrient::Energy => self.energy_kcal,
            Nutrient::Protein => self.protein_g,
            Nutrient::Carbohydrate => self.carb_g,
            Nutrient::Fat => self.fat_g,
            Nutrient::Fiber => self.fiber_g,
            Nutrient::Sodium => self.sodium_mg,
        };
        value.filter(|v| v.is_finite() && *v > 0.0)
    }

    /// Compare day totals against every set target.
    pub fn progress(&self, totals: &NutrientTotals) -> Vec<TargetProgress> {
        Nutrient::ALL
            .iter()
            .filter_map(|nutrient| {
                let target = self.target_for(*nutrient)?;
                let actual = nutrient.value_in(totals);
                Some(TargetProgress {
                    nutrient: *nutrient,
                    actual,
                    target,
                    percent: actual / target * 100.0,
                    remaining: (target - actual).max(0.0),
                })
            })
            .collect()
    }
}
