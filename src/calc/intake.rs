//! Daily intake calculators
//!
//! Macronutrient gram targets from a calorie budget and the daily water
//! requirement.

use serde::{Deserialize, Serialize};

use super::units::{
    round1, KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN, ML_PER_GLASS, ML_PER_LITER,
    WATER_ML_PER_KG,
};
use crate::error::{CalcError, CalcResult};
use crate::models::{ActivityLevel, Climate};

/// Tolerance for the macro percentage sum check
const MACRO_SUM_TOLERANCE: f64 = 1e-6;

/// Macronutrient gram targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub carbs_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
}

/// Daily water requirement
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaterRequirement {
    /// Milliliters per day, rounded to the nearest whole milliliter
    pub ml: f64,
}

impl WaterRequirement {
    /// Requirement in liters
    pub fn liters(&self) -> f64 {
        self.ml / ML_PER_LITER
    }

    /// Requirement in 200 ml glasses
    pub fn glasses(&self) -> f64 {
        self.ml / ML_PER_GLASS
    }
}

/// Calculate macronutrient grams from a calorie budget and percentage split
///
/// Carbohydrate and protein convert at 4 kcal/g, fat at 9 kcal/g; each result
/// is rounded to one decimal place. Percentages that do not sum to 100 are
/// rejected rather than normalized.
///
/// # Errors
///
/// Returns `InvalidInput` if `total_calories` is not positive or any
/// percentage is outside [0, 100], and `InconsistentMacroSplit` if the
/// percentages do not sum to 100.
pub fn macro_split(
    total_calories: f64,
    carb_pct: f64,
    protein_pct: f64,
    fat_pct: f64,
) -> CalcResult<MacroSplit> {
    if total_calories <= 0.0 {
        return Err(CalcError::invalid_input("Calories must be positive"));
    }
    for pct in [carb_pct, protein_pct, fat_pct] {
        if !(0.0..=100.0).contains(&pct) {
            return Err(CalcError::invalid_input(
                "Percentages must be between 0 and 100",
            ));
        }
    }

    let sum = carb_pct + protein_pct + fat_pct;
    if (sum - 100.0).abs() > MACRO_SUM_TOLERANCE {
        return Err(CalcError::InconsistentMacroSplit(sum));
    }

    Ok(MacroSplit {
        carbs_g: round1(total_calories * carb_pct / 100.0 / KCAL_PER_G_CARB),
        protein_g: round1(total_calories * protein_pct / 100.0 / KCAL_PER_G_PROTEIN),
        fat_g: round1(total_calories * fat_pct / 100.0 / KCAL_PER_G_FAT),
    })
}

/// Calculate the daily water requirement
///
/// Base requirement of 35 ml per kg of body weight, scaled by activity
/// (1.0 sedentary through 1.4 very active) and climate (1.0 temperate,
/// 1.2 hot, 1.4 very hot), rounded to the nearest whole milliliter.
///
/// # Errors
///
/// Returns `InvalidInput` if weight is not positive.
pub fn water_requirement(
    weight_kg: f64,
    activity: ActivityLevel,
    climate: Climate,
) -> CalcResult<WaterRequirement> {
    if weight_kg <= 0.0 {
        return Err(CalcError::invalid_input("Weight must be positive"));
    }

    let ml = (weight_kg * WATER_ML_PER_KG * activity.water_factor() * climate.factor()).round();
    Ok(WaterRequirement { ml })
}
