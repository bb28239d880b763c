//! Unit types and conversion constants
//!
//! Height newtypes keep the centimeter and meter formulas from being fed the
//! wrong unit, plus the physical constants shared by the calculators.

use serde::{Deserialize, Serialize};

/// Height in centimeters (BMR and body fat formulas)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeightCm(pub f64);

impl HeightCm {
    /// Raw value in centimeters
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to meters
    pub fn to_m(self) -> HeightM {
        HeightM(self.0 / 100.0)
    }
}

/// Height in meters (BMI and ideal weight formulas)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeightM(pub f64);

impl HeightM {
    /// Raw value in meters
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to centimeters
    pub fn to_cm(self) -> HeightCm {
        HeightCm(self.0 * 100.0)
    }
}

// ============================================================================
// Energy Density Constants (kcal per gram)
// ============================================================================

/// Kilocalories per gram of carbohydrate
pub const KCAL_PER_G_CARB: f64 = 4.0;
/// Kilocalories per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Kilocalories per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ============================================================================
// Length and Volume Constants
// ============================================================================

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;
/// Baseline height for the ideal weight formulas (5 feet)
pub const IDEAL_WEIGHT_BASELINE_CM: f64 = 152.4;
/// Milliliters of water per kilogram of body weight per day
pub const WATER_ML_PER_KG: f64 = 35.0;
/// Milliliters per drinking glass
pub const ML_PER_GLASS: f64 = 200.0;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;

// ============================================================================
// Rounding Convention
// ============================================================================

/// Round to one decimal place, the reporting convention for all calculators
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
