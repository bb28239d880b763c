//! Body composition calculators
//!
//! BMI with category classification, ideal body weight estimates
//! (Robinson, Miller, Devine), and body fat percentage by the U.S. Navy
//! circumference method.

use serde::{Deserialize, Serialize};

use super::units::{round1, HeightCm, HeightM, CM_PER_INCH, IDEAL_WEIGHT_BASELINE_CM};
use crate::error::{CalcError, CalcResult};
use crate::models::Sex;

/// BMI classification by WHO thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    pub fn from_value(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Body mass index result
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bmi {
    /// BMI value in kg/m², rounded to one decimal place
    pub value: f64,
    pub category: BmiCategory,
}

/// Ideal body weight estimates in kilograms
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IdealWeight {
    /// Robinson (1983) estimate
    pub robinson: f64,
    /// Miller (1983) estimate
    pub miller: f64,
    /// Devine (1974) estimate
    pub devine: f64,
    /// Arithmetic mean of the three estimates
    pub mean: f64,
}

/// Circumference measurements for the Navy body fat method (centimeters)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TapeMeasurements {
    pub waist_cm: f64,
    pub neck_cm: f64,
    /// Required for female subjects, ignored for male
    pub hip_cm: Option<f64>,
}

/// Body fat classification, thresholds differ by sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyFatCategory {
    Essential,
    Athletic,
    Fitness,
    Acceptable,
    Obese,
}

impl BodyFatCategory {
    /// Classify a body fat percentage for the given sex
    pub fn from_percent(sex: Sex, percent: f64) -> Self {
        let thresholds = match sex {
            Sex::Male => [6.0, 14.0, 18.0, 25.0],
            Sex::Female => [14.0, 21.0, 25.0, 32.0],
        };
        if percent < thresholds[0] {
            BodyFatCategory::Essential
        } else if percent < thresholds[1] {
            BodyFatCategory::Athletic
        } else if percent < thresholds[2] {
            BodyFatCategory::Fitness
        } else if percent < thresholds[3] {
            BodyFatCategory::Acceptable
        } else {
            BodyFatCategory::Obese
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            BodyFatCategory::Essential => "Essential",
            BodyFatCategory::Athletic => "Athletic",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Acceptable => "Acceptable",
            BodyFatCategory::Obese => "Obese",
        }
    }
}

/// Body fat percentage result
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyFat {
    /// Percentage clamped to [0, 50], rounded to one decimal place
    pub percent: f64,
    pub category: BodyFatCategory,
}

/// Calculate body mass index
///
/// BMI = weight / height², rounded to one decimal place; the category is
/// classified from the rounded value.
///
/// # Errors
///
/// Returns `InvalidInput` if weight or height is not positive.
pub fn bmi(weight_kg: f64, height: HeightM) -> CalcResult<Bmi> {
    if weight_kg <= 0.0 {
        return Err(CalcError::invalid_input("Weight must be positive"));
    }
    if height.value() <= 0.0 {
        return Err(CalcError::invalid_input("Height must be positive"));
    }

    let value = round1(weight_kg / (height.value() * height.value()));
    Ok(Bmi {
        value,
        category: BmiCategory::from_value(value),
    })
}

/// Calculate ideal body weight by the Robinson, Miller, and Devine formulas
///
/// Each formula adds a per-inch increment above the 152.4 cm baseline to a
/// sex-specific base weight. Estimates and their mean are rounded to one
/// decimal place; the mean is taken over the rounded estimates.
///
/// # Errors
///
/// Returns `InvalidInput` if height is not positive.
pub fn ideal_weight(height: HeightM, sex: Sex) -> CalcResult<IdealWeight> {
    if height.value() <= 0.0 {
        return Err(CalcError::invalid_input("Height must be positive"));
    }

    let inches_over_baseline = (height.to_cm().value() - IDEAL_WEIGHT_BASELINE_CM) / CM_PER_INCH;

    let (robinson, miller, devine) = match sex {
        Sex::Male => (
            52.0 + 1.9 * inches_over_baseline,
            56.2 + 1.41 * inches_over_baseline,
            50.0 + 2.3 * inches_over_baseline,
        ),
        Sex::Female => (
            49.0 + 1.7 * inches_over_baseline,
            53.1 + 1.36 * inches_over_baseline,
            45.5 + 2.3 * inches_over_baseline,
        ),
    };

    let robinson = round1(robinson);
    let miller = round1(miller);
    let devine = round1(devine);

    Ok(IdealWeight {
        robinson,
        miller,
        devine,
        mean: round1((robinson + miller + devine) / 3.0),
    })
}

/// Calculate body fat percentage by the U.S. Navy circumference method
///
/// - Male:   86.010 x log10(waist - neck) - 70.041 x log10(height) + 36.76
/// - Female: 163.205 x log10(waist + hip - neck) - 97.684 x log10(height) - 78.387
///
/// The result is clamped to [0, 50] and rounded to one decimal place; the
/// category is classified from the clamped value.
///
/// # Errors
///
/// Returns `InvalidInput` if height or any circumference is not positive, the
/// hip measurement is missing for a female subject, or the circumference term
/// is not positive (waist <= neck for men, waist + hip <= neck for women).
pub fn body_fat(sex: Sex, height: HeightCm, tape: TapeMeasurements) -> CalcResult<BodyFat> {
    if height.value() <= 0.0 {
        return Err(CalcError::invalid_input("Height must be positive"));
    }
    if tape.waist_cm <= 0.0 || tape.neck_cm <= 0.0 {
        return Err(CalcError::invalid_input(
            "Circumference measurements must be positive",
        ));
    }

    let raw = match sex {
        Sex::Male => {
            let girth = tape.waist_cm - tape.neck_cm;
            if girth <= 0.0 {
                return Err(CalcError::invalid_input(
                    "Waist circumference must exceed neck circumference",
                ));
            }
            86.010 * girth.log10() - 70.041 * height.value().log10() + 36.76
        }
        Sex::Female => {
            let hip_cm = tape.hip_cm.ok_or_else(|| {
                CalcError::invalid_input("Hip circumference is required for female subjects")
            })?;
            if hip_cm <= 0.0 {
                return Err(CalcError::invalid_input(
                    "Circumference measurements must be positive",
                ));
            }
            let girth = tape.waist_cm + hip_cm - tape.neck_cm;
            if girth <= 0.0 {
                return Err(CalcError::invalid_input(
                    "Waist plus hip circumference must exceed neck circumference",
                ));
            }
            163.205 * girth.log10() - 97.684 * height.value().log10() - 78.387
        }
    };

    let clamped = raw.clamp(0.0, 50.0);
    if clamped != raw {
        tracing::debug!("Body fat estimate {:.1}% clamped to {:.1}%", raw, clamped);
    }

    let percent = round1(clamped);
    Ok(BodyFat {
        percent,
        category: BodyFatCategory::from_percent(sex, percent),
    })
}
