//! Subject model
//!
//! Anthropometric input for energy and body composition calculations.

use serde::{Deserialize, Serialize};

use crate::calc::energy;
use crate::calc::units::HeightCm;
use crate::error::CalcResult;

/// Biological sex, selects formula coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Anthropometric measurements for a single assessment
///
/// Transient input record, not persisted by the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnthropometricInput {
    pub weight_kg: f64,
    pub height: HeightCm,
    pub age_years: u32,
    pub sex: Sex,
}

impl AnthropometricInput {
    /// Basal metabolic rate for this subject (kcal/day)
    pub fn bmr(&self) -> CalcResult<f64> {
        energy::bmr(self.weight_kg, self.height, self.age_years, self.sex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_str() {
        assert_eq!(Sex::from_str("male"), Some(Sex::Male));
        assert_eq!(Sex::from_str("F"), Some(Sex::Female));
        assert_eq!(Sex::from_str("other"), None);
    }

    #[test]
    fn test_input_bmr_delegates() {
        let input = AnthropometricInput {
            weight_kg: 70.0,
            height: HeightCm(170.0),
            age_years: 30,
            sex: Sex::Male,
        };
        assert_eq!(input.bmr().unwrap(), 1671.7);
    }

    #[test]
    fn test_input_serde_round_trip() {
        let input = AnthropometricInput {
            weight_kg: 62.5,
            height: HeightCm(168.0),
            age_years: 41,
            sex: Sex::Female,
        };
        let json = serde_json::to_string(&input).unwrap();
        let back: AnthropometricInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.weight_kg, input.weight_kg);
        assert_eq!(back.height, input.height);
        assert_eq!(back.sex, input.sex);
    }
}
