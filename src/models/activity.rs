//! Activity and climate models
//!
//! Enumerations with fixed multiplier tables for energy and hydration needs.

use serde::{Deserialize, Serialize};

/// Physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise, physical job, or 2x/day training
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR
    pub fn tdee_factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Multiplier applied to the base daily water requirement
    pub fn water_factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.0,
            ActivityLevel::Light => 1.1,
            ActivityLevel::Moderate => 1.2,
            ActivityLevel::Active => 1.3,
            ActivityLevel::VeryActive => 1.4,
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very_active" | "very active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }
}

/// Climate adjustment for hydration needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Climate {
    Temperate,
    Hot,
    VeryHot,
}

impl Climate {
    /// Multiplier applied to the daily water requirement
    pub fn factor(&self) -> f64 {
        match self {
            Climate::Temperate => 1.0,
            Climate::Hot => 1.2,
            Climate::VeryHot => 1.4,
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "temperate" => Some(Climate::Temperate),
            "hot" => Some(Climate::Hot),
            "very_hot" | "very hot" => Some(Climate::VeryHot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tdee_factors() {
        assert_eq!(ActivityLevel::Sedentary.tdee_factor(), 1.2);
        assert_eq!(ActivityLevel::Light.tdee_factor(), 1.375);
        assert_eq!(ActivityLevel::Moderate.tdee_factor(), 1.55);
        assert_eq!(ActivityLevel::Active.tdee_factor(), 1.725);
        assert_eq!(ActivityLevel::VeryActive.tdee_factor(), 1.9);
    }

    #[test]
    fn test_water_factors() {
        assert_eq!(ActivityLevel::Sedentary.water_factor(), 1.0);
        assert_eq!(ActivityLevel::VeryActive.water_factor(), 1.4);
    }

    #[test]
    fn test_activity_from_str() {
        assert_eq!(
            ActivityLevel::from_str("Sedentary"),
            Some(ActivityLevel::Sedentary)
        );
        assert_eq!(
            ActivityLevel::from_str("very active"),
            Some(ActivityLevel::VeryActive)
        );
        assert_eq!(ActivityLevel::from_str("extreme"), None);
    }

    #[test]
    fn test_climate_from_str() {
        assert_eq!(Climate::from_str("temperate"), Some(Climate::Temperate));
        assert_eq!(Climate::from_str("very_hot"), Some(Climate::VeryHot));
        assert_eq!(Climate::from_str("arctic"), None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&ActivityLevel::VeryActive).unwrap(),
            "\"very_active\""
        );
        assert_eq!(serde_json::to_string(&Climate::Hot).unwrap(), "\"hot\"");
    }
}
