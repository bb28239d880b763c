//! Energy expenditure calculators
//!
//! Basal metabolic rate (revised Harris-Benedict), total daily energy
//! expenditure, and calorie targets for common weight goals.

use serde::{Deserialize, Serialize};

use super::units::{round1, HeightCm};
use crate::error::{CalcError, CalcResult};
use crate::models::{ActivityLevel, Sex};

/// Calorie targets derived from TDEE for common weight goals (kcal/day)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalorieTargets {
    /// Weight loss at a moderate deficit (TDEE - 500)
    pub moderate_deficit: f64,
    /// Weight loss at an aggressive deficit (TDEE - 750)
    pub aggressive_deficit: f64,
    /// Slow weight gain (TDEE + 300)
    pub slow_surplus: f64,
    /// Fast weight gain (TDEE + 500)
    pub fast_surplus: f64,
    /// Lower bound of the maintenance range (TDEE - 100)
    pub maintenance_min: f64,
    /// Upper bound of the maintenance range (TDEE + 100)
    pub maintenance_max: f64,
}

/// Calculate basal metabolic rate using the revised Harris-Benedict equation
///
/// - Male:   88.362 + 13.397 x weight + 4.799 x height - 5.677 x age
/// - Female: 447.593 + 9.247 x weight + 3.098 x height - 4.330 x age
///
/// Result in kcal/day, rounded to one decimal place.
///
/// # Errors
///
/// Returns `InvalidInput` if weight or height is not positive, or age is
/// outside 1..=130.
pub fn bmr(weight_kg: f64, height: HeightCm, age_years: u32, sex: Sex) -> CalcResult<f64> {
    if weight_kg <= 0.0 {
        return Err(CalcError::invalid_input("Weight must be positive"));
    }
    if height.value() <= 0.0 {
        return Err(CalcError::invalid_input("Height must be positive"));
    }
    if !(1..=130).contains(&age_years) {
        return Err(CalcError::invalid_input(
            "Age must be between 1 and 130 years",
        ));
    }

    let age = f64::from(age_years);
    let value = match sex {
        Sex::Male => 88.362 + 13.397 * weight_kg + 4.799 * height.value() - 5.677 * age,
        Sex::Female => 447.593 + 9.247 * weight_kg + 3.098 * height.value() - 4.330 * age,
    };

    Ok(round1(value))
}

/// Calculate total daily energy expenditure
///
/// TDEE = BMR x activity factor (1.2 sedentary through 1.9 very active),
/// rounded to one decimal place.
///
/// # Errors
///
/// Returns `InvalidInput` if `bmr` is not positive.
pub fn tdee(bmr: f64, activity: ActivityLevel) -> CalcResult<f64> {
    if bmr <= 0.0 {
        return Err(CalcError::invalid_input("BMR must be positive"));
    }

    Ok(round1(bmr * activity.tdee_factor()))
}

/// Calculate calorie targets for weight loss, gain, and maintenance
///
/// Fixed offsets from TDEE: -500/-750 kcal for loss, +300/+500 kcal for gain,
/// and a +/-100 kcal maintenance band.
///
/// # Errors
///
/// Returns `InvalidInput` if `tdee` is not positive.
pub fn calorie_targets(tdee: f64) -> CalcResult<CalorieTargets> {
    if tdee <= 0.0 {
        return Err(CalcError::invalid_input("TDEE must be positive"));
    }

    Ok(CalorieTargets {
        moderate_deficit: round1(tdee - 500.0),
        aggressive_deficit: round1(tdee - 750.0),
        slow_surplus: round1(tdee + 300.0),
        fast_surplus: round1(tdee + 500.0),
        maintenance_min: round1(tdee - 100.0),
        maintenance_max: round1(tdee + 100.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male_golden() {
        // 88.362 + 13.397*70 + 4.799*170 - 5.677*30 = 1671.672
        assert_eq!(bmr(70.0, HeightCm(170.0), 30, Sex::Male).unwrap(), 1671.7);
    }

    #[test]
    fn test_bmr_female_golden() {
        // 447.593 + 9.247*60 + 3.098*165 - 4.330*25 = 1405.333
        assert_eq!(bmr(60.0, HeightCm(165.0), 25, Sex::Female).unwrap(), 1405.3);
    }

    #[test]
    fn test_bmr_rejects_bad_input() {
        assert!(bmr(0.0, HeightCm(170.0), 30, Sex::Male).is_err());
        assert!(bmr(-70.0, HeightCm(170.0), 30, Sex::Male).is_err());
        assert!(bmr(70.0, HeightCm(0.0), 30, Sex::Male).is_err());
        assert!(bmr(70.0, HeightCm(170.0), 0, Sex::Male).is_err());
        assert!(bmr(70.0, HeightCm(170.0), 131, Sex::Male).is_err());
    }

    #[test]
    fn test_bmr_idempotent() {
        let a = bmr(82.3, HeightCm(179.5), 44, Sex::Female).unwrap();
        let b = bmr(82.3, HeightCm(179.5), 44, Sex::Female).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_tdee_factors() {
        assert_eq!(tdee(1671.7, ActivityLevel::Sedentary).unwrap(), 2006.0);
        assert_eq!(tdee(1671.7, ActivityLevel::Moderate).unwrap(), 2591.1);
        assert_eq!(tdee(1500.0, ActivityLevel::Light).unwrap(), 2062.5);
        assert_eq!(tdee(1500.0, ActivityLevel::VeryActive).unwrap(), 2850.0);
    }

    #[test]
    fn test_tdee_rejects_nonpositive_bmr() {
        assert_eq!(
            tdee(0.0, ActivityLevel::Sedentary),
            Err(CalcError::invalid_input("BMR must be positive"))
        );
        assert!(tdee(-100.0, ActivityLevel::Active).is_err());
    }

    #[test]
    fn test_calorie_targets() {
        let targets = calorie_targets(2006.0).unwrap();
        assert_eq!(targets.moderate_deficit, 1506.0);
        assert_eq!(targets.aggressive_deficit, 1256.0);
        assert_eq!(targets.slow_surplus, 2306.0);
        assert_eq!(targets.fast_surplus, 2506.0);
        assert_eq!(targets.maintenance_min, 1906.0);
        assert_eq!(targets.maintenance_max, 2106.0);
    }

    #[test]
    fn test_calorie_targets_rejects_nonpositive() {
        assert!(calorie_targets(0.0).is_err());
    }
}
