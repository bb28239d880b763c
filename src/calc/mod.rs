//! Calculator module
//!
//! Pure nutrition calculators: energy expenditure, body composition, and
//! daily intake targets.

pub mod body;
pub mod energy;
pub mod intake;
pub mod units;

pub use body::{
    bmi, body_fat, ideal_weight, Bmi, BmiCategory, BodyFat, BodyFatCategory, IdealWeight,
    TapeMeasurements,
};
pub use energy::{bmr, calorie_targets, tdee, CalorieTargets};
pub use intake::{macro_split, water_requirement, MacroSplit, WaterRequirement};
pub use units::{HeightCm, HeightM};
