//! Data models
//!
//! Plain records exchanged with the client.

mod nutrients;
mod profile;

pub use nutrients::{total_nutrients, BaseNutrients};
pub use profile::{
    ActivityLevel, Anthropometrics, Gender, Goals, HeightUnit, MacroGoals, NormalizedProfile,
    Preferences, ProfileInput, WeightGoal, WeightUnit,
};
