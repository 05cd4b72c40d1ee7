//! Body measurement unit conversion
//!
//! Maps profile values between metric and imperial display units.

use crate::error::{FitTrackError, Result};
use crate::models::{HeightUnit, Preferences, ProfileInput, WeightUnit};
use crate::nutrition::units::{G_PER_KG, G_PER_LB};

pub const CM_PER_INCH: f64 = 2.54;

pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    match (from, to) {
        (WeightUnit::Kilograms, WeightUnit::Pounds) => value * G_PER_KG / G_PER_LB,
        (WeightUnit::Pounds, WeightUnit::Kilograms) => value * G_PER_LB / G_PER_KG,
        _ => value,
    }
}

pub fn convert_height(value: f64, from: HeightUnit, to: HeightUnit) -> f64 {
    match (from, to) {
        (HeightUnit::Centimeters, HeightUnit::Inches) => value / CM_PER_INCH,
        (HeightUnit::Inches, HeightUnit::Centimeters) => value * CM_PER_INCH,
        _ => value,
    }
}

/// Re-express a profile's body measurements in other units.
///
/// Weight, target weight and weekly change follow `weight_unit`; height
/// follows `height_unit`. Values are not rounded; normalize afterwards.
pub fn convert_profile_units(
    profile: &ProfileInput,
    weight_unit: WeightUnit,
    height_unit: HeightUnit,
) -> ProfileInput {
    let from = profile.preferences;
    let weight = |v: f64| convert_weight(v, from.weight_unit, weight_unit);

    let mut converted = profile.clone();
    converted.anthropometrics.weight = weight(profile.anthropometrics.weight);
    converted.anthropometrics.height =
        convert_height(profile.anthropometrics.height, from.height_unit, height_unit);
    converted.goals.target_weight = weight(profile.goals.target_weight);
    converted.goals.weekly_weight_change = weight(profile.goals.weekly_weight_change);
    converted.preferences = Preferences {
        weight_unit,
        height_unit,
    };
    converted
}

/// Parse a weight unit name, reporting unknown names as errors
pub fn parse_weight_unit(s: &str) -> Result<WeightUnit> {
    WeightUnit::from_str(s).ok_or_else(|| FitTrackError::UnknownUnit {
        kind: "weight",
        value: s.to_string(),
    })
}

/// Parse a height unit name, reporting unknown names as errors
pub fn parse_height_unit(s: &str) -> Result<HeightUnit> {
    HeightUnit::from_str(s).ok_or_else(|| FitTrackError::UnknownUnit {
        kind: "height",
        value: s.to_string(),
    })
}
