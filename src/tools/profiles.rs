//! Profile MCP Tools
//!
//! Normalization and unit conversion of nutrition profiles.

use serde::Serialize;

use crate::error::Result;
use crate::models::{NormalizedProfile, ProfileInput};
use crate::profile::{convert_profile_units, normalize_profile, parse_height_unit, parse_weight_unit};

/// Response for normalize_profile
#[derive(Debug, Serialize)]
pub struct NormalizeProfileResponse {
    pub profile: NormalizedProfile,
    pub used_fallback_user_id: bool,
}

/// Response for convert_profile_units
#[derive(Debug, Serialize)]
pub struct ConvertProfileResponse {
    pub profile: ProfileInput,
    pub from_weight_unit: &'static str,
    pub from_height_unit: &'static str,
}

/// Normalize a profile, falling back to `fallback_user_id` for the owner
pub fn normalize(profile: &ProfileInput, fallback_user_id: &str) -> NormalizeProfileResponse {
    let used_fallback_user_id = profile.user_id.as_deref().map_or(true, str::is_empty);
    NormalizeProfileResponse {
        profile: normalize_profile(profile, fallback_user_id),
        used_fallback_user_id,
    }
}

/// Convert a profile's body measurements to the named units
pub fn convert_units(
    profile: &ProfileInput,
    weight_unit: &str,
    height_unit: &str,
) -> Result<ConvertProfileResponse> {
    let weight_unit = parse_weight_unit(weight_unit)?;
    let height_unit = parse_height_unit(height_unit)?;

    Ok(ConvertProfileResponse {
        profile: convert_profile_units(profile, weight_unit, height_unit),
        from_weight_unit: profile.preferences.weight_unit.as_str(),
        from_height_unit: profile.preferences.height_unit.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitTrackError;
    use crate::models::{HeightUnit, WeightUnit};

    fn profile(user_id: Option<&str>) -> ProfileInput {
        let mut value = serde_json::json!({
            "anthropometrics": {
                "weight": 176.4, "height": 70, "age": 29.5,
                "gender": "male", "activityLevel": "sedentary"
            },
            "goals": { "weightGoal": "maintain", "targetWeight": 176.4, "weeklyWeightChange": 0 },
            "macroGoals": { "dailyCalories": 2400.4, "protein": 160.6, "carbs": 250, "fat": 80.5 },
            "preferences": { "weightUnit": "lbs", "heightUnit": "in" }
        });
        if let Some(id) = user_id {
            value["userId"] = serde_json::json!(id);
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_normalize_reports_fallback() {
        let resp = normalize(&profile(None), "device-1");
        assert!(resp.used_fallback_user_id);
        assert_eq!(resp.profile.user_id, "device-1");
        assert_eq!(resp.profile.macro_goals.fat, 81.0);
        assert_eq!(resp.profile.anthropometrics.age, 30.0);

        let resp = normalize(&profile(Some("abc")), "device-1");
        assert!(!resp.used_fallback_user_id);
        assert_eq!(resp.profile.user_id, "abc");
    }

    #[test]
    fn test_convert_units() {
        let resp = convert_units(&profile(None), "kg", "cm").unwrap();
        assert_eq!(resp.from_weight_unit, "lbs");
        assert_eq!(resp.from_height_unit, "in");
        assert_eq!(resp.profile.preferences.weight_unit, WeightUnit::Kilograms);
        assert_eq!(resp.profile.preferences.height_unit, HeightUnit::Centimeters);
        assert!((resp.profile.anthropometrics.height - 177.8).abs() < 0.001);
    }

    #[test]
    fn test_convert_units_rejects_unknown_unit() {
        let err = convert_units(&profile(None), "stone", "cm").unwrap_err();
        assert!(matches!(err, FitTrackError::UnknownUnit { kind: "weight", .. }));
        let err = convert_units(&profile(None), "kg", "ft").unwrap_err();
        assert!(matches!(err, FitTrackError::UnknownUnit { kind: "height", .. }));
    }
}
