//! Profile normalization
//!
//! Applies a fixed rounding precision to every numeric profile field and
//! resolves the owning user id. Enum fields are copied as they are.

use crate::models::{Anthropometrics, Goals, MacroGoals, NormalizedProfile, ProfileInput};
use crate::rounding::round_to;

pub const WEIGHT_DECIMALS: u32 = 1;
pub const HEIGHT_DECIMALS: u32 = 0;
pub const AGE_DECIMALS: u32 = 0;
pub const TARGET_WEIGHT_DECIMALS: u32 = 1;
pub const WEEKLY_WEIGHT_CHANGE_DECIMALS: u32 = 2;
pub const MACRO_GOAL_DECIMALS: u32 = 0;

/// Normalize a raw profile.
///
/// Each field is rounded from the original input on its own. NaN inputs stay
/// NaN. The profile's own `user_id` wins unless it is missing or empty.
pub fn normalize_profile(profile: &ProfileInput, fallback_user_id: &str) -> NormalizedProfile {
    let user_id = resolve_user_id(profile.user_id.as_deref(), fallback_user_id);

    let a = &profile.anthropometrics;
    let g = &profile.goals;
    let m = &profile.macro_goals;

    NormalizedProfile {
        anthropometrics: Anthropometrics {
            weight: round_to(a.weight, WEIGHT_DECIMALS),
            height: round_to(a.height, HEIGHT_DECIMALS),
            age: round_to(a.age, AGE_DECIMALS),
            gender: a.gender,
            activity_level: a.activity_level,
        },
        goals: Goals {
            weight_goal: g.weight_goal,
            target_weight: round_to(g.target_weight, TARGET_WEIGHT_DECIMALS),
            weekly_weight_change: round_to(g.weekly_weight_change, WEEKLY_WEIGHT_CHANGE_DECIMALS),
        },
        macro_goals: MacroGoals {
            daily_calories: round_to(m.daily_calories, MACRO_GOAL_DECIMALS),
            protein: round_to(m.protein, MACRO_GOAL_DECIMALS),
            carbs: round_to(m.carbs, MACRO_GOAL_DECIMALS),
            fat: round_to(m.fat, MACRO_GOAL_DECIMALS),
        },
        preferences: profile.preferences,
        user_id,
    }
}

fn resolve_user_id(own: Option<&str>, fallback: &str) -> String {
    match own {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            tracing::debug!("Profile has no user id, using fallback '{}'", fallback);
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Gender, HeightUnit, Preferences, WeightGoal, WeightUnit};

    fn raw_profile(user_id: Option<&str>) -> ProfileInput {
        ProfileInput {
            anthropometrics: Anthropometrics {
                weight: 80.123,
                height: 180.6,
                age: 30.9,
                gender: Gender::Male,
                activity_level: ActivityLevel::ModeratelyActive,
            },
            goals: Goals {
                weight_goal: WeightGoal::Lose,
                target_weight: 75.555,
                weekly_weight_change: 0.555,
            },
            macro_goals: MacroGoals {
                daily_calories: 2000.9,
                protein: 150.1,
                carbs: 200.5,
                fat: 65.4,
            },
            preferences: Preferences {
                weight_unit: WeightUnit::Kilograms,
                height_unit: HeightUnit::Centimeters,
            },
            user_id: user_id.map(str::to_string),
        }
    }

    #[test]
    fn test_rounds_each_field_to_its_precision() {
        let normalized = normalize_profile(&raw_profile(None), "fallback-id");

        assert_eq!(normalized.anthropometrics.weight, 80.1);
        assert_eq!(normalized.anthropometrics.height, 181.0);
        assert_eq!(normalized.anthropometrics.age, 31.0);
        assert_eq!(normalized.goals.target_weight, 75.6);
        assert_eq!(normalized.goals.weekly_weight_change, 0.56);
        assert_eq!(normalized.macro_goals.daily_calories, 2001.0);
        assert_eq!(normalized.macro_goals.protein, 150.0);
        assert_eq!(normalized.macro_goals.carbs, 201.0);
        assert_eq!(normalized.macro_goals.fat, 65.0);
    }

    #[test]
    fn test_provided_user_id_wins() {
        let normalized = normalize_profile(&raw_profile(Some("provided-id")), "default-id");
        assert_eq!(normalized.user_id, "provided-id");
    }

    #[test]
    fn test_missing_or_empty_user_id_uses_fallback() {
        assert_eq!(normalize_profile(&raw_profile(None), "fallback-id").user_id, "fallback-id");
        assert_eq!(normalize_profile(&raw_profile(Some("")), "fallback-id").user_id, "fallback-id");
    }

    #[test]
    fn test_enums_pass_through() {
        let raw = raw_profile(None);
        let normalized = normalize_profile(&raw, "x");
        assert_eq!(normalized.anthropometrics.gender, Gender::Male);
        assert_eq!(normalized.anthropometrics.activity_level, ActivityLevel::ModeratelyActive);
        assert_eq!(normalized.goals.weight_goal, WeightGoal::Lose);
        assert_eq!(normalized.preferences, raw.preferences);
    }

    #[test]
    fn test_nan_propagates() {
        let mut raw = raw_profile(None);
        raw.anthropometrics.weight = f64::NAN;
        let normalized = normalize_profile(&raw, "x");
        assert!(normalized.anthropometrics.weight.is_nan());
        assert_eq!(normalized.anthropometrics.height, 181.0);
    }

    #[test]
    fn test_negative_weekly_change_rounds_half_up() {
        let mut raw = raw_profile(None);
        raw.goals.weekly_weight_change = -0.25;
        raw.goals.target_weight = -0.25;
        let normalized = normalize_profile(&raw, "x");
        assert_eq!(normalized.goals.weekly_weight_change, -0.25);
        assert_eq!(normalized.goals.target_weight, -0.2);
    }

    #[test]
    fn test_input_not_modified() {
        let raw = raw_profile(Some("id"));
        let _ = normalize_profile(&raw, "x");
        assert_eq!(raw, raw_profile(Some("id")));
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let normalized = normalize_profile(&raw_profile(None), "fallback-id");
        let json = serde_json::to_value(&normalized).unwrap();
        assert_eq!(json["userId"], "fallback-id");
        assert_eq!(json["macroGoals"]["dailyCalories"], 2001.0);
        assert_eq!(json["goals"]["weeklyWeightChange"], 0.56);
        assert_eq!(json["anthropometrics"]["activityLevel"], "moderately_active");
    }
}
