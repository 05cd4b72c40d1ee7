//! Nutrient scaling
//!
//! Scales per-100 base nutrients to a user-entered serving size.

use serde::Serialize;

use super::serving::ServingSize;
use super::units::{categorize_unit, metric_equivalent, MetricAmount, UnitCategory};
use crate::models::BaseNutrients;
use crate::rounding::{round_half_up, round_to};

/// Amount the base nutrients are expressed per (100 g or 100 ml)
pub const BASE_AMOUNT: f64 = 100.0;

/// Decimal places kept for protein, carbs and fat
pub const MACRO_DECIMALS: u32 = 1;

/// Scale `nutrients` (per 100 units) to the serving typed by the user.
///
/// The serving size text is parsed leniently; when no number can be read the
/// serving counts as zero and all-zero nutrients are returned. Calories are
/// rounded to whole numbers, macros to one decimal.
///
/// `serving_unit` does not change the result: every unit is treated as the
/// same mass/volume unit the base values are expressed in.
pub fn scale_nutrients(
    nutrients: &BaseNutrients,
    serving_size_text: &str,
    serving_unit: &str,
) -> BaseNutrients {
    scale_serving(nutrients, ServingSize::parse(serving_size_text), serving_unit)
}

/// Same as [`scale_nutrients`] for an already parsed serving size
pub fn scale_serving(
    nutrients: &BaseNutrients,
    serving: ServingSize,
    serving_unit: &str,
) -> BaseNutrients {
    let size = serving.amount();
    if size == 0.0 {
        return BaseNutrients::zero();
    }

    let category = categorize_unit(serving_unit);
    if !category.is_mass_or_volume() {
        tracing::debug!(
            "Scaling '{}' ({:?}) as if it were the per-{} base unit",
            serving_unit,
            category,
            BASE_AMOUNT
        );
    }

    let factor = size / BASE_AMOUNT;

    BaseNutrients {
        calories: round_half_up(nutrients.calories * factor),
        protein: round_to(nutrients.protein * factor, MACRO_DECIMALS),
        carbs: round_to(nutrients.carbs * factor, MACRO_DECIMALS),
        fat: round_to(nutrients.fat * factor, MACRO_DECIMALS),
    }
}

/// Scaled nutrients together with how the input was interpreted
#[derive(Debug, Clone, Serialize)]
pub struct ScaledServing {
    pub nutrients: BaseNutrients,
    pub serving_size: ServingSize,
    pub serving_unit: String,
    pub unit_category: UnitCategory,
    /// The serving in grams or milliliters, for known mass and volume units.
    /// Reported only; the nutrients above are not scaled by it.
    pub metric_amount: Option<MetricAmount>,
}

impl ScaledServing {
    pub fn compute(nutrients: &BaseNutrients, serving_size_text: &str, serving_unit: &str) -> Self {
        let serving_size = ServingSize::parse(serving_size_text);
        Self {
            nutrients: scale_serving(nutrients, serving_size, serving_unit),
            serving_size,
            serving_unit: serving_unit.to_string(),
            unit_category: categorize_unit(serving_unit),
            metric_amount: metric_equivalent(serving_size.amount(), serving_unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BaseNutrients {
        BaseNutrients::new(100.0, 20.0, 10.0, 5.0)
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 0.001, "{} != {}", a, b);
    }

    #[test]
    fn test_identity_at_base_amount() {
        let b = BaseNutrients::new(52.4, 0.26, 13.81, 0.17);
        let scaled = scale_nutrients(&b, "100", "g");
        assert_eq!(scaled.calories, 52.0);
        assert_close(scaled.protein, 0.3);
        assert_close(scaled.carbs, 13.8);
        assert_close(scaled.fat, 0.2);
    }

    #[test]
    fn test_zero_and_empty_serving() {
        assert!(scale_nutrients(&sample(), "0", "g").is_zero());
        assert!(scale_nutrients(&sample(), "", "g").is_zero());
        assert!(scale_nutrients(&sample(), "abc", "g").is_zero());
    }

    #[test]
    fn test_overflowing_serving_is_zero() {
        assert!(scale_nutrients(&sample(), "1e400", "g").is_zero());
        assert!(scale_nutrients(&sample(), "Infinity", "g").is_zero());
        assert!(ScaledServing::compute(&sample(), "1e400", "g")
            .serving_size
            .is_defaulted());
    }

    #[test]
    fn test_double_serving() {
        let scaled = scale_nutrients(&sample(), "200", "g");
        assert_eq!(scaled, BaseNutrients::new(200.0, 40.0, 20.0, 10.0));
    }

    #[test]
    fn test_half_serving() {
        let scaled = scale_nutrients(&sample(), "50", "g");
        assert_eq!(scaled, BaseNutrients::new(50.0, 10.0, 5.0, 2.5));

        let with_suffix = scale_nutrients(&sample(), "50g", "g");
        assert_eq!(with_suffix, scaled);
    }

    #[test]
    fn test_rounding_carries_to_next_tenth() {
        let b = BaseNutrients::new(0.0, 3.33, 0.0, 0.0);
        let scaled = scale_nutrients(&b, "300", "g");
        assert_eq!(scaled.protein, 10.0);
    }

    #[test]
    fn test_calories_round_to_whole_number() {
        let b = BaseNutrients::new(33.0, 0.0, 0.0, 0.0);
        assert_eq!(scale_nutrients(&b, "150", "g").calories, 50.0);
        assert_eq!(scale_nutrients(&b, "10", "g").calories, 3.0);
    }

    #[test]
    fn test_unit_does_not_change_result() {
        let grams = scale_nutrients(&sample(), "75", "g");
        assert_eq!(scale_nutrients(&sample(), "75", "ml"), grams);
        assert_eq!(scale_nutrients(&sample(), "75", "serving"), grams);
        assert_eq!(scale_nutrients(&sample(), "75", "scoop"), grams);
    }

    #[test]
    fn test_input_not_modified() {
        let b = sample();
        let _ = scale_nutrients(&b, "250", "g");
        assert_eq!(b, sample());
    }

    #[test]
    fn test_scaled_serving_reports_interpretation() {
        let result = ScaledServing::compute(&sample(), "oops", "cup");
        assert!(result.serving_size.is_defaulted());
        assert_eq!(result.unit_category, UnitCategory::Volume);
        assert!(result.nutrients.is_zero());

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["serving_size"]["kind"], "defaulted");
        assert_eq!(json["unit_category"], "volume");
        assert_eq!(json["metric_amount"]["milliliters"], 0.0);
    }

    #[test]
    fn test_metric_amount_does_not_scale() {
        let cups = ScaledServing::compute(&sample(), "2", "cup");
        match cups.metric_amount {
            Some(MetricAmount::Milliliters(ml)) => assert_close(ml, 473.176),
            other => panic!("expected milliliters, got {:?}", other),
        }
        // Still scaled as 2 base units, not 473 ml
        assert_eq!(cups.nutrients, scale_nutrients(&sample(), "2", "g"));

        let ounces = ScaledServing::compute(&sample(), "3", "oz");
        assert_eq!(ounces.metric_amount, Some(MetricAmount::Grams(3.0 * 28.3495)));

        assert_eq!(ScaledServing::compute(&sample(), "1", "scoop").metric_amount, None);
    }
}
