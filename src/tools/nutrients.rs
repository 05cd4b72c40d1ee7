//! Nutrient MCP Tools
//!
//! Serving scaling and meal totals.

use serde::{Deserialize, Serialize};

use crate::models::{total_nutrients, BaseNutrients};
use crate::nutrition::{MetricAmount, ScaledServing, UnitCategory};

/// Response for scale_nutrients
#[derive(Debug, Serialize)]
pub struct ScaleNutrientsResponse {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub serving_size: f64,
    pub serving_size_defaulted: bool,
    pub serving_unit: String,
    pub unit_category: UnitCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milliliters: Option<f64>,
}

impl From<ScaledServing> for ScaleNutrientsResponse {
    fn from(scaled: ScaledServing) -> Self {
        let (grams, milliliters) = match scaled.metric_amount {
            Some(MetricAmount::Grams(g)) => (Some(g), None),
            Some(MetricAmount::Milliliters(ml)) => (None, Some(ml)),
            None => (None, None),
        };
        Self {
            calories: scaled.nutrients.calories,
            protein: scaled.nutrients.protein,
            carbs: scaled.nutrients.carbs,
            fat: scaled.nutrients.fat,
            serving_size: scaled.serving_size.amount(),
            serving_size_defaulted: scaled.serving_size.is_defaulted(),
            serving_unit: scaled.serving_unit,
            unit_category: scaled.unit_category,
            grams,
            milliliters,
        }
    }
}

/// One food in a meal: per-100 base values and the amount eaten
#[derive(Debug, Clone, Deserialize)]
pub struct MealServing {
    pub name: Option<String>,
    pub nutrients: BaseNutrients,
    pub serving_size: String,
    pub serving_unit: String,
}

/// Scaled line of a meal
#[derive(Debug, Serialize)]
pub struct MealServingLine {
    pub name: Option<String>,
    pub nutrients: BaseNutrients,
    pub serving_size_defaulted: bool,
}

/// Response for meal_totals
#[derive(Debug, Serialize)]
pub struct MealTotalsResponse {
    pub items: Vec<MealServingLine>,
    pub total: BaseNutrients,
    pub defaulted_count: usize,
}

/// Scale one food to the serving the user typed
pub fn scale_nutrients(
    nutrients: BaseNutrients,
    serving_size: &str,
    serving_unit: &str,
) -> ScaleNutrientsResponse {
    ScaledServing::compute(&nutrients, serving_size, serving_unit).into()
}

/// Scale every food of a meal and add them up
pub fn meal_totals(servings: &[MealServing]) -> MealTotalsResponse {
    let items: Vec<MealServingLine> = servings
        .iter()
        .map(|s| {
            let scaled = ScaledServing::compute(&s.nutrients, &s.serving_size, &s.serving_unit);
            MealServingLine {
                name: s.name.clone(),
                nutrients: scaled.nutrients,
                serving_size_defaulted: scaled.serving_size.is_defaulted(),
            }
        })
        .collect();

    let total = total_nutrients(items.iter().map(|line| &line.nutrients));
    let defaulted_count = items.iter().filter(|line| line.serving_size_defaulted).count();

    if defaulted_count > 0 {
        tracing::info!(
            "{} of {} meal servings had no usable size and count as zero",
            defaulted_count,
            items.len()
        );
    }

    MealTotalsResponse {
        items,
        total,
        defaulted_count,
    }
}
