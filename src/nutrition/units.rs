//! Serving unit recognition
//!
//! Classifies the unit a food is tracked in and, for plain mass and volume
//! units, gives the gram or milliliter equivalent of a serving. The scaler
//! reports these equivalents but never scales by them.

use serde::Serialize;

/// Category of a serving unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Weight/mass units (g, oz, lb, kg)
    Weight,
    /// Volume units (ml, tbsp, cup, etc.)
    Volume,
    /// Count/discrete units (each, piece, serving)
    Count,
    /// Anything else (scoop, slice, patty)
    Custom,
}

impl UnitCategory {
    /// Whether per-100 base values apply directly to this unit
    pub fn is_mass_or_volume(&self) -> bool {
        matches!(self, UnitCategory::Weight | UnitCategory::Volume)
    }
}

pub const G_PER_KG: f64 = 1000.0;
pub const G_PER_LB: f64 = 453.592;

/// Unit names and their size in grams
const MASS_UNITS: &[(&[&str], f64)] = &[
    (&["g", "gram", "grams"], 1.0),
    (&["mg", "milligram", "milligrams"], 0.001),
    (&["kg", "kilogram", "kilograms"], G_PER_KG),
    (&["oz", "ounce", "ounces"], 28.3495),
    (&["lb", "lbs", "pound", "pounds"], G_PER_LB),
];

/// Unit names and their size in milliliters (US customary volumes)
const VOLUME_UNITS: &[(&[&str], f64)] = &[
    (&["ml", "milliliter", "milliliters", "millilitre", "millilitres"], 1.0),
    (&["l", "liter", "liters", "litre", "litres"], 1000.0),
    (&["tsp", "teaspoon", "teaspoons"], 4.92892),
    (&["tbsp", "tablespoon", "tablespoons"], 14.7868),
    (&["fl oz", "floz", "fluid ounce", "fluid ounces"], 29.5735),
    (&["cup", "cups"], 236.588),
    (&["pint", "pints"], 473.176),
    (&["quart", "quarts"], 946.353),
    (&["gallon", "gallons"], 3785.41),
];

const COUNT_UNITS: &[&str] = &[
    "each", "piece", "pieces", "item", "items", "count", "unit", "units", "serving", "servings",
];

fn lookup(table: &[(&[&str], f64)], unit: &str) -> Option<f64> {
    let name = unit.trim().to_lowercase();
    table
        .iter()
        .find(|(names, _)| names.contains(&name.as_str()))
        .map(|(_, factor)| *factor)
}

/// Grams in one `unit`, for mass units
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    lookup(MASS_UNITS, unit)
}

/// Milliliters in one `unit`, for volume units
pub fn ml_per_unit(unit: &str) -> Option<f64> {
    lookup(VOLUME_UNITS, unit)
}

/// Determine the category of a unit string
pub fn categorize_unit(unit: &str) -> UnitCategory {
    if grams_per_unit(unit).is_some() {
        UnitCategory::Weight
    } else if ml_per_unit(unit).is_some() {
        UnitCategory::Volume
    } else if COUNT_UNITS.contains(&unit.trim().to_lowercase().as_str()) {
        UnitCategory::Count
    } else {
        UnitCategory::Custom
    }
}

/// A serving expressed in grams or milliliters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricAmount {
    Grams(f64),
    Milliliters(f64),
}

/// Gram or milliliter equivalent of `amount` of `unit`; `None` for count and
/// custom units, which have no fixed size
pub fn metric_equivalent(amount: f64, unit: &str) -> Option<MetricAmount> {
    if let Some(factor) = grams_per_unit(unit) {
        return Some(MetricAmount::Grams(amount * factor));
    }
    ml_per_unit(unit).map(|factor| MetricAmount::Milliliters(amount * factor))
}
