//! Nutrition calculations
//!
//! Serving size parsing, nutrient scaling and serving unit recognition.

pub mod scaler;
pub mod serving;
pub mod units;

pub use scaler::{scale_nutrients, scale_serving, ScaledServing};
pub use serving::ServingSize;
pub use units::{
    categorize_unit, grams_per_unit, metric_equivalent, ml_per_unit, MetricAmount, UnitCategory,
};
