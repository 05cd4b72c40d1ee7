//! Nutrition profile handling
//!
//! Normalization of raw profiles and body measurement unit conversion.

pub mod conversion;
pub mod normalizer;

pub use conversion::{
    convert_height, convert_profile_units, convert_weight, parse_height_unit, parse_weight_unit,
};
pub use normalizer::normalize_profile;
