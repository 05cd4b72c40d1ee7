//! FitTrack Library
//!
//! Nutrient scaling, nutrition profile normalization and the MCP tools
//! built on them.

pub mod build_info;
pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod profile;
pub mod rounding;
pub mod tools;

pub use error::{FitTrackError, Result};
pub use models::{BaseNutrients, NormalizedProfile, ProfileInput};
pub use nutrition::scale_nutrients;
pub use profile::normalize_profile;
