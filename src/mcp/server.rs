//! FitTrack MCP Server Implementation
//!
//! Exposes nutrient scaling and profile normalization as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::FitTrackError;
use crate::models::{BaseNutrients, ProfileInput};
use crate::tools::nutrients::{self, MealServing};
use crate::tools::profiles;
use crate::tools::status::StatusTracker;

/// FitTrack MCP Service
#[derive(Clone)]
pub struct FitTrackService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Arc<Config>,
    tool_router: ToolRouter<FitTrackService>,
}

impl FitTrackService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(
                config.fallback_user_id.clone(),
            ))),
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleNutrientsParams {
    /// Calories per 100 g/ml
    pub calories: f64,
    /// Protein grams per 100 g/ml
    pub protein: f64,
    /// Carb grams per 100 g/ml
    pub carbs: f64,
    /// Fat grams per 100 g/ml
    pub fat: f64,
    /// Serving size as typed by the user (e.g., "150" or "150g")
    pub serving_size: String,
    /// Serving unit (e.g., "g", "ml")
    #[serde(default = "default_serving_unit")]
    pub serving_unit: String,
}

fn default_serving_unit() -> String {
    "g".to_string()
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MealServingParams {
    /// Optional food name, echoed back in the response
    pub name: Option<String>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub serving_size: String,
    #[serde(default = "default_serving_unit")]
    pub serving_unit: String,
}

impl From<MealServingParams> for MealServing {
    fn from(p: MealServingParams) -> Self {
        Self {
            name: p.name,
            nutrients: BaseNutrients::new(p.calories, p.protein, p.carbs, p.fat),
            serving_size: p.serving_size,
            serving_unit: p.serving_unit,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MealTotalsParams {
    /// Foods eaten in the meal
    pub servings: Vec<MealServingParams>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NormalizeProfileParams {
    /// Nutrition profile: anthropometrics, goals, macroGoals, preferences, optional userId (camelCase fields)
    pub profile: serde_json::Value,
    /// User id to use when the profile has none (defaults to the server setting)
    pub fallback_user_id: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertProfileUnitsParams {
    /// Nutrition profile (camelCase fields)
    pub profile: serde_json::Value,
    /// Target weight unit: "kg" or "lbs"
    pub weight_unit: String,
    /// Target height unit: "cm" or "in"
    pub height_unit: String,
}

// ============================================================================
// Helpers
// ============================================================================

fn to_mcp_error(e: FitTrackError) -> McpError {
    if e.is_invalid_input() {
        McpError::invalid_params(e.to_string(), None)
    } else {
        McpError::internal_error(e.to_string(), None)
    }
}

fn parse_profile(value: serde_json::Value) -> Result<ProfileInput, McpError> {
    serde_json::from_value(value).map_err(|e| to_mcp_error(FitTrackError::Json(e)))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FitTrackService {
    // --- Status ---

    #[tool(description = "Get the current status of the FitTrack service including build info and process information")]
    async fn fittrack_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for scaling foods and normalizing nutrition profiles. Call this when unsure how the FitTrack tools behave.")]
    fn fittrack_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::USAGE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(USAGE_INSTRUCTIONS)]))
    }

    // --- Nutrients ---

    #[tool(description = "Scale per-100g/ml nutrients to a serving size. Calories round to whole numbers, macros to one decimal. An unparseable serving size counts as 0.")]
    fn scale_nutrients(&self, Parameters(p): Parameters<ScaleNutrientsParams>) -> Result<CallToolResult, McpError> {
        let base = BaseNutrients::new(p.calories, p.protein, p.carbs, p.fat);
        let result = nutrients::scale_nutrients(base, &p.serving_size, &p.serving_unit);
        json_result(&result)
    }

    #[tool(description = "Scale each food of a meal to its serving size and return the per-item values and the meal total")]
    fn meal_totals(&self, Parameters(p): Parameters<MealTotalsParams>) -> Result<CallToolResult, McpError> {
        let servings: Vec<MealServing> = p.servings.into_iter().map(MealServing::from).collect();
        json_result(&nutrients::meal_totals(&servings))
    }

    // --- Profiles ---

    #[tool(description = "Normalize a nutrition profile: round weight/targetWeight to 0.1, weeklyWeightChange to 0.01, height, age and macro goals to whole numbers, and resolve the user id")]
    fn normalize_profile(&self, Parameters(p): Parameters<NormalizeProfileParams>) -> Result<CallToolResult, McpError> {
        let profile = parse_profile(p.profile)?;
        let fallback = p
            .fallback_user_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| self.config.fallback_user_id.clone());
        json_result(&profiles::normalize(&profile, &fallback))
    }

    #[tool(description = "Convert a nutrition profile's weight (kg/lbs) and height (cm/in) values to other units. Values are not rounded.")]
    fn convert_profile_units(&self, Parameters(p): Parameters<ConvertProfileUnitsParams>) -> Result<CallToolResult, McpError> {
        let profile = parse_profile(p.profile)?;
        let result = profiles::convert_units(&profile, &p.weight_unit, &p.height_unit)
            .map_err(to_mcp_error)?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FitTrackService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fittrack".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("FitTrack".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FitTrack - nutrient scaling and nutrition profile normalization. \
                 Call fittrack_instructions first. \
                 Nutrients: scale_nutrients, meal_totals. \
                 Profiles: normalize_profile, convert_profile_units. \
                 Status: fittrack_status."
                    .into(),
            ),
        }
    }
}
