//! FitTrack Status Tool
//!
//! Runtime status of the server and usage notes for assistants.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage notes returned by the fittrack_instructions tool
pub const USAGE_INSTRUCTIONS: &str = r#"
# FitTrack Tool Instructions

## Scaling a food to a serving

Base nutrients are always per 100 g (solids) or per 100 ml (liquids).

**Tool:** `scale_nutrients`
- `calories`, `protein`, `carbs`, `fat`: values per 100 g/ml
- `serving_size`: the amount exactly as the user typed it ("150", "150g", "1.5e2")
- `serving_unit`: "g", "ml", ...

Rules:
- Calories are rounded to whole numbers, protein/carbs/fat to one decimal.
- If the serving size has no leading number (empty, "abc"), it counts as 0 and
  every value is 0. Check `serving_size_defaulted` in the response.
- The unit does not change the math. "1 cup" is treated as 1 unit of the per-100 base,
  so convert cups/tbsp/scoops to grams or ml first.

**Tool:** `meal_totals` scales a list of foods the same way and adds them up.

## Nutrition profiles

**Tool:** `normalize_profile`
- Rounds: weight and target weight to 0.1, weekly change to 0.01, height, age
  and all macro goals to whole numbers.
- `userId` from the profile wins; otherwise `fallback_user_id`, otherwise the
  server's configured default.

**Tool:** `convert_profile_units`
- Re-expresses weight (kg/lbs) and height (cm/in). Values are not rounded;
  call `normalize_profile` afterwards.
"#;

/// Runtime status of the FitTrack service
#[derive(Debug, Clone, Serialize)]
pub struct FitTrackStatus {
    #[serde(flatten)]
    pub build: BuildInfo,

    pub fallback_user_id: String,

    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Collects runtime information for the status tool
pub struct StatusTracker {
    start_time: Instant,
    started_at: chrono::DateTime<chrono::Utc>,
    fallback_user_id: String,
}

impl StatusTracker {
    pub fn new(fallback_user_id: impl Into<String>) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
            fallback_user_id: fallback_user_id.into(),
        }
    }

    pub fn get_status(&self) -> FitTrackStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FitTrackStatus {
            build: BuildInfo::current(),
            fallback_user_id: self.fallback_user_id.clone(),
            started_at: self.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
