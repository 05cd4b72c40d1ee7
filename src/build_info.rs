//! Build metadata embedded by `build.rs`

use std::fmt;

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const RAW_BUILD_NUMBER: Option<&str> = option_env!("FITTRACK_BUILD_NUMBER");
const RAW_BUILD_TIMESTAMP: Option<&str> = option_env!("FITTRACK_BUILD_TIMESTAMP");

/// Which build of the crate is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    /// `None` when compiled without the build counter
    pub build_number: Option<u64>,
    pub build_timestamp: Option<&'static str>,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self::from_env_values(RAW_BUILD_NUMBER, RAW_BUILD_TIMESTAMP)
    }

    fn from_env_values(number: Option<&str>, timestamp: Option<&'static str>) -> Self {
        Self {
            version: VERSION,
            build_number: number.and_then(|n| n.trim().parse().ok()),
            build_timestamp: timestamp.filter(|t| !t.is_empty()),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.version)?;
        if let Some(number) = self.build_number {
            write!(f, " build {}", number)?;
        }
        if let Some(timestamp) = self.build_timestamp {
            write!(f, " ({})", timestamp)?;
        }
        Ok(())
    }
}

/// Print the startup line to stderr (stdout carries the MCP stream)
pub fn print_startup_banner() {
    eprintln!("FitTrack {}", BuildInfo::current());
}
