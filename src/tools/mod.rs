//! MCP Tools
//!
//! Tool implementations behind the MCP server.

pub mod nutrients;
pub mod profiles;
pub mod status;
