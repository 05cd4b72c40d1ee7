//! MCP server
//!
//! Tool routing and server metadata for the stdio MCP transport.

pub mod server;

pub use server::FitTrackService;
