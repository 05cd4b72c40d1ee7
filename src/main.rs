//! FitTrack
//!
//! MCP server for nutrient scaling and nutrition profile normalization.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use fittrack::build_info;
use fittrack::config::Config;
use fittrack::mcp::FitTrackService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    // Logging goes to stderr so it doesn't interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Serving MCP on stdio");
    tracing::info!("Fallback user id: {}", config.fallback_user_id);

    let service = FitTrackService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
