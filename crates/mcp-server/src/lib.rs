//! Full Stack Web Dev MCP Server
//!
//! Serves a curated catalog of web-development tooling to AI agents via MCP over stdio.
//!
//! ## Tools
//!
//! - `list_tool_categories` - Category overview or the tools in one category
//! - `fetch_tool_reference` - Docs, summary and setup commands for a tool
//! - `framework_quickstart` - Scaffold command for a framework and package manager
//! - `recommend_stack` - Stack recommendation from a project description
//! - `deployment_checklist` - Deployment steps for a hosting provider
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "fullstack-webdev": {
//!       "command": "webdev-mcp",
//!       "env": { "FULLSTACK_WEBDEV_DEFAULT_PROVIDER": "vercel" }
//!     }
//!   }
//! }
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use webdev_catalog::Catalog;

pub mod config;
pub mod render;
pub mod status_probe;
mod tools;

pub use config::ServerConfig;
pub use status_probe::{HttpStatusProbe, ProbeOutcome, StatusProbe};
pub use tools::WebDevReferenceService;

pub async fn main_entry() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting Full Stack Web Dev MCP server");

    if let Err(err) = serve_stdio().await {
        log::error!("Server error: {err:#}");
        return Err(err);
    }

    log::info!("Full Stack Web Dev MCP server stopped");
    Ok(())
}

async fn serve_stdio() -> Result<()> {
    let config = ServerConfig::from_env();
    log::info!("Default deployment provider: {}", config.default_provider);

    let catalog = Catalog::bundled().context("Failed to load bundled catalog")?;
    let probe = HttpStatusProbe::new();
    let service = WebDevReferenceService::new(Arc::new(catalog), config, Arc::new(probe));

    let server = service
        .serve(stdio())
        .await
        .context("Failed to start MCP server")?;
    server.waiting().await.context("MCP server task failed")?;
    Ok(())
}
