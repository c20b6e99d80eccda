//! Trellis CLI Application
//!
//! Command-line interface for the trellis development plan tool.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, TrellisMcpServer};
use renderer::TerminalRenderer;
use trellis_core::api::{ApiClient, HttpApiClient};
use trellis_core::params::ListPlans;
use trellis_core::Config;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { config, no_color, command } = Args::parse();

    let config = Config::load(config.as_deref()).context("Failed to load configuration")?;
    let api: Arc<dyn ApiClient> = Arc::new(
        HttpApiClient::from_config(&config.api).context("Failed to initialize API client")?,
    );

    let renderer = TerminalRenderer::new(!no_color);

    info!("Trellis started");

    match command {
        Some(Plan { command }) => {
            Cli::new(api, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Milestone { command }) => {
            Cli::new(api, renderer)
                .handle_milestone_command(command)
                .await
        }
        Some(Assignees) => Cli::new(api, renderer).list_assignees().await,
        Some(Whoami) => Cli::new(api, renderer).whoami().await,
        Some(Serve) => {
            info!("Starting Trellis MCP server");
            run_stdio_server(TrellisMcpServer::new(api))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(api, renderer)
                .list_plans(&ListPlans::default())
                .await
        }
    }
}
