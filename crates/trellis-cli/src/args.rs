use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{MilestoneCommands, PlanCommands};

/// Main command-line interface for the Trellis development plan tool
///
/// Trellis helps managers author Individual Development Plans for their
/// team members and track the milestones inside them. It talks to the HR
/// backend over HTTP and offers both direct CLI commands and an MCP
/// (Model Context Protocol) server mode for integration with AI
/// assistants.
#[derive(Parser)]
#[command(version, about, name = "trellis")]
pub struct Args {
    /// Path to the configuration file. Defaults to
    /// $XDG_CONFIG_HOME/trellis/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Trellis CLI
///
/// The CLI is organized around the two domain resources plus identity
/// helpers:
/// - `plan`: Author, list, and inspect development plans
/// - `milestone`: Update and complete milestones within a plan
/// - `assignees` / `whoami`: Resolve who the backend thinks you are and
///   who you may author plans for
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Manage development plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage milestones within a plan
    #[command(alias = "m")]
    Milestone {
        #[command(subcommand)]
        command: MilestoneCommands,
    },
    /// List the people you may author plans for
    #[command(alias = "a")]
    Assignees,
    /// Show the acting user the backend resolves from your credentials
    Whoami,
    /// Start the MCP server
    Serve,
}
