//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Toolbelt - secure generators, digests and sandboxed arithmetic
#[derive(Parser, Debug)]
#[command(
    name = "tb",
    about = "Secure generators, digests and sandboxed arithmetic as callable tools",
    version,
    after_help = "Logs are written to: ~/.local/share/toolbelt/logs/toolbelt.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List available tools
    List,

    /// Print a tool's input schema as JSON
    Schema {
        /// Tool name
        tool: String,
    },

    /// Call a tool once and print its result
    Call {
        /// Tool name
        tool: String,

        /// Tool input as a JSON object (default: {})
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Answer JSON-lines requests from stdin on stdout
    Serve,
}
