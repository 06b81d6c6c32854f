//! Toolbelt - secure generators, digests and sandboxed arithmetic
//!
//! CLI entry point for listing, describing, calling and serving tools.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use toolbelt::cli::{Cli, Command};
use toolbelt::config::Config;
use toolbelt::serve::serve;
use toolbelt::{ToolCall, ToolContext, ToolExecutor};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolbelt")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > INFO
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("toolbelt.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log level from config is read before the full load so that loading itself is logged
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate()?;

    let executor = ToolExecutor::standard();
    let ctx = ToolContext::new(&config);

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::List => cmd_list(&executor),
        Command::Schema { tool } => cmd_schema(&executor, &tool),
        Command::Call { tool, input } => cmd_call(&executor, &ctx, &tool, input.as_deref()).await,
        Command::Serve => cmd_serve(&executor, &ctx).await,
    }
}

/// Print tool names and descriptions
fn cmd_list(executor: &ToolExecutor) -> Result<()> {
    debug!("cmd_list: called");
    for def in executor.definitions() {
        println!("{}", def.name.cyan().bold());
        println!("    {}", def.description);
    }
    Ok(())
}

/// Print a tool's input schema
fn cmd_schema(executor: &ToolExecutor, tool: &str) -> Result<()> {
    debug!(%tool, "cmd_schema: called");
    let def = executor
        .definition(tool)
        .ok_or_else(|| eyre::eyre!("Unknown tool: {}", tool))?;
    let schema = serde_json::to_string_pretty(&def.input_schema).context("Failed to encode schema")?;
    println!("{}", schema);
    Ok(())
}

/// Run one tool call; an error result becomes a non-zero exit
async fn cmd_call(executor: &ToolExecutor, ctx: &ToolContext, tool: &str, input: Option<&str>) -> Result<()> {
    debug!(%tool, ?input, "cmd_call: called");
    let input: Value = match input {
        Some(text) => serde_json::from_str(text).context("Failed to parse --input as JSON")?,
        None => Value::Object(Default::default()),
    };

    let result = executor.execute(&ToolCall::new("cli", tool, input), ctx).await;
    if result.is_error {
        return Err(eyre::eyre!("{}", result.content));
    }
    println!("{}", result.content);
    Ok(())
}

/// Serve JSON-lines requests on stdin/stdout
async fn cmd_serve(executor: &ToolExecutor, ctx: &ToolContext) -> Result<()> {
    debug!("cmd_serve: called");
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    let handled = serve(executor, ctx, stdin, stdout).await?;
    info!(handled, "cmd_serve: finished");
    Ok(())
}
