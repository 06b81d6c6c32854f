//! Toolbelt - named tools over the securegen core
//!
//! Each tool takes a JSON object, fills omitted inputs from [`config::DefaultsConfig`],
//! and renders its result as a single text block. Tools are dispatched by name
//! through [`tools::ToolExecutor`], either one call at a time from the CLI or as
//! a JSON-lines stream (see [`serve`]).

pub mod cli;
pub mod config;
pub mod serve;
pub mod tools;

pub use config::Config;
pub use tools::{Tool, ToolCall, ToolContext, ToolDefinition, ToolError, ToolExecutor, ToolResult};
