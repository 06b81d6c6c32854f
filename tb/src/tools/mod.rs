//! Tool system
//!
//! Tools wrap the securegen operations behind a name, a JSON Schema and a
//! text result. Every call gets a `ToolContext` carrying the configured
//! defaults and limits.

mod args;
mod context;
mod error;
mod executor;
mod traits;

pub mod builtin;

pub use context::ToolContext;
pub use error::ToolError;
pub use executor::{ToolCall, ToolDefinition, ToolExecutor};
pub use traits::{Tool, ToolResult};
