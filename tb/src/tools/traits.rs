//! Tool trait definition

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::ToolError;
use super::context::ToolContext;

/// A named operation the dispatcher can invoke
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (the dispatch key)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> Value;

    /// Execute the tool
    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult;
}

/// Result of a tool execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResult {
    pub content: String,
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(content: impl Into<String>) -> Self {
        debug!("ToolResult::success: called");
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    /// Create an error result
    pub fn error(content: impl Into<String>) -> Self {
        debug!("ToolResult::error: called");
        Self {
            content: content.into(),
            is_error: true,
        }
    }
}

impl From<ToolError> for ToolResult {
    fn from(err: ToolError) -> Self {
        Self::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success("🔢 PIN: 123456");
        assert!(!result.is_error);
        assert_eq!(result.content, "🔢 PIN: 123456");
    }

    #[test]
    fn test_tool_result_error() {
        let result = ToolResult::error("PIN length must be at least 4 digits");
        assert!(result.is_error);
        assert_eq!(result.content, "PIN length must be at least 4 digits");
    }

    #[test]
    fn test_tool_result_from_tool_error() {
        let result: ToolResult = ToolError::MissingArgument {
            name: "text".to_string(),
        }
        .into();
        assert!(result.is_error);
        assert_eq!(result.content, "text is required");
    }
}
