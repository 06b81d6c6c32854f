//! generate_token tool - hex tokens

use async_trait::async_trait;
use securegen::GeneratorRequest;
use serde_json::Value;
use tracing::debug;

use super::render;
use crate::tools::args::optional_usize;
use crate::tools::{Tool, ToolContext, ToolResult};

/// Generate one or more hex tokens
pub struct GenerateTokenTool;

#[async_trait]
impl Tool for GenerateTokenTool {
    fn name(&self) -> &'static str {
        "generate_token"
    }

    fn description(&self) -> &'static str {
        "Generate secure hex token(s). Length is in bytes (output will be 2x in hex). Set count > 1 to generate multiple tokens."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "length": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Number of random bytes (default: 32)"
                },
                "count": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Number of tokens to generate (default: 1)"
                }
            }
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "GenerateTokenTool::execute: called");
        let length_bytes = match optional_usize(&input, "length", ctx.defaults.token_bytes) {
            Ok(n) => n,
            Err(e) => return e.into(),
        };
        let count = match optional_usize(&input, "count", 1).and_then(|n| ctx.check_count(n)) {
            Ok(n) => n,
            Err(e) => return e.into(),
        };

        render::generate(&GeneratorRequest::Token { length_bytes }, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_default_token() {
        let tool = GenerateTokenTool;
        let result = tool.execute(json!({}), &ToolContext::default()).await;

        assert!(!result.is_error);
        let token = result.content.strip_prefix("🎟️ Token: ").unwrap();
        assert_eq!(token.len(), 64);
        assert!(token.bytes().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[tokio::test]
    async fn test_length_in_bytes() {
        let tool = GenerateTokenTool;
        let result = tool.execute(json!({"length": 4}), &ToolContext::default()).await;

        let token = result.content.strip_prefix("🎟️ Token: ").unwrap();
        assert_eq!(token.len(), 8);
    }

    #[tokio::test]
    async fn test_zero_length() {
        let tool = GenerateTokenTool;
        let result = tool.execute(json!({"length": 0}), &ToolContext::default()).await;
        assert!(result.is_error);
    }
}
