//! generate_pin tool - numeric PINs

use async_trait::async_trait;
use securegen::GeneratorRequest;
use serde_json::Value;
use tracing::debug;

use super::render;
use crate::tools::args::optional_usize;
use crate::tools::{Tool, ToolContext, ToolResult};

/// Generate one or more PINs
pub struct GeneratePinTool;

#[async_trait]
impl Tool for GeneratePinTool {
    fn name(&self) -> &'static str {
        "generate_pin"
    }

    fn description(&self) -> &'static str {
        "Generate secure numeric PIN(s). Set count > 1 to generate multiple PINs."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "length": {
                    "type": "integer",
                    "minimum": 4,
                    "description": "Number of digits (default: 6)"
                },
                "count": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Number of PINs to generate (default: 1)"
                }
            }
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "GeneratePinTool::execute: called");
        let length = match optional_usize(&input, "length", ctx.defaults.pin_length) {
            Ok(n) => n,
            Err(e) => return e.into(),
        };
        let count = match optional_usize(&input, "count", 1).and_then(|n| ctx.check_count(n)) {
            Ok(n) => n,
            Err(e) => return e.into(),
        };

        render::generate(&GeneratorRequest::Pin { length }, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_default_pin() {
        let tool = GeneratePinTool;
        let result = tool.execute(json!({}), &ToolContext::default()).await;

        assert!(!result.is_error);
        let pin = result.content.strip_prefix("🔢 PIN: ").unwrap();
        assert_eq!(pin.len(), 6);
        assert!(pin.bytes().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_batch_of_pins() {
        let tool = GeneratePinTool;
        let result = tool.execute(json!({"length": 4, "count": 3}), &ToolContext::default()).await;

        let lines: Vec<&str> = result.content.lines().collect();
        assert_eq!(lines[0], "🔢 Generated 3 PIN(s):");
        for (i, line) in lines[1..].iter().enumerate() {
            let pin = line.strip_prefix(&format!("{}. ", i + 1)).unwrap();
            assert_eq!(pin.len(), 4);
        }
    }

    #[tokio::test]
    async fn test_batch_with_invalid_length_reports_each_slot() {
        let tool = GeneratePinTool;
        let result = tool.execute(json!({"length": 2, "count": 2}), &ToolContext::default()).await;

        assert!(!result.is_error);
        assert!(result.content.contains("1. Error: Invalid spec: PIN length must be at least 4 digits"));
        assert!(result.content.contains("2. Error: "));
    }

    #[tokio::test]
    async fn test_zero_count() {
        let tool = GeneratePinTool;
        let result = tool.execute(json!({"count": 0}), &ToolContext::default()).await;

        assert!(result.is_error);
        assert!(result.content.contains("count"));
    }
}
