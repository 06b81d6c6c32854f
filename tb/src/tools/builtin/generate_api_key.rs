//! generate_api_key tool - alphanumeric keys

use async_trait::async_trait;
use securegen::GeneratorRequest;
use serde_json::Value;
use tracing::debug;

use super::render;
use crate::tools::args::optional_usize;
use crate::tools::{Tool, ToolContext, ToolResult};

/// Generate one or more API keys
pub struct GenerateApiKeyTool;

#[async_trait]
impl Tool for GenerateApiKeyTool {
    fn name(&self) -> &'static str {
        "generate_api_key"
    }

    fn description(&self) -> &'static str {
        "Generate secure API key(s) (alphanumeric only). Set count > 1 to generate multiple API keys."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "length": {
                    "type": "integer",
                    "minimum": 16,
                    "description": "Key length in characters (default: 32)"
                },
                "count": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Number of keys to generate (default: 1)"
                }
            }
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "GenerateApiKeyTool::execute: called");
        let length = match optional_usize(&input, "length", ctx.defaults.api_key_length) {
            Ok(n) => n,
            Err(e) => return e.into(),
        };
        let count = match optional_usize(&input, "count", 1).and_then(|n| ctx.check_count(n)) {
            Ok(n) => n,
            Err(e) => return e.into(),
        };

        render::generate(&GeneratorRequest::ApiKey { length }, count)
    }
}
