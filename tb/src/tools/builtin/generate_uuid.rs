//! generate_uuid tool - version 1 or 4 UUIDs

use async_trait::async_trait;
use securegen::GeneratorRequest;
use serde_json::Value;
use tracing::debug;

use super::render;
use crate::tools::args::optional_usize;
use crate::tools::{Tool, ToolContext, ToolError, ToolResult};

/// Generate one or more UUIDs
pub struct GenerateUuidTool;

#[async_trait]
impl Tool for GenerateUuidTool {
    fn name(&self) -> &'static str {
        "generate_uuid"
    }

    fn description(&self) -> &'static str {
        "Generate UUID(s). Version can be 1 or 4 (default: 4). Set count > 1 to generate multiple UUIDs."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "version": {
                    "type": "integer",
                    "enum": [1, 4],
                    "description": "UUID version (default: 4)"
                },
                "count": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Number of UUIDs to generate (default: 1)"
                }
            }
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "GenerateUuidTool::execute: called");
        let version = match optional_usize(&input, "version", ctx.defaults.uuid_version as usize)
            .and_then(|v| u8::try_from(v).map_err(|_| ToolError::invalid("version", "must be 1 or 4")))
        {
            Ok(v) => v,
            Err(e) => return e.into(),
        };
        let count = match optional_usize(&input, "count", 1).and_then(|n| ctx.check_count(n)) {
            Ok(n) => n,
            Err(e) => return e.into(),
        };

        debug!(version, count, "GenerateUuidTool::execute: generating");
        render::generate(&GeneratorRequest::Uuid { version }, count)
    }
}
