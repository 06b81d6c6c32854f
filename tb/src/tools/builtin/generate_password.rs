//! generate_password tool - passwords covering every selected character class

use async_trait::async_trait;
use securegen::{GeneratorRequest, PasswordSpec};
use serde_json::Value;
use tracing::debug;

use super::render;
use crate::tools::args::{optional_bool, optional_usize};
use crate::tools::{Tool, ToolContext, ToolError, ToolResult};

/// Generate one or more passwords
pub struct GeneratePasswordTool;

impl GeneratePasswordTool {
    fn spec(input: &Value, ctx: &ToolContext) -> Result<PasswordSpec, ToolError> {
        Ok(PasswordSpec {
            length: optional_usize(input, "length", ctx.defaults.password_length)?,
            uppercase: optional_bool(input, "include_uppercase", true)?,
            lowercase: optional_bool(input, "include_lowercase", true)?,
            digits: optional_bool(input, "include_digits", true)?,
            symbols: optional_bool(input, "include_symbols", true)?,
        })
    }
}

#[async_trait]
impl Tool for GeneratePasswordTool {
    fn name(&self) -> &'static str {
        "generate_password"
    }

    fn description(&self) -> &'static str {
        "Generate secure password(s). Customize with length and character types. Set count > 1 to generate multiple passwords."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "length": {
                    "type": "integer",
                    "minimum": 8,
                    "description": "Password length (default: 16)"
                },
                "count": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Number of passwords to generate (default: 1)"
                },
                "include_uppercase": {
                    "type": "boolean",
                    "description": "Include A-Z (default: true)"
                },
                "include_lowercase": {
                    "type": "boolean",
                    "description": "Include a-z (default: true)"
                },
                "include_digits": {
                    "type": "boolean",
                    "description": "Include 0-9 (default: true)"
                },
                "include_symbols": {
                    "type": "boolean",
                    "description": "Include punctuation symbols (default: true)"
                }
            }
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "GeneratePasswordTool::execute: called");
        let spec = match Self::spec(&input, ctx) {
            Ok(spec) => spec,
            Err(e) => return e.into(),
        };
        let count = match optional_usize(&input, "count", 1).and_then(|n| ctx.check_count(n)) {
            Ok(n) => n,
            Err(e) => return e.into(),
        };

        debug!(length = spec.length, count, "GeneratePasswordTool::execute: generating");
        render::generate(&GeneratorRequest::Password(spec), count)
    }
}
