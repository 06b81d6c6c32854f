//! hash_text tool - hex digests

use async_trait::async_trait;
use securegen::{DigestRequest, HashAlgorithm, compute_digest};
use serde_json::Value;
use tracing::debug;

use crate::tools::args::{optional_str, required_str};
use crate::tools::{Tool, ToolContext, ToolResult};

/// Hash a string with md5, sha1, sha256 or sha512
pub struct HashTextTool;

#[async_trait]
impl Tool for HashTextTool {
    fn name(&self) -> &'static str {
        "hash_text"
    }

    fn description(&self) -> &'static str {
        "Hash a string using specified algorithm (md5, sha1, sha256, sha512)."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Text to hash (UTF-8)"
                },
                "algorithm": {
                    "type": "string",
                    "enum": ["md5", "sha1", "sha256", "sha512"],
                    "description": "Digest algorithm (default: sha256)"
                }
            },
            "required": ["text"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "HashTextTool::execute: called");
        let text = match required_str(&input, "text") {
            Ok(t) => t,
            Err(e) => return e.into(),
        };
        let algorithm = match optional_str(&input, "algorithm") {
            Ok(Some(name)) => match name.parse::<HashAlgorithm>() {
                Ok(algorithm) => algorithm,
                Err(e) => return ToolResult::error(e.to_string()),
            },
            Ok(None) => ctx.defaults.hash_algorithm,
            Err(e) => return e.into(),
        };

        debug!(%algorithm, len = text.len(), "HashTextTool::execute: hashing");
        let digest = compute_digest(&DigestRequest::new(text, algorithm));
        ToolResult::success(format!("#️⃣ {} Hash: {}", algorithm.as_str().to_uppercase(), digest))
    }
}
