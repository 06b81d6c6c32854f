//! JSON-lines serving over a byte stream
//!
//! Each input line is one request `{"id"?, "tool", "input"?}`; each produces
//! exactly one response line `{"id", "content", "is_error"}` in order. A line
//! that is not a valid request still gets an error response, so the stream
//! never stalls on bad input.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::tools::{ToolCall, ToolContext, ToolExecutor, ToolResult};

/// One request line
#[derive(Debug, Clone, Deserialize)]
pub struct ServeRequest {
    /// Caller-chosen id, echoed back unchanged
    #[serde(default)]
    pub id: Option<Value>,

    pub tool: String,

    #[serde(default)]
    pub input: Value,
}

/// One response line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServeResponse {
    pub id: Option<Value>,
    pub content: String,
    pub is_error: bool,
}

impl ServeResponse {
    fn new(id: Option<Value>, result: ToolResult) -> Self {
        Self {
            id,
            content: result.content,
            is_error: result.is_error,
        }
    }
}

/// Answer requests from `reader` until end of input; returns the number handled
pub async fn serve<R, W>(executor: &ToolExecutor, ctx: &ToolContext, reader: R, mut writer: W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("serve: started");
    let mut lines = reader.lines();
    let mut handled = 0usize;

    while let Some(line) = lines.next_line().await.context("Failed to read request")? {
        if line.trim().is_empty() {
            continue;
        }
        handled += 1;

        let response = match serde_json::from_str::<ServeRequest>(&line) {
            Ok(request) => {
                debug!(tool = %request.tool, handled, "serve: request");
                let call = ToolCall::new(format!("req-{}", handled), request.tool, request.input);
                let result = executor.execute(&call, ctx).await;
                ServeResponse::new(request.id, result)
            }
            Err(e) => {
                warn!(%e, "serve: malformed request");
                ServeResponse::new(None, ToolResult::error(format!("Invalid request: {}", e)))
            }
        };

        let mut encoded = serde_json::to_string(&response).context("Failed to encode response")?;
        encoded.push('\n');
        writer
            .write_all(encoded.as_bytes())
            .await
            .context("Failed to write response")?;
        writer.flush().await.context("Failed to flush response")?;
    }

    info!(handled, "serve: input closed");
    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn run(input: &str) -> Vec<ServeResponse> {
        let executor = ToolExecutor::standard();
        let ctx = ToolContext::default();
        let mut output = Vec::new();

        serve(&executor, &ctx, input.as_bytes(), &mut output).await.unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_responses_in_order_with_ids() {
        let input = concat!(
            r#"{"id": 1, "tool": "calculate", "input": {"expression": "2 ** 10"}}"#,
            "\n",
            r#"{"id": "b", "tool": "hash_text", "input": {"text": "", "algorithm": "md5"}}"#,
            "\n"
        );

        let responses = run(input).await;

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].id, Some(json!(1)));
        assert_eq!(responses[0].content, "🧮 2 ** 10 = 1024");
        assert!(!responses[0].is_error);
        assert_eq!(responses[1].id, Some(json!("b")));
        assert_eq!(responses[1].content, "#️⃣ MD5 Hash: d41d8cd98f00b204e9800998ecf8427e");
    }

    #[tokio::test]
    async fn test_missing_input_uses_defaults() {
        let responses = run("{\"tool\": \"generate_pin\"}\n").await;

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].id, None);
        assert_eq!(responses[0].content.len(), "🔢 PIN: ".len() + 6);
    }

    #[tokio::test]
    async fn test_bad_lines_get_error_responses() {
        let input = "not json\n\n{\"id\": 7, \"tool\": \"nope\"}\n";
        let responses = run(input).await;

        assert_eq!(responses.len(), 2);
        assert!(responses[0].is_error);
        assert!(responses[0].content.starts_with("Invalid request:"));
        assert!(responses[1].is_error);
        assert_eq!(responses[1].id, Some(json!(7)));
        assert_eq!(responses[1].content, "Unknown tool: nope");
    }

    #[tokio::test]
    async fn test_empty_input() {
        let executor = ToolExecutor::standard();
        let mut output = Vec::new();

        let handled = serve(&executor, &ToolContext::default(), &b""[..], &mut output).await.unwrap();

        assert_eq!(handled, 0);
        assert!(output.is_empty());
    }
}
