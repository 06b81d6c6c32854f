//! calculate tool - sandboxed arithmetic

use async_trait::async_trait;
use securegen::evaluate_expression;
use serde_json::Value;
use tracing::debug;

use crate::tools::args::required_str;
use crate::tools::{Tool, ToolContext, ToolResult};

/// Evaluate an arithmetic expression over the allow-listed functions
pub struct CalculateTool;

#[async_trait]
impl Tool for CalculateTool {
    fn name(&self) -> &'static str {
        "calculate"
    }

    fn description(&self) -> &'static str {
        "Perform mathematical calculations. Supports +, -, *, /, ** and the functions abs, round, min, max, sum, \
         pow, sqrt, sin, cos, tan, log, log10, exp, ceil, floor with constants pi and e. \
         Example: sqrt(144) + pow(2, 3)"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "expression": {
                    "type": "string",
                    "description": "Arithmetic expression, e.g. sin(pi/2)"
                }
            },
            "required": ["expression"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        debug!(?input, "CalculateTool::execute: called");
        let expression = match required_str(&input, "expression").and_then(|e| ctx.check_expression(e)) {
            Ok(e) => e,
            Err(e) => return e.into(),
        };

        match evaluate_expression(expression) {
            Ok(value) => {
                debug!(%value, "CalculateTool::execute: evaluated");
                ToolResult::success(format!("🧮 {} = {}", expression, value))
            }
            Err(e) => {
                debug!(%e, "CalculateTool::execute: rejected");
                ToolResult::error(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn calculate(expression: &str) -> ToolResult {
        CalculateTool
            .execute(json!({ "expression": expression }), &ToolContext::default())
            .await
    }

    #[tokio::test]
    async fn test_examples() {
        assert_eq!(calculate("sqrt(144) + pow(2, 3)").await.content, "🧮 sqrt(144) + pow(2, 3) = 20.0");
        assert_eq!(calculate("sin(pi/2)").await.content, "🧮 sin(pi/2) = 1.0");
        assert_eq!(calculate("7 * 6").await.content, "🧮 7 * 6 = 42");
    }

    #[tokio::test]
    async fn test_rejects_code() {
        let result = calculate("__import__('os').system('ls')").await;

        assert!(result.is_error);
        assert_eq!(result.content, "Identifier '__import__' is not allowed");
    }

    #[tokio::test]
    async fn test_domain_error() {
        let result = calculate("1 / 0").await;

        assert!(result.is_error);
        assert_eq!(result.content, "Evaluation error in /: division by zero");
    }

    #[tokio::test]
    async fn test_expression_too_long() {
        let mut ctx = ToolContext::default();
        ctx.limits.max_expression_len = 8;

        let result = CalculateTool.execute(json!({"expression": "1 + 2 + 3 + 4"}), &ctx).await;
        assert!(result.is_error);
        assert!(result.content.contains("at most 8"));
    }

    #[tokio::test]
    async fn test_long_chain_is_an_error_with_raised_limit() {
        let mut ctx = ToolContext::default();
        ctx.limits.max_expression_len = 200_000;

        let expression = format!("{}1", "1+".repeat(50_000));
        let result = CalculateTool.execute(json!({ "expression": expression }), &ctx).await;
        assert!(result.is_error);
        assert!(result.content.contains("Syntax error"), "{}", result.content);
    }

    #[tokio::test]
    async fn test_missing_expression() {
        let result = CalculateTool.execute(json!({}), &ToolContext::default()).await;

        assert!(result.is_error);
        assert_eq!(result.content, "expression is required");
    }
}
