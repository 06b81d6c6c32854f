//! ToolContext - execution context for tools

use tracing::debug;

use crate::config::{Config, DefaultsConfig, LimitsConfig};

use super::ToolError;

/// Defaults and limits shared by every call
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    /// Values for omitted inputs
    pub defaults: DefaultsConfig,

    /// Bounds on `count` and expression length
    pub limits: LimitsConfig,
}

impl ToolContext {
    /// Create a context from loaded configuration
    pub fn new(config: &Config) -> Self {
        debug!(?config.limits, "ToolContext::new: called");
        Self {
            defaults: config.defaults.clone(),
            limits: config.limits.clone(),
        }
    }

    /// Check a batch size against `limits.max_batch`
    pub fn check_count(&self, count: usize) -> Result<usize, ToolError> {
        debug!(count, max_batch = self.limits.max_batch, "ToolContext::check_count: called");
        if count == 0 {
            return Err(ToolError::invalid("count", "must be at least 1"));
        }
        if count > self.limits.max_batch {
            return Err(ToolError::LimitExceeded {
                name: "count".to_string(),
                limit: self.limits.max_batch,
                value: count,
            });
        }
        Ok(count)
    }

    /// Check an expression against `limits.max_expression_len`
    pub fn check_expression<'a>(&self, expression: &'a str) -> Result<&'a str, ToolError> {
        debug!(len = expression.len(), "ToolContext::check_expression: called");
        if expression.len() > self.limits.max_expression_len {
            return Err(ToolError::LimitExceeded {
                name: "expression length".to_string(),
                limit: self.limits.max_expression_len,
                value: expression.len(),
            });
        }
        Ok(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_config() {
        let mut config = Config::default();
        config.defaults.pin_length = 8;
        config.limits.max_batch = 3;

        let ctx = ToolContext::new(&config);
        assert_eq!(ctx.defaults.pin_length, 8);
        assert_eq!(ctx.limits.max_batch, 3);
    }

    #[test]
    fn test_check_count() {
        let ctx = ToolContext::default();

        assert_eq!(ctx.check_count(1), Ok(1));
        assert_eq!(ctx.check_count(100), Ok(100));
        assert!(matches!(ctx.check_count(0), Err(ToolError::InvalidArgument { .. })));
        assert!(matches!(
            ctx.check_count(101),
            Err(ToolError::LimitExceeded { limit: 100, value: 101, .. })
        ));
    }

    #[test]
    fn test_check_expression() {
        let mut ctx = ToolContext::default();
        ctx.limits.max_expression_len = 5;

        assert_eq!(ctx.check_expression("1 + 2"), Ok("1 + 2"));
        assert!(matches!(
            ctx.check_expression("1 + 2 + 3"),
            Err(ToolError::LimitExceeded { limit: 5, value: 9, .. })
        ));
    }
}
