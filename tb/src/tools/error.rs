//! Tool error types

use thiserror::Error;

/// Errors raised while reading tool inputs or dispatching a call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("{name} is required")]
    MissingArgument { name: String },

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("{name} must be at most {limit} (got {value})")]
    LimitExceeded { name: String, limit: usize, value: usize },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },
}

impl ToolError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_exceeded_message() {
        let err = ToolError::LimitExceeded {
            name: "count".to_string(),
            limit: 100,
            value: 500,
        };

        let msg = err.to_string();
        assert!(msg.contains("count"));
        assert!(msg.contains("100"));
        assert!(msg.contains("500"));
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = ToolError::invalid("length", "expected a non-negative integer");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'length': expected a non-negative integer"
        );
    }
}
