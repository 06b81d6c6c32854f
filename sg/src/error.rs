//! SecureGen error types

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors returned by generators, the digest engine and the expression evaluator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid spec: {0}")]
    InvalidSpec(String),

    #[error("Unsupported UUID version {version}: only versions 1 and 4 are supported")]
    UnsupportedVersion { version: u8 },

    #[error("Unsupported algorithm '{name}'. Choose from: md5, sha1, sha256, sha512")]
    UnsupportedAlgorithm { name: String },

    #[error("Syntax error at position {position}: {message}")]
    Syntax { position: usize, message: String },

    #[error("Identifier '{name}' is not allowed")]
    DisallowedIdentifier { name: String },

    #[error("Evaluation error in {operation}: {reason}")]
    Evaluation { operation: String, reason: String },
}

impl GenError {
    pub(crate) fn syntax(position: usize, message: impl Into<String>) -> Self {
        GenError::Syntax {
            position,
            message: message.into(),
        }
    }

    pub(crate) fn evaluation(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        GenError::Evaluation {
            operation: operation.into(),
            reason: reason.into(),
        }
    }
}
