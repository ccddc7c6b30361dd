//! Error types for guard generation.
//!
//! The pipeline has one defined failure mode of its own (the target class is
//! missing from the input) plus a boundary failure when the parser capability
//! itself cannot produce a tree. Everything else degrades gracefully instead
//! of erroring: missing annotations fall back to defaults and non-method
//! members are skipped.

use thiserror::Error;

/// Failures raised by the generation pipeline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GuardGenError {
    /// No top-level class declaration in the input matched the requested name.
    #[error("class `{target}` not found at top level of {input}")]
    TargetNotFound { input: String, target: String },

    /// The tree-sitter parser could not produce a syntax tree for the input.
    #[error("failed to parse {input} as TypeScript")]
    Parse { input: String },
}

impl GuardGenError {
    /// Create a target-not-found error for the given input and class name.
    pub fn target_not_found(input: impl Into<String>, target: impl Into<String>) -> Self {
        GuardGenError::TargetNotFound {
            input: input.into(),
            target: target.into(),
        }
    }
}
