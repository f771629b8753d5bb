//! Error types for text parsing and configuration loading.
//!
//! None of these reach the user directly: the coordinate model and the
//! component list turn an [`InputError`] into an ignored edit, and the binding
//! layer converts everything else into a `JsValue` string.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("not a finite number: {0:?}")]
    NotANumber(String),

    #[error("unknown field: {0:?}")]
    UnknownField(String),

    #[error("unknown operation: {0:?}")]
    UnknownOperation(String),

    #[error("component index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
