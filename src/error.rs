//! Custom error types for rulediff.

/// Errors raised while registering configuration through the builder.
///
/// Every builder registration validates its arguments at call time, so a
/// misconfigured comparison can never run.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{param} must not be empty")]
    EmptyPath { param: &'static str },

    #[error("identifier path must not be empty")]
    EmptyIdentifier,

    #[error("type label must not be blank")]
    BlankTypeLabel,
}

impl ConfigError {
    pub fn empty_path(param: &'static str) -> Self {
        Self::EmptyPath { param }
    }
}

/// Errors raised while rendering a diff.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to serialize diff to JSON: {source}")]
    JsonSerializationError {
        #[from]
        source: serde_json::Error,
    },
}
