use thiserror::Error;

/// Construction-time failures.
///
/// The retrieve path itself has no error type: every lookup outcome is
/// folded into a redirect directive.
#[derive(Debug, Clone, Error)]
pub enum RedirectorError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
