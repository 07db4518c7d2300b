use thiserror::Error;

/// Failures at the session command boundary (WebSocket input, stopped sessions).
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("dashboard session has stopped")]
    SessionStopped,
    #[error("invalid command: {0}")]
    Invalid(String),
}
