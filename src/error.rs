use std::io;

use thiserror::Error;

/// Failures reported by a [`MetricsSource`](crate::system::source::MetricsSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The pid was enumerated but exited before it could be queried.
    #[error("process {0} vanished before it could be sampled")]
    ProcessVanished(u32),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal too small ({width}x{height})")]
    TerminalTooSmall { width: u16, height: u16 },
    #[error("interrupted")]
    Interrupted,
    #[error("render error: {0}")]
    Render(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Interrupted => 130,
            _ => 1,
        }
    }

    /// One-line text printed after the terminal has been restored.
    pub fn user_message(&self) -> String {
        match self {
            AppError::TerminalTooSmall { .. } => crate::ui::TOO_SMALL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
