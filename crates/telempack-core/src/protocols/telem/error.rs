use thiserror::Error;

/// Errors returned by telemetry packet parsing and reading.
#[derive(Debug, Error)]
pub enum TelemError {
    #[error("wrong packet length: need exactly {needed} bytes, got {actual}")]
    WrongLength { needed: usize, actual: usize },
}
