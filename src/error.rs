// src/error.rs
use thiserror::Error;

pub type SlugResult<T> = Result<T, SlugError>;

#[derive(Debug, Error)]
pub enum SlugError {
    /// No usable slug source was configured, or the configured source could
    /// not be read from the record.
    #[error("invalid slug source: {0}")]
    InvalidSource(String),

    /// The collision-resolution loop hit its retry ceiling.
    #[error("slug space exhausted for base {base:?} after {attempts} attempts")]
    Exhausted { base: String, attempts: u32 },

    #[error("persistence error: {0}")]
    Persistence(String),
}

impl SlugError {
    pub fn invalid_source(msg: impl Into<String>) -> Self {
        Self::InvalidSource(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}
