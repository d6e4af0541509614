#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Simulated network failure. Re-issuing the same request may succeed.
    #[error("Failed to load content. Please try again.")]
    Transient,
    #[error("Invalid page number: {0}. Pages start at 1")]
    InvalidPage(u32),
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
