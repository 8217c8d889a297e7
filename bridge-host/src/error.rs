use thiserror::Error;

/// Failures surfaced to the host runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// `open` could not parse the path as a valid audio file.
    #[error("Invalid file: {0}")]
    InvalidFile(String),

    /// The handle token was never issued, or has already been released.
    #[error("Bad handle: {0}")]
    BadHandle(u64),
}

impl HostError {
    /// Reason term handed back to the host: `invalid_file` for `{error,
    /// invalid_file}` results, `badarg` for argument failures.
    pub fn atom(&self) -> &'static str {
        match self {
            HostError::InvalidFile(_) => "invalid_file",
            HostError::BadHandle(_) => "badarg",
        }
    }
}

pub type Result<T> = std::result::Result<T, HostError>;
