use thiserror::Error;

use crate::container::ContainerKind;

#[derive(Error, Debug)]
pub enum MetadataError {
    /// The path could not be parsed as a recognized, valid audio container.
    #[error("Invalid file {path}: {reason}")]
    InvalidFile { path: String, reason: String },

    /// A container-specific field was requested from a container that has no
    /// extraction strategy.
    #[error("Unsupported container: {0}")]
    UnsupportedContainer(ContainerKind),

    /// The file could not be accessed at all.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl MetadataError {
    pub(crate) fn invalid_file(path: impl Into<String>, reason: impl ToString) -> Self {
        MetadataError::InvalidFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MetadataError>;
