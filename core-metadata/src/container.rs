//! Container kinds the dispatcher distinguishes between.
//!
//! The kind is decided once, when a file is opened, from the file type the
//! tag library detected. Every container-specific query matches on it
//! exhaustively.

use lofty::file::FileType;
use std::fmt;

/// Audio container of an opened file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// MPEG-4 audio (`.m4a`, `.mp4`, ...) carrying an `ilst` atom
    Mp4,
    /// MPEG audio (`.mp3`) carrying ID3v2 frames
    Mpeg,
    /// FLAC carrying Xiph (Vorbis) comments
    Flac,
    /// Any other format the tag library can read. Generic fields work,
    /// container-specific fields do not.
    Unsupported(FileType),
}

impl ContainerKind {
    /// Whether disc, compilation and artwork queries have a strategy.
    pub fn is_supported(&self) -> bool {
        !matches!(self, ContainerKind::Unsupported(_))
    }
}

impl From<FileType> for ContainerKind {
    fn from(file_type: FileType) -> Self {
        match file_type {
            FileType::Mp4 => ContainerKind::Mp4,
            FileType::Mpeg => ContainerKind::Mpeg,
            FileType::Flac => ContainerKind::Flac,
            other => ContainerKind::Unsupported(other),
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Mp4 => f.write_str("MP4"),
            ContainerKind::Mpeg => f.write_str("MPEG"),
            ContainerKind::Flac => f.write_str("FLAC"),
            ContainerKind::Unsupported(file_type) => write!(f, "{:?}", file_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_file_types() {
        assert_eq!(ContainerKind::from(FileType::Mp4), ContainerKind::Mp4);
        assert_eq!(ContainerKind::from(FileType::Mpeg), ContainerKind::Mpeg);
        assert_eq!(ContainerKind::from(FileType::Flac), ContainerKind::Flac);
    }

    #[test]
    fn test_other_file_types_are_unsupported() {
        for file_type in [FileType::Opus, FileType::Vorbis, FileType::Wav, FileType::Aiff] {
            let kind = ContainerKind::from(file_type);
            assert_eq!(kind, ContainerKind::Unsupported(file_type));
            assert!(!kind.is_supported());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ContainerKind::Mp4.to_string(), "MP4");
        assert_eq!(ContainerKind::Mpeg.to_string(), "MPEG");
        assert_eq!(ContainerKind::Flac.to_string(), "FLAC");
        assert_eq!(ContainerKind::Unsupported(FileType::Opus).to_string(), "Opus");
    }
}
