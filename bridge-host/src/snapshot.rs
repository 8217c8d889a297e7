use serde::{Deserialize, Serialize};

/// Every field of one opened file, read in a single call.
///
/// Container-specific fields carry their fallback values (0, `false`, `None`)
/// for unsupported containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSnapshot {
    /// Container kind, e.g. "FLAC" or "Opus"
    pub container: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub track: u32,
    pub year: u32,
    pub disc: u32,
    pub compilation: bool,
    /// Duration in whole seconds
    pub length_secs: u64,
    /// MIME type of the first embedded picture, if any
    pub artwork_mime_type: Option<String>,
}
