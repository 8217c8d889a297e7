//! Embedded artwork extraction.
//!
//! Only the first picture of a container is ever surfaced. Its MIME type is
//! either the type stored alongside the picture, or, for MP4 cover art, one of
//! the four image formats the `covr` atom can declare.

use bytes::Bytes;
use lofty::picture::{MimeType, Picture, PictureType};

/// Embedded artwork/cover image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    /// MIME type (e.g., "image/jpeg"). Empty if the container declared none.
    pub mime_type: String,
    /// Raw image bytes, copied verbatim
    pub data: Bytes,
    /// Picture type (Cover Front, Back, etc.)
    pub picture_type: ArtworkType,
}

/// Type of artwork/cover image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkType {
    /// Front cover
    CoverFront,
    /// Back cover
    CoverBack,
    /// Artist/performer
    Artist,
    /// Other/unspecified
    Other,
}

impl From<PictureType> for ArtworkType {
    fn from(picture_type: PictureType) -> Self {
        use lofty::picture::PictureType as PT;
        match picture_type {
            PT::CoverFront => ArtworkType::CoverFront,
            PT::CoverBack => ArtworkType::CoverBack,
            PT::Artist | PT::Conductor | PT::LeadArtist | PT::Band => ArtworkType::Artist,
            _ => ArtworkType::Other,
        }
    }
}

/// Where a container's artwork MIME type comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MimeSource {
    /// `covr` format code: JPEG, PNG, BMP or GIF, anything else is empty
    CoverArtFormat,
    /// MIME string stored with the picture
    Stored,
}

impl Artwork {
    pub(crate) fn from_picture(picture: &Picture, source: MimeSource) -> Self {
        let mime_type = match source {
            MimeSource::CoverArtFormat => cover_art_mime(picture.mime_type()).to_string(),
            MimeSource::Stored => stored_mime(picture.mime_type()),
        };

        Artwork {
            mime_type,
            data: Bytes::copy_from_slice(picture.data()),
            picture_type: ArtworkType::from(picture.pic_type()),
        }
    }
}

fn cover_art_mime(mime_type: Option<&MimeType>) -> &'static str {
    match mime_type {
        Some(MimeType::Jpeg) => "image/jpeg",
        Some(MimeType::Png) => "image/png",
        Some(MimeType::Bmp) => "image/bmp",
        Some(MimeType::Gif) => "image/gif",
        _ => "",
    }
}

fn stored_mime(mime_type: Option<&MimeType>) -> String {
    mime_type
        .map(|mime| mime.as_str().to_string())
        .unwrap_or_default()
}
