//! Per-container extraction strategies.
//!
//! Each supported [`ContainerKind`] maps to one static entry naming the tag
//! that holds its container-specific fields and how those fields are encoded.

use lofty::tag::TagType;

use crate::artwork::MimeSource;
use crate::container::ContainerKind;
use crate::fields::{parse_uint, parse_uint_pair};

/// How a container stores the disc number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DiscEncoding {
    /// `N/M` pair, first component used (`disk`, `TPOS`)
    Pair,
    /// Plain integer (`DISCNUMBER`)
    Integer,
}

impl DiscEncoding {
    pub(crate) fn parse(self, raw: &str) -> u32 {
        match self {
            DiscEncoding::Pair => parse_uint_pair(raw).0,
            DiscEncoding::Integer => parse_uint(raw),
        }
    }
}

#[derive(Debug)]
pub(crate) struct ContainerStrategy {
    /// Tag holding disc, compilation and artwork
    pub tag_type: TagType,
    pub disc: DiscEncoding,
    pub artwork_mime: MimeSource,
}

static MP4: ContainerStrategy = ContainerStrategy {
    tag_type: TagType::Mp4Ilst,
    disc: DiscEncoding::Pair,
    artwork_mime: MimeSource::CoverArtFormat,
};

static MPEG: ContainerStrategy = ContainerStrategy {
    tag_type: TagType::Id3v2,
    disc: DiscEncoding::Pair,
    artwork_mime: MimeSource::Stored,
};

static FLAC: ContainerStrategy = ContainerStrategy {
    tag_type: TagType::VorbisComments,
    disc: DiscEncoding::Integer,
    artwork_mime: MimeSource::Stored,
};

pub(crate) fn strategy_for(kind: ContainerKind) -> Option<&'static ContainerStrategy> {
    match kind {
        ContainerKind::Mp4 => Some(&MP4),
        ContainerKind::Mpeg => Some(&MPEG),
        ContainerKind::Flac => Some(&FLAC),
        ContainerKind::Unsupported(_) => None,
    }
}
