//! # Metadata Module
//!
//! Read-only access to audio file metadata through the `lofty` tag library.
//!
//! ## Overview
//!
//! This module handles:
//! - Opening and validating audio files ([`TagFile`])
//! - Generic tag fields (title, artist, album, genre, track, year)
//! - Audio properties (duration)
//! - Container-specific fields (disc number, compilation flag, embedded
//!   artwork) for MP4, MPEG/ID3v2 and FLAC/Xiph containers
//!
//! Container parsing itself is entirely delegated to `lofty`.

pub mod artwork;
pub mod container;
pub mod error;
pub mod fields;
pub mod file;

mod strategy;

pub use artwork::{Artwork, ArtworkType};
pub use container::ContainerKind;
pub use error::{MetadataError, Result};
pub use file::TagFile;
