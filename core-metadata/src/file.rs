//! Opened, validity-checked audio files.
//!
//! A [`TagFile`] owns one parsed file for as long as it lives. Parsing happens
//! eagerly in [`TagFile::open`]; every query afterwards reads from the parsed
//! tags in memory and never touches storage again.
//!
//! ## Usage
//!
//! ```ignore
//! use core_metadata::TagFile;
//!
//! let file = TagFile::open("song.flac")?;
//! println!("{} - {}", file.artist(), file.title());
//! println!("disc {}", file.disc_number()?);
//! ```

use core_runtime::config::{BridgeConfig, ParsingMode};
use core_runtime::logging::strip_path;
use lofty::config::{ParseOptions, ParsingMode as LoftyParsingMode};
use lofty::file::{AudioFile, FileType, TaggedFile, TaggedFileExt};
use lofty::id3::v2::FrameId;
use lofty::mpeg::MpegFile;
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, Tag, TagType};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, trace, warn};

use crate::artwork::Artwork;
use crate::container::ContainerKind;
use crate::error::{MetadataError, Result};
use crate::fields::parse_flag;
use crate::strategy::{strategy_for, ContainerStrategy};

/// ID3v2 part-of-a-set frame.
const DISC_FRAME: FrameId<'static> = FrameId::Valid(Cow::Borrowed("TPOS"));

/// One parsed audio file.
pub struct TagFile {
    path: PathBuf,
    kind: ContainerKind,
    inner: TaggedFile,
    /// Raw `TPOS` text of an MPEG file. The generic conversion only keeps
    /// `N/M` values, so anything else has to be read before it.
    disc_frame: Option<String>,
}

impl TagFile {
    /// Open and parse a file with the default [`BridgeConfig`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &BridgeConfig::default())
    }

    /// Open and parse a file.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::InvalidFile`] if the file is unreadable, empty,
    /// or not a format the tag library recognizes. Nothing is retained on
    /// failure.
    pub fn open_with(path: impl AsRef<Path>, config: &BridgeConfig) -> Result<Self> {
        let path = path.as_ref();
        let shown = path.to_string_lossy();
        debug!(file = %strip_path(&shown), "Opening audio file");

        let result = Self::read(path, config);
        if let Err(err) = &result {
            warn!(file = %strip_path(&shown), error = %err, "Rejected audio file");
        }
        result
    }

    fn read(path: &Path, config: &BridgeConfig) -> Result<Self> {
        let shown = path.to_string_lossy();
        let invalid = |reason: &dyn std::fmt::Display| {
            MetadataError::invalid_file(shown.as_ref(), reason)
        };

        let length = fs::metadata(path)
            .map_err(|source| MetadataError::Io {
                path: shown.to_string(),
                source,
            })?
            .len();
        if length == 0 {
            return Err(invalid(&"file is empty"));
        }

        let options = parse_options(config);
        let detected = Probe::open(path)
            .map_err(|e| invalid(&e))?
            .options(options)
            .guess_file_type()
            .map_err(|e| invalid(&e))?;

        if detected.file_type() == Some(FileType::Mpeg) {
            let mut reader = detected.into_inner();
            let mpeg = MpegFile::read_from(&mut reader, options).map_err(|e| invalid(&e))?;
            return Ok(Self::from_mpeg(path, mpeg));
        }

        let tagged_file = detected.read().map_err(|e| invalid(&e))?;
        Ok(Self::from_tagged(path, tagged_file))
    }

    /// Wrap an MPEG file, keeping its raw `TPOS` text for the disc number.
    pub fn from_mpeg(path: impl Into<PathBuf>, mpeg: MpegFile) -> Self {
        let disc_frame = mpeg
            .id3v2()
            .and_then(|tag| tag.get_text(&DISC_FRAME))
            .map(str::to_owned);

        let mut file = Self::from_tagged(path, TaggedFile::from(mpeg));
        file.disc_frame = disc_frame;
        file
    }

    /// Wrap a file that was already parsed by the tag library.
    pub fn from_tagged(path: impl Into<PathBuf>, tagged_file: TaggedFile) -> Self {
        let kind = ContainerKind::from(tagged_file.file_type());
        let path = path.into();
        debug!(
            file = %strip_path(&path.to_string_lossy()),
            container = %kind,
            tags = tagged_file.tags().len(),
            "Parsed audio file"
        );

        Self {
            path,
            kind,
            inner: tagged_file,
            disc_frame: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn file_type(&self) -> FileType {
        self.inner.file_type()
    }

    pub fn title(&self) -> String {
        self.generic_text(|tag| tag.title().map(|s| s.into_owned()))
    }

    pub fn artist(&self) -> String {
        self.generic_text(|tag| tag.artist().map(|s| s.into_owned()))
    }

    pub fn album(&self) -> String {
        self.generic_text(|tag| tag.album().map(|s| s.into_owned()))
    }

    pub fn genre(&self) -> String {
        self.generic_text(|tag| tag.genre().map(|s| s.into_owned()))
    }

    pub fn track(&self) -> u32 {
        self.generic_number(|tag| tag.track())
    }

    pub fn year(&self) -> u32 {
        self.generic_number(|tag| tag.year())
    }

    /// Playback duration as reported by the audio properties.
    pub fn duration(&self) -> Duration {
        self.inner.properties().duration()
    }

    /// Duration in whole seconds, truncated.
    pub fn length_secs(&self) -> u64 {
        self.duration().as_secs()
    }

    /// Disc number of a multi-disc release, 0 when absent.
    ///
    /// # Errors
    ///
    /// [`MetadataError::UnsupportedContainer`] for containers without a
    /// strategy.
    pub fn disc_number(&self) -> Result<u32> {
        let strategy = self.strategy()?;
        let disc = self
            .disc_frame
            .as_deref()
            .or_else(|| {
                self.container_tag(strategy)
                    .and_then(|tag| tag.get_string(&ItemKey::DiscNumber))
            })
            .map_or(0, |raw| strategy.disc.parse(raw));
        Ok(disc)
    }

    /// Compilation flag, `false` when absent.
    ///
    /// # Errors
    ///
    /// [`MetadataError::UnsupportedContainer`] for containers without a
    /// strategy.
    pub fn is_compilation(&self) -> Result<bool> {
        let strategy = self.strategy()?;
        let flag = self
            .container_tag(strategy)
            .and_then(|tag| tag.get_string(&ItemKey::FlagCompilation))
            .is_some_and(parse_flag);
        Ok(flag)
    }

    /// First embedded picture, `None` when the file has no artwork.
    ///
    /// Later pictures are never returned.
    ///
    /// # Errors
    ///
    /// [`MetadataError::UnsupportedContainer`] for containers without a
    /// strategy.
    pub fn artwork(&self) -> Result<Option<Artwork>> {
        let strategy = self.strategy()?;
        let artwork = self
            .container_tag(strategy)
            .and_then(|tag| tag.pictures().first())
            .map(|picture| Artwork::from_picture(picture, strategy.artwork_mime));
        Ok(artwork)
    }

    /// Tags consulted for generic fields, in priority order.
    ///
    /// The primary tag comes first, ID3v1 last. Each field is taken from the
    /// first tag that has a non-empty value for it.
    fn generic_tags(&self) -> Vec<&Tag> {
        let primary = self.inner.primary_tag();
        let mut tags: Vec<&Tag> = primary.into_iter().collect();
        tags.extend(
            self.inner
                .tags()
                .iter()
                .filter(|tag| Some(tag.tag_type()) != primary.map(Tag::tag_type)),
        );
        tags.sort_by_key(|tag| tag.tag_type() == TagType::Id3v1);
        tags
    }

    fn generic_text<F>(&self, read: F) -> String
    where
        F: Fn(&Tag) -> Option<String>,
    {
        self.generic_tags()
            .into_iter()
            .filter_map(read)
            .find(|value| !value.is_empty())
            .unwrap_or_default()
    }

    fn generic_number<F>(&self, read: F) -> u32
    where
        F: Fn(&Tag) -> Option<u32>,
    {
        self.generic_tags()
            .into_iter()
            .filter_map(read)
            .find(|value| *value > 0)
            .unwrap_or(0)
    }

    fn strategy(&self) -> Result<&'static ContainerStrategy> {
        strategy_for(self.kind).ok_or(MetadataError::UnsupportedContainer(self.kind))
    }

    fn container_tag(&self, strategy: &ContainerStrategy) -> Option<&Tag> {
        self.inner.tag(strategy.tag_type)
    }
}

impl std::fmt::Debug for TagFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagFile")
            .field("path", &self.path)
            .field("kind", &self.kind)
            .finish()
    }
}

impl Drop for TagFile {
    fn drop(&mut self) {
        trace!(
            file = %strip_path(&self.path.to_string_lossy()),
            "Released parsed audio file"
        );
    }
}

fn parse_options(config: &BridgeConfig) -> ParseOptions {
    let parsing_mode = match config.parsing_mode {
        ParsingMode::Strict => LoftyParsingMode::Strict,
        ParsingMode::BestAttempt => LoftyParsingMode::BestAttempt,
        ParsingMode::Relaxed => LoftyParsingMode::Relaxed,
    };

    ParseOptions::new()
        .parsing_mode(parsing_mode)
        .read_properties(config.read_properties)
        .read_cover_art(config.read_cover_art)
        .max_junk_bytes(config.max_junk_bytes)
}
