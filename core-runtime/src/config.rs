//! # Bridge Configuration Module
//!
//! Provides the read options every file opened through the bridge is parsed
//! with.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! [`BridgeConfig`]. Defaults mirror the tag library's own defaults, so
//! `BridgeConfig::default()` is a sensible choice for most hosts. The builder
//! enforces fail-fast validation so an unusable configuration is rejected
//! before the first file is opened.
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::{BridgeConfig, ParsingMode};
//!
//! let config = BridgeConfig::builder()
//!     .parsing_mode(ParsingMode::Relaxed)
//!     .read_cover_art(false)
//!     .build()
//!     .expect("valid configuration");
//!
//! assert!(!config.read_cover_art);
//! ```
//!
//! Hosts that receive settings as strings can parse the parsing mode:
//!
//! ```
//! use core_runtime::config::ParsingMode;
//!
//! let mode: ParsingMode = "best-attempt".parse().unwrap();
//! assert_eq!(mode, ParsingMode::BestAttempt);
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of junk bytes tolerated while searching for a tag or frame.
pub const DEFAULT_MAX_JUNK_BYTES: usize = 1024;

/// Upper bound accepted for [`BridgeConfig::max_junk_bytes`] (1 MiB).
pub const MAX_JUNK_BYTES_LIMIT: usize = 1024 * 1024;

/// How strictly malformed tag data is treated while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParsingMode {
    /// Any malformed data fails the open.
    Strict,
    /// Recover what can be recovered, fail on unrecoverable data.
    #[default]
    BestAttempt,
    /// Skip anything malformed.
    Relaxed,
}

impl fmt::Display for ParsingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParsingMode::Strict => "strict",
            ParsingMode::BestAttempt => "best-attempt",
            ParsingMode::Relaxed => "relaxed",
        };
        f.write_str(name)
    }
}

impl FromStr for ParsingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ParsingMode::Strict),
            "best-attempt" | "best_attempt" | "bestattempt" => Ok(ParsingMode::BestAttempt),
            "relaxed" => Ok(ParsingMode::Relaxed),
            other => Err(Error::Config(format!(
                "Unknown parsing mode '{}'. Expected one of: strict, best-attempt, relaxed",
                other
            ))),
        }
    }
}

/// Read options applied to every opened file.
///
/// Use [`BridgeConfigBuilder`] to construct validated instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Strictness of the tag parser
    pub parsing_mode: ParsingMode,

    /// Read audio properties (duration). When disabled `audio_length` is 0.
    pub read_properties: bool,

    /// Read embedded pictures. When disabled artwork queries find nothing.
    pub read_cover_art: bool,

    /// Junk bytes tolerated while searching for tags and frames
    pub max_junk_bytes: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            parsing_mode: ParsingMode::default(),
            read_properties: true,
            read_cover_art: true,
            max_junk_bytes: DEFAULT_MAX_JUNK_BYTES,
        }
    }
}

impl BridgeConfig {
    /// Creates a new builder for constructing a `BridgeConfig`.
    pub fn builder() -> BridgeConfigBuilder {
        BridgeConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.max_junk_bytes > MAX_JUNK_BYTES_LIMIT {
            return Err(Error::Config(format!(
                "max_junk_bytes ({}) exceeds maximum of {} bytes",
                self.max_junk_bytes, MAX_JUNK_BYTES_LIMIT
            )));
        }

        Ok(())
    }
}

/// Builder for constructing [`BridgeConfig`] instances.
///
/// Unset options keep their [`BridgeConfig::default`] values.
#[derive(Debug, Default)]
pub struct BridgeConfigBuilder {
    parsing_mode: Option<ParsingMode>,
    read_properties: Option<bool>,
    read_cover_art: Option<bool>,
    max_junk_bytes: Option<usize>,
}

impl BridgeConfigBuilder {
    /// Sets the parser strictness.
    pub fn parsing_mode(mut self, mode: ParsingMode) -> Self {
        self.parsing_mode = Some(mode);
        self
    }

    /// Enables or disables reading audio properties.
    pub fn read_properties(mut self, enabled: bool) -> Self {
        self.read_properties = Some(enabled);
        self
    }

    /// Enables or disables reading embedded pictures.
    pub fn read_cover_art(mut self, enabled: bool) -> Self {
        self.read_cover_art = Some(enabled);
        self
    }

    /// Sets the junk byte tolerance.
    pub fn max_junk_bytes(mut self, bytes: usize) -> Self {
        self.max_junk_bytes = Some(bytes);
        self
    }

    /// Builds the final [`BridgeConfig`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the resulting configuration fails
    /// [`BridgeConfig::validate`].
    pub fn build(self) -> Result<BridgeConfig> {
        let defaults = BridgeConfig::default();
        let config = BridgeConfig {
            parsing_mode: self.parsing_mode.unwrap_or(defaults.parsing_mode),
            read_properties: self.read_properties.unwrap_or(defaults.read_properties),
            read_cover_art: self.read_cover_art.unwrap_or(defaults.read_cover_art),
            max_junk_bytes: self.max_junk_bytes.unwrap_or(defaults.max_junk_bytes),
        };

        config.validate()?;
        Ok(config)
    }
}
