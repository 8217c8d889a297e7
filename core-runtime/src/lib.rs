//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the tag bridge:
//! - Logging and tracing infrastructure
//! - Configuration management
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the other workspace crates depend
//! on. It establishes the logging conventions and the read options every
//! opened file is parsed with.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
