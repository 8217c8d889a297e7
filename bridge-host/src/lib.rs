//! # Bridge Host
//!
//! Handle-based boundary between a host runtime and the metadata core.
//!
//! ## Overview
//!
//! A host opens a file with [`TagBridge::open`] and receives an opaque
//! [`Handle`]. Every field query takes that handle and returns plain values:
//! strings as [`bytes::Bytes`], numbers as integers, artwork as a
//! `(mime_type, data)` pair. Failures map to two host-visible reasons,
//! `invalid_file` and `badarg` (see [`HostError::atom`]).
//!
//! Container-specific fields (disc, compilation, artwork) fall back to `0`,
//! `false` and `None` for containers without dedicated support, so hosts
//! never see an error for a file that opened successfully.

pub mod bridge;
pub mod error;
pub mod handle;
pub mod snapshot;

pub use bridge::{HandleGuard, TagBridge};
pub use error::{HostError, Result};
pub use handle::Handle;
pub use snapshot::TagSnapshot;
