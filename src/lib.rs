//! Workspace placeholder crate.
//!
//! Re-exports the host-facing tag bridge so applications can depend on
//! `tagbridge-workspace` alone. The `host` feature (on by default) pulls in
//! `bridge-host` together with the `core-metadata` and `core-runtime` crates it
//! is built on.

#[cfg(feature = "host")]
pub use bridge_host::{Handle, HandleGuard, HostError, TagBridge, TagSnapshot};

#[cfg(feature = "host")]
pub use core_metadata::{Artwork, ContainerKind, TagFile};

#[cfg(feature = "host")]
pub use core_runtime::config::BridgeConfig;
