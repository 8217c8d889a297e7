//! Host-facing operations.
//!
//! [`TagBridge`] is the call surface a host runtime binds to: open a file by
//! path, get a [`Handle`], query fields through it, release it. Every query
//! resolves the handle first and fails with [`HostError::BadHandle`] if it is
//! not live.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_host::TagBridge;
//!
//! let bridge = TagBridge::default();
//! let handle = bridge.open(b"/music/song.m4a")?;
//! let title = bridge.tag_title(handle)?;
//! if let Some((mime_type, data)) = bridge.artwork_picture(handle)? {
//!     // ...
//! }
//! bridge.close(handle)?;
//! ```

use bytes::Bytes;
use core_metadata::TagFile;
use core_runtime::config::BridgeConfig;
use std::path::PathBuf;
use tracing::trace;

use crate::error::{HostError, Result};
use crate::handle::{Handle, HandleRegistry};
use crate::snapshot::TagSnapshot;

/// Opens files and answers field queries by handle.
///
/// The bridge is `Send + Sync`. Queries against different handles never
/// contend beyond a short read lock; queries against the same handle only
/// read immutable parsed data.
pub struct TagBridge {
    config: BridgeConfig,
    registry: HandleRegistry,
}

impl TagBridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            registry: HandleRegistry::new(),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Number of handles currently open.
    pub fn open_handles(&self) -> usize {
        self.registry.len()
    }

    /// Open and parse the file at `path` (host `new/1`).
    ///
    /// The path is taken as raw bytes and is not required to be UTF-8 on
    /// Unix.
    ///
    /// # Errors
    ///
    /// [`HostError::InvalidFile`] if the file is unreadable, empty or not a
    /// recognized audio container. No handle is issued in that case.
    pub fn open(&self, path: &[u8]) -> Result<Handle> {
        let path = path_from_bytes(path);
        let file = TagFile::open_with(&path, &self.config)
            .map_err(|e| HostError::InvalidFile(e.to_string()))?;
        Ok(self.registry.insert(file))
    }

    /// Open a file and release it when the returned guard is dropped.
    pub fn open_scoped(&self, path: &[u8]) -> Result<HandleGuard<'_>> {
        let handle = self.open(path)?;
        Ok(HandleGuard {
            bridge: self,
            handle,
            release: true,
        })
    }

    /// Hand an already parsed file to the bridge.
    pub fn register(&self, file: TagFile) -> Handle {
        self.registry.insert(file)
    }

    /// Release a handle and the file it owns.
    ///
    /// # Errors
    ///
    /// [`HostError::BadHandle`] if the handle is not live; nothing is freed
    /// twice.
    pub fn close(&self, handle: Handle) -> Result<()> {
        self.registry.remove(handle)
    }

    pub fn tag_title(&self, handle: Handle) -> Result<Bytes> {
        Ok(Bytes::from(self.registry.get(handle)?.title()))
    }

    pub fn tag_artist(&self, handle: Handle) -> Result<Bytes> {
        Ok(Bytes::from(self.registry.get(handle)?.artist()))
    }

    pub fn tag_album(&self, handle: Handle) -> Result<Bytes> {
        Ok(Bytes::from(self.registry.get(handle)?.album()))
    }

    pub fn tag_genre(&self, handle: Handle) -> Result<Bytes> {
        Ok(Bytes::from(self.registry.get(handle)?.genre()))
    }

    pub fn tag_track(&self, handle: Handle) -> Result<u32> {
        Ok(self.registry.get(handle)?.track())
    }

    pub fn tag_year(&self, handle: Handle) -> Result<u32> {
        Ok(self.registry.get(handle)?.year())
    }

    /// Disc number; 0 when absent or the container is unsupported.
    pub fn tag_disc(&self, handle: Handle) -> Result<u32> {
        let file = self.registry.get(handle)?;
        Ok(or_fallback(file.disc_number(), handle, "disc"))
    }

    /// Compilation flag; `false` when absent or the container is unsupported.
    pub fn tag_compilation(&self, handle: Handle) -> Result<bool> {
        let file = self.registry.get(handle)?;
        Ok(or_fallback(file.is_compilation(), handle, "compilation"))
    }

    /// Duration in whole seconds.
    pub fn audio_length(&self, handle: Handle) -> Result<u64> {
        Ok(self.registry.get(handle)?.length_secs())
    }

    /// `(mime_type, data)` of the first embedded picture.
    ///
    /// `None` when the file has no artwork or the container is unsupported.
    pub fn artwork_picture(&self, handle: Handle) -> Result<Option<(Bytes, Bytes)>> {
        let file = self.registry.get(handle)?;
        let artwork = or_fallback(file.artwork(), handle, "artwork");
        Ok(artwork.map(|artwork| (Bytes::from(artwork.mime_type), artwork.data)))
    }

    /// Alias of [`TagBridge::artwork_picture`].
    pub fn picture(&self, handle: Handle) -> Result<Option<(Bytes, Bytes)>> {
        self.artwork_picture(handle)
    }

    /// Container kind name of the file behind `handle`.
    pub fn container(&self, handle: Handle) -> Result<String> {
        Ok(self.registry.get(handle)?.kind().to_string())
    }

    /// Read every field in one call.
    pub fn snapshot(&self, handle: Handle) -> Result<TagSnapshot> {
        let file = self.registry.get(handle)?;
        let artwork = or_fallback(file.artwork(), handle, "artwork");

        Ok(TagSnapshot {
            container: file.kind().to_string(),
            title: file.title(),
            artist: file.artist(),
            album: file.album(),
            genre: file.genre(),
            track: file.track(),
            year: file.year(),
            disc: or_fallback(file.disc_number(), handle, "disc"),
            compilation: or_fallback(file.is_compilation(), handle, "compilation"),
            length_secs: file.length_secs(),
            artwork_mime_type: artwork.map(|artwork| artwork.mime_type),
        })
    }
}

impl Default for TagBridge {
    fn default() -> Self {
        Self::new(BridgeConfig::default())
    }
}

/// Releases its handle when dropped.
///
/// Returned by [`TagBridge::open_scoped`].
pub struct HandleGuard<'a> {
    bridge: &'a TagBridge,
    handle: Handle,
    release: bool,
}

impl HandleGuard<'_> {
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Keep the handle open past the guard's scope.
    pub fn into_handle(mut self) -> Handle {
        self.release = false;
        self.handle
    }
}

impl Drop for HandleGuard<'_> {
    fn drop(&mut self) {
        if self.release {
            // An explicit close already happened if this fails; the registry logs it.
            let _ = self.bridge.close(self.handle);
        }
    }
}

fn or_fallback<T: Default>(
    result: core_metadata::Result<T>,
    handle: Handle,
    field: &'static str,
) -> T {
    result.unwrap_or_else(|err| {
        trace!(handle = %handle, field, error = %err, "Field not available, using fallback");
        T::default()
    })
}

#[cfg(unix)]
fn path_from_bytes(raw: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(raw))
}

#[cfg(not(unix))]
fn path_from_bytes(raw: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(raw).into_owned())
}
