//! Handle registry.
//!
//! Hosts never hold a parsed file directly. They hold a [`Handle`], an opaque
//! token the registry resolves on every call. Tokens are never reused, so a
//! released or forged token can only ever resolve to `BadHandle`.

use core_metadata::TagFile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{HostError, Result};

/// Opaque token for one opened file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(u64);

impl Handle {
    /// Rebuild a handle from a token the host stored.
    ///
    /// Any value is accepted here; validation happens when the handle is
    /// used.
    pub fn from_raw(raw: u64) -> Self {
        Handle(raw)
    }

    pub fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns every open file, keyed by handle.
///
/// Entries are stored as `Arc<TagFile>` so a query only holds the read lock
/// long enough to clone the pointer. A file is dropped exactly once: when it
/// is removed and the last in-flight query finishes with it.
pub(crate) struct HandleRegistry {
    next_id: AtomicU64,
    files: RwLock<HashMap<u64, Arc<TagFile>>>,
}

impl HandleRegistry {
    pub(crate) fn new() -> Self {
        Self {
            // 0 is never issued so zeroed host memory is never a live handle.
            next_id: AtomicU64::new(1),
            files: RwLock::new(HashMap::new()),
        }
    }

    pub(crate) fn insert(&self, file: TagFile) -> Handle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let container = file.kind();
        self.files.write().insert(id, Arc::new(file));

        let handle = Handle(id);
        debug!(handle = %handle, container = %container, "Registered handle");
        handle
    }

    /// Resolve a handle to its file.
    pub(crate) fn get(&self, handle: Handle) -> Result<Arc<TagFile>> {
        match self.files.read().get(&handle.0) {
            Some(file) => Ok(Arc::clone(file)),
            None => {
                warn!(handle = %handle, "Rejected unknown handle");
                Err(HostError::BadHandle(handle.0))
            }
        }
    }

    pub(crate) fn remove(&self, handle: Handle) -> Result<()> {
        let removed = self.files.write().remove(&handle.0);

        match removed {
            Some(_) => {
                debug!(handle = %handle, "Released handle");
                Ok(())
            }
            None => {
                warn!(handle = %handle, "Release of unknown handle");
                Err(HostError::BadHandle(handle.0))
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.files.read().len()
    }
}
