//! In-memory template store.

use super::TemplateStore;
use crate::{Error, Result};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Template store that keeps the serialized catalog in memory.
///
/// Used for ephemeral sessions and tests. Writes can be switched to fail
/// with [`set_fail_writes`](Self::set_fail_writes) to exercise the
/// catalog's best-effort persistence.
#[derive(Debug, Default)]
pub struct MemoryTemplateStore {
    contents: Mutex<Option<Vec<u8>>>,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MemoryTemplateStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `bytes`.
    #[must_use]
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Mutex::new(Some(bytes.into())),
            ..Self::default()
        }
    }

    /// Returns a copy of the stored bytes.
    #[must_use]
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Makes subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.contents())
    }

    fn write_all(&self, bytes: &[u8]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::operation("write_template_store", "writes disabled"));
        }

        *self
            .contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(bytes.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
