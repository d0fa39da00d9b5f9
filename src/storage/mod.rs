//! Template store backends.
//!
//! The catalog persists its whole template sequence through a
//! [`TemplateStore`], a read/replace interface over raw bytes.
//!
//! | Backend | Type | Location |
//! |---------|------|----------|
//! | Filesystem | [`FilesystemTemplateStore`] | `<data dir>/PromptBuilder/templates.json` |
//! | Memory | [`MemoryTemplateStore`] | process memory, lost on exit |

mod filesystem;
mod memory;
mod traits;

pub use filesystem::FilesystemTemplateStore;
pub use memory::MemoryTemplateStore;
pub use traits::TemplateStore;

use crate::{Error, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// Backend type for template storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackendType {
    /// Single JSON file on disk.
    #[default]
    Filesystem,
    /// Process memory.
    Memory,
}

impl StoreBackendType {
    /// Parses a backend name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "filesystem" | "file" | "fs" => Some(Self::Filesystem),
            "memory" | "mem" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Factory for template stores.
pub struct TemplateStoreFactory;

impl TemplateStoreFactory {
    /// Creates a store of the given backend type.
    ///
    /// # Arguments
    ///
    /// * `backend` - The backend type to use
    /// * `path` - Catalog file for the filesystem backend; defaults to
    ///   [`FilesystemTemplateStore::default_path`]
    ///
    /// # Errors
    ///
    /// Returns an error if no path is given and none can be determined, or
    /// if the filesystem store cannot be initialized.
    pub fn create(
        backend: StoreBackendType,
        path: Option<PathBuf>,
    ) -> Result<Arc<dyn TemplateStore>> {
        match backend {
            StoreBackendType::Filesystem => {
                let path = path
                    .or_else(FilesystemTemplateStore::default_path)
                    .ok_or_else(|| {
                        Error::InvalidInput(
                            "Store path required for filesystem backend".to_string(),
                        )
                    })?;
                Ok(Arc::new(FilesystemTemplateStore::new(path)?))
            },
            StoreBackendType::Memory => Ok(Arc::new(MemoryTemplateStore::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backend_default() {
        assert_eq!(StoreBackendType::default(), StoreBackendType::Filesystem);
    }

    #[test]
    fn test_backend_parse() {
        assert_eq!(StoreBackendType::parse("FS"), Some(StoreBackendType::Filesystem));
        assert_eq!(StoreBackendType::parse("memory"), Some(StoreBackendType::Memory));
        assert_eq!(StoreBackendType::parse("sqlite"), None);
    }

    #[test]
    fn test_create_filesystem_store() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStoreFactory::create(
            StoreBackendType::Filesystem,
            Some(dir.path().join("templates.json")),
        )
        .unwrap();
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_create_memory_store() {
        let store = TemplateStoreFactory::create(StoreBackendType::Memory, None).unwrap();
        store.write_all(b"[]").unwrap();
        assert_eq!(store.read().unwrap().unwrap(), b"[]");
    }
}
