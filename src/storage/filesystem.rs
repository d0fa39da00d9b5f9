//! Filesystem template store.
//!
//! Keeps the whole catalog in a single JSON file.

use super::TemplateStore;
use crate::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Single-file template store.
///
/// Writes go to a sibling `.tmp` file which is then renamed over the target,
/// so readers see either the old or the new catalog, never a mix.
pub struct FilesystemTemplateStore {
    /// Path of the catalog file.
    path: PathBuf,
}

impl FilesystemTemplateStore {
    /// Creates a store backed by `path`.
    ///
    /// The parent directory is created if needed; the file itself is only
    /// created on the first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                Error::operation("create_template_dir", format!("{}: {e}", parent.display()))
            })?;
        }

        Ok(Self { path })
    }

    /// Returns the default catalog location.
    ///
    /// `<data dir>/PromptBuilder/templates.json`, which is
    /// `~/Library/Application Support/PromptBuilder/templates.json` on macOS.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::BaseDirs::new().map(|d| {
            d.data_dir()
                .join("PromptBuilder")
                .join("templates.json")
        })
    }

    /// Returns the catalog file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the scratch file used for atomic replace.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TemplateStore for FilesystemTemplateStore {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Read template store");
                Ok(Some(bytes))
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::operation(
                "read_template_store",
                format!("{}: {e}", self.path.display()),
            )),
        }
    }

    fn write_all(&self, bytes: &[u8]) -> Result<()> {
        let temp = self.temp_path();

        fs::write(&temp, bytes).map_err(|e| {
            Error::operation("write_template_store", format!("{}: {e}", temp.display()))
        })?;

        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(Error::operation(
                "replace_template_store",
                format!("{}: {e}", self.path.display()),
            ));
        }

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Wrote template store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemTemplateStore::new(dir.path().join("templates.json")).unwrap();
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemTemplateStore::new(dir.path().join("templates.json")).unwrap();

        store.write_all(b"[1]").unwrap();
        store.write_all(b"[1, 2]").unwrap();

        assert_eq!(store.read().unwrap().unwrap(), b"[1, 2]");
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("templates.json");
        let store = FilesystemTemplateStore::new(&path).unwrap();
        store.write_all(b"[]").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let store = FilesystemTemplateStore {
            path: PathBuf::from("/data/PromptBuilder/templates.json"),
        };
        assert_eq!(
            store.temp_path(),
            PathBuf::from("/data/PromptBuilder/templates.json.tmp")
        );
    }

    #[test]
    fn test_read_directory_is_error() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemTemplateStore::new(dir.path()).unwrap();
        let err = store.read().unwrap_err();
        assert!(matches!(
            err,
            Error::OperationFailed { ref operation, .. } if operation == "read_template_store"
        ));
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }

    #[test]
    fn test_default_path() {
        if let Some(p) = FilesystemTemplateStore::default_path() {
            assert!(p.to_string_lossy().contains("PromptBuilder"));
            assert!(p.to_string_lossy().ends_with("templates.json"));
        }
    }
}
