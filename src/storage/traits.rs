//! Template store trait definition.

use crate::Result;

/// Byte-level backing store for the template catalog.
///
/// The catalog always reads and writes the whole serialized sequence; a
/// store never sees individual records.
pub trait TemplateStore: Send + Sync {
    /// Reads the stored bytes.
    ///
    /// # Returns
    ///
    /// `None` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read.
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replaces the stored bytes with `bytes`.
    ///
    /// Implementations must not leave a partially written sequence behind:
    /// after a failed write the previous contents are still readable.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be persisted.
    fn write_all(&self, bytes: &[u8]) -> Result<()>;
}
