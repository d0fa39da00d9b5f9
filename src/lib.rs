//! # Prompt Builder
//!
//! Assembles prompts for LLM chat tools from reusable templates and
//! free-form notes.
//!
//! A user picks a [`Template`] (for example "Formal email"), dictates or
//! types context, and [`render_prompt`] combines the template's guidance
//! with those notes into a single prompt string that is handed to a
//! clipboard or other output sink.
//!
//! ## Layout
//!
//! - [`models`]: the template record and the built-in default set
//! - [`rendering`]: the pure prompt renderer
//! - [`storage`]: byte-level stores backing the catalog (filesystem, memory)
//! - [`services`]: the template catalog and the editing boundary
//! - [`session`]: transient prompt-building state, activation events, and
//!   speech/clipboard collaborator traits
//! - [`config`], [`observability`], [`cli`]: the command-line shell
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use prompt_builder::{MemoryTemplateStore, TemplateCatalog, render_prompt};
//!
//! let catalog = TemplateCatalog::load(Arc::new(MemoryTemplateStore::new()));
//! let template = catalog.find_by_name("Formal email").expect("seeded default");
//! let prompt = render_prompt(template, "Ask finance to approve the Q3 budget.");
//! assert!(prompt.starts_with("Draft a clear and professional email"));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

pub mod cli;
pub mod config;
pub mod models;
pub mod observability;
pub mod rendering;
pub mod services;
pub mod session;
pub mod storage;

pub use config::AppConfig;
pub use models::{Template, TemplateId, default_templates};
pub use rendering::render_prompt;
pub use services::{TemplateCatalog, TemplateEditor};
pub use session::{Activation, ActivationBus, Clipboard, PromptSession, SpeechCapture, WizardStep};
pub use storage::{FilesystemTemplateStore, MemoryTemplateStore, TemplateStore};

/// Error type for prompt builder operations.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Editor validation fails, malformed ids, bad CLI arguments |
/// | `NotFound` | A template id or name does not resolve |
/// | `OperationFailed` | I/O, serialization, config parsing, collaborator failures |
///
/// The renderer has no error conditions, and catalog loading recovers from
/// store corruption on its own.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A template is saved with an empty name or objective
    /// - A template id string is not a valid UUID
    /// - Notes are requested from more than one source on the CLI
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A template lookup did not match anything.
    #[error("not found: {0}")]
    NotFound(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Filesystem reads or writes fail
    /// - JSON or TOML (de)serialization fails
    /// - A speech or clipboard collaborator reports a failure
    /// - Logging has already been initialized
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

impl Error {
    /// Builds an [`Error::OperationFailed`] from an operation name and any
    /// displayable cause.
    pub fn operation(operation: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::OperationFailed {
            operation: operation.into(),
            cause: cause.to_string(),
        }
    }
}

/// Result type alias for prompt builder operations.
pub type Result<T> = std::result::Result<T, Error>;
