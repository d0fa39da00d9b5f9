//! Business logic services.
//!
//! The catalog owns the template list; the editor guards what gets into it.

mod catalog;
mod editor;

pub use catalog::TemplateCatalog;
pub use editor::TemplateEditor;
