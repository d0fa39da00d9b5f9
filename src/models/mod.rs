//! Data models for prompt builder.
//!
//! Contains the template record and the fixed set of built-in templates the
//! catalog seeds itself with.

mod defaults;
mod template;

pub use defaults::default_templates;
pub use template::{Template, TemplateId};
