//! CLI command implementations.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `list` | List templates in display order |
//! | `show` | Show one template's fields |
//! | `add` | Create a template |
//! | `update` | Change fields of an existing template |
//! | `delete` | Remove a template |
//! | `render` | Build a prompt from a template and notes |
//! | `reset-defaults` | Replace the catalog with the built-in templates |
//!
//! Templates are referenced by id or by name (case-insensitive).
//!
//! # Example Usage
//!
//! ```bash
//! # Render a formal email prompt from inline notes
//! prompt-builder render "Formal email" --notes "Ask finance to approve the Q3 budget"
//!
//! # Pipe notes in and save the prompt to a file
//! pbpaste | prompt-builder render "Executive Slack summary" --output prompt.txt
//! ```

mod template;

pub use template::{
    OutputFormat, RenderArgs, TemplateFields, cmd_add, cmd_delete, cmd_list, cmd_render,
    cmd_reset_defaults, cmd_show, cmd_update,
};
