//! Prompt rendering.
//!
//! Turns a template plus free-text notes into the final prompt string.

mod prompt_renderer;

pub use prompt_renderer::{
    CLOSING_DIRECTIVE, CONTEXT_HEADER, EXAMPLES_HEADER, FALLBACK_OBJECTIVE, STYLE_HEADER,
    render_prompt,
};
