//! Prompt renderer implementation.
//!
//! The output is a fixed sequence of blocks separated by one blank line:
//!
//! | # | Block | Emitted when |
//! |---|-------|--------------|
//! | 1 | Objective line | always (fallback sentence if objective is blank) |
//! | 2 | Role paragraph | persona, channel, or audience is present |
//! | 3 | Style bullets | any of the five style fields is present |
//! | 4 | Examples | examples are present |
//! | 5 | Context | notes are present |
//! | 6 | Closing directive | always |
//!
//! Every field is trimmed before the presence check and before emission, so
//! whitespace-only values behave exactly like empty ones. Values are
//! otherwise inserted untouched.

use crate::models::Template;

/// First line used when a template has no objective.
pub const FALLBACK_OBJECTIVE: &str = "Help me with the task described below.";

/// Header of the style bullet list.
pub const STYLE_HEADER: &str = "Style and constraints:";

/// Header of the examples block.
pub const EXAMPLES_HEADER: &str = "Examples or patterns to follow (do not copy verbatim):";

/// Header of the notes block.
pub const CONTEXT_HEADER: &str = "Context:";

/// Final line of every prompt.
pub const CLOSING_DIRECTIVE: &str = "Using the objective, style guidance, and context above, \
                                     produce a single final answer. Do not restate these \
                                     instructions.";

/// Renders the final prompt for `template` with the user's `notes`.
///
/// Pure and infallible: no I/O, no hidden state, and a template with every
/// field empty still yields the fallback objective and the closing
/// directive. The template's name, summary, icon, and internal note never
/// appear in the output.
///
/// # Example
///
/// ```rust
/// use prompt_builder::{Template, render_prompt};
///
/// let template = Template::new("Update", "Summarize the update.")
///     .with_tone_and_style("brief");
/// let prompt = render_prompt(&template, "Launched v2 yesterday.");
/// assert!(prompt.contains("- Tone and style: brief"));
/// ```
#[must_use]
pub fn render_prompt(template: &Template, notes: &str) -> String {
    let mut blocks: Vec<String> = Vec::with_capacity(6);

    blocks.push(
        non_empty(&template.objective)
            .unwrap_or(FALLBACK_OBJECTIVE)
            .to_string(),
    );

    if let Some(role) = role_paragraph(template) {
        blocks.push(role);
    }

    if let Some(style) = style_block(template) {
        blocks.push(style);
    }

    if let Some(examples) = non_empty(&template.examples) {
        blocks.push(format!("{EXAMPLES_HEADER}\n{examples}"));
    }

    if let Some(context) = non_empty(notes) {
        blocks.push(format!("{CONTEXT_HEADER}\n{context}"));
    }

    blocks.push(CLOSING_DIRECTIVE.to_string());

    blocks.join("\n\n")
}

/// Returns the trimmed value, or `None` when nothing is left.
fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Persona, channel, and audience as one paragraph.
///
/// The persona is kept verbatim since it usually already reads "You are ...".
fn role_paragraph(template: &Template) -> Option<String> {
    let mut sentences: Vec<String> = Vec::with_capacity(3);

    if let Some(persona) = non_empty(&template.persona) {
        sentences.push(persona.to_string());
    }
    if let Some(channel) = non_empty(&template.channel_or_environment) {
        sentences.push(format!("You are working in {channel}."));
    }
    if let Some(audience) = non_empty(&template.audience) {
        sentences.push(format!("The primary audience is: {audience}."));
    }

    (!sentences.is_empty()).then(|| sentences.join(" "))
}

/// Labeled bullets for the style fields, in fixed order.
fn style_block(template: &Template) -> Option<String> {
    let fields = [
        ("Tone and style", &template.tone_and_style),
        ("Length", &template.length_guidance),
        ("Output structure", &template.output_structure),
        ("Formatting rules", &template.formatting_rules),
        ("Constraints", &template.constraints),
    ];

    let bullets: Vec<String> = fields
        .iter()
        .filter_map(|(label, value)| non_empty(value).map(|v| format!("- {label}: {v}")))
        .collect();

    if bullets.is_empty() {
        return None;
    }

    Some(format!("{STYLE_HEADER}\n{}", bullets.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn blank() -> Template {
        Template::new("", "")
    }

    #[test]
    fn test_empty_template_and_notes() {
        let prompt = render_prompt(&blank(), "");
        assert_eq!(prompt, format!("{FALLBACK_OBJECTIVE}\n\n{CLOSING_DIRECTIVE}"));
    }

    #[test]
    fn test_objective_is_trimmed() {
        let t = blank().with_objective("  Write a haiku.\n");
        assert!(render_prompt(&t, "").starts_with("Write a haiku.\n\n"));
    }

    #[test]
    fn test_role_paragraph_joins_sentences() {
        let t = blank()
            .with_persona("You are a PM.")
            .with_channel("Email")
            .with_audience("Executives");
        let prompt = render_prompt(&t, "");
        assert!(prompt.contains(
            "\n\nYou are a PM. You are working in Email. The primary audience is: Executives.\n\n"
        ));
    }

    #[test]
    fn test_channel_only_role() {
        let t = blank().with_channel(" Slack message ");
        let prompt = render_prompt(&t, "");
        assert_eq!(
            prompt,
            format!(
                "{FALLBACK_OBJECTIVE}\n\nYou are working in Slack message.\n\n{CLOSING_DIRECTIVE}"
            )
        );
    }

    #[test_case(blank().with_tone_and_style("brief"), "- Tone and style: brief" ; "tone")]
    #[test_case(blank().with_length_guidance("short"), "- Length: short" ; "length")]
    #[test_case(blank().with_output_structure("bullets"), "- Output structure: bullets" ; "structure")]
    #[test_case(blank().with_formatting_rules("no headings"), "- Formatting rules: no headings" ; "formatting")]
    #[test_case(blank().with_constraints("no emojis"), "- Constraints: no emojis" ; "constraints")]
    fn test_single_style_bullet(template: Template, bullet: &str) {
        let prompt = render_prompt(&template, "");
        assert_eq!(
            prompt,
            format!("{FALLBACK_OBJECTIVE}\n\n{STYLE_HEADER}\n{bullet}\n\n{CLOSING_DIRECTIVE}")
        );
    }

    #[test]
    fn test_style_bullets_keep_fixed_order() {
        let t = blank()
            .with_constraints("c")
            .with_tone_and_style("t")
            .with_formatting_rules("f");
        let prompt = render_prompt(&t, "");
        assert!(prompt.contains(
            "Style and constraints:\n- Tone and style: t\n- Formatting rules: f\n- Constraints: c"
        ));
    }

    #[test]
    fn test_examples_block_verbatim() {
        let t = blank().with_examples("Line one\n  indented two");
        let prompt = render_prompt(&t, "");
        assert!(prompt.contains(&format!("{EXAMPLES_HEADER}\nLine one\n  indented two\n\n")));
    }

    #[test]
    fn test_internal_fields_never_rendered() {
        let t = blank()
            .with_summary("SUMMARY-MARKER")
            .with_internal_note("NOTE-MARKER")
            .with_icon_token("ICON-MARKER");
        let prompt = render_prompt(&t, "");
        assert!(!prompt.contains("MARKER"));
    }

    #[test]
    fn test_no_escaping() {
        let t = blank().with_objective("Use {{braces}} and <tags> & \"quotes\".");
        assert!(render_prompt(&t, "").starts_with("Use {{braces}} and <tags> & \"quotes\"."));
    }

    #[test]
    fn test_whitespace_notes_omit_context() {
        let prompt = render_prompt(&blank(), " \n\t ");
        assert!(!prompt.contains(CONTEXT_HEADER));
        assert!(!prompt.contains("\n\n\n"));
    }
}
