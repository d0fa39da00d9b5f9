//! Golden file tests for rendered prompts.
//!
//! Verifies exact renderer output, byte for byte:
//! - Objective, persona, one style bullet, and notes
//! - A fully empty template with empty notes
//! - Every guidance field populated
//! - The built-in defaults render their objective first

// Golden tests use expect/unwrap/panic for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use prompt_builder::rendering::{CLOSING_DIRECTIVE, FALLBACK_OBJECTIVE};
use prompt_builder::{Template, default_templates, render_prompt};
use std::fs;
use std::path::PathBuf;

/// Get the path to the golden files directory.
fn golden_dir() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir).join("tests").join("golden")
}

/// Load a golden file as a string.
fn load_golden(filename: &str) -> String {
    let path = golden_dir().join(filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read golden file {}: {e}", path.display()))
}

#[test]
fn test_summarize_update_scenario() {
    let template = Template::new("", "Summarize the update.")
        .with_persona("You are a PM.")
        .with_tone_and_style("brief");

    let prompt = render_prompt(&template, "Launched v2 yesterday.");
    assert_eq!(prompt, load_golden("summarize_update.txt"));
}

#[test]
fn test_empty_template_and_notes() {
    let template = Template::new("", "");

    let prompt = render_prompt(&template, "");
    assert_eq!(prompt, load_golden("empty_template.txt"));
    assert_eq!(prompt, format!("{FALLBACK_OBJECTIVE}\n\n{CLOSING_DIRECTIVE}"));
}

#[test]
fn test_every_guidance_field() {
    let template = Template::new("Launch", "Draft the launch announcement.")
        .with_summary("Never rendered")
        .with_icon_token("megaphone")
        .with_internal_note("Never rendered either")
        .with_persona("You are a product marketer.")
        .with_channel("Slack message")
        .with_audience("All employees")
        .with_tone_and_style("Upbeat and concise.")
        .with_length_guidance("Under 120 words.")
        .with_output_structure("Headline, then three bullets.")
        .with_formatting_rules("Use Slack markdown.")
        .with_constraints("No customer names.")
        .with_examples(":rocket: *Shipped:* faster search");

    let prompt = render_prompt(&template, "  v2 is live for everyone.\n");
    assert_eq!(prompt, load_golden("full_template.txt"));
    assert!(!prompt.contains("Never rendered"));
    assert!(!prompt.contains("megaphone"));
}

#[test]
fn test_padded_fields_match_golden() {
    let template = Template::new("  ", "\n  Summarize the update.  ")
        .with_persona("  You are a PM.\n")
        .with_tone_and_style("\tbrief ")
        .with_audience("   ")
        .with_examples("\n\n");

    let prompt = render_prompt(&template, "\n Launched v2 yesterday. \n");
    assert_eq!(prompt, load_golden("summarize_update.txt"));
}

#[test]
fn test_defaults_render_objective_first() {
    for template in default_templates() {
        let prompt = render_prompt(&template, "Some notes.");
        assert!(
            prompt.starts_with(template.objective.trim()),
            "{} does not lead with its objective",
            template.name
        );
        assert!(prompt.ends_with(CLOSING_DIRECTIVE));
        assert!(prompt.contains("Context:\nSome notes."));
    }
}

#[test]
fn test_no_trailing_newline() {
    let prompt = render_prompt(&Template::new("x", "Do it."), "notes");
    assert!(!prompt.ends_with('\n'));
}
