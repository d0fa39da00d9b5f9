//! Template CLI commands.
//!
//! Every command works on a loaded [`TemplateCatalog`] and writes its
//! human-facing output to the supplied writer, which is stdout in the
//! binary and a buffer in tests.

use crate::models::Template;
use crate::services::{TemplateCatalog, TemplateEditor};
use crate::session::{Clipboard, FileClipboard, PromptSession, ScriptedSpeech, WriterClipboard};
use crate::{Error, Result};
use std::io::{Read, Write};
use std::path::PathBuf;

/// Summary column width in table output.
const SUMMARY_WIDTH: usize = 48;

/// Output format for template commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format (default for list).
    #[default]
    Table,
    /// JSON format.
    Json,
    /// Labeled plain text (default for show).
    Text,
}

impl OutputFormat {
    /// Parses output format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "text" | "plain" => Self::Text,
            _ => Self::Table,
        }
    }
}

/// Field values given on the command line for `add` and `update`.
///
/// `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct TemplateFields {
    /// Display name.
    pub name: Option<String>,
    /// Primary instruction.
    pub objective: Option<String>,
    /// Short description.
    pub summary: Option<String>,
    /// Icon token.
    pub icon_token: Option<String>,
    /// Internal note, never rendered.
    pub internal_note: Option<String>,
    /// Channel or environment.
    pub channel: Option<String>,
    /// Audience.
    pub audience: Option<String>,
    /// Tone and style.
    pub tone_and_style: Option<String>,
    /// Length guidance.
    pub length_guidance: Option<String>,
    /// Output structure.
    pub output_structure: Option<String>,
    /// Formatting rules.
    pub formatting_rules: Option<String>,
    /// Constraints.
    pub constraints: Option<String>,
    /// Persona.
    pub persona: Option<String>,
    /// Examples.
    pub examples: Option<String>,
}

impl TemplateFields {
    /// Copies every given field onto `template`.
    pub fn apply(self, template: &mut Template) {
        let targets = [
            (self.name, &mut template.name),
            (self.objective, &mut template.objective),
            (self.summary, &mut template.summary),
            (self.icon_token, &mut template.icon_token),
            (self.internal_note, &mut template.internal_note),
            (self.channel, &mut template.channel_or_environment),
            (self.audience, &mut template.audience),
            (self.tone_and_style, &mut template.tone_and_style),
            (self.length_guidance, &mut template.length_guidance),
            (self.output_structure, &mut template.output_structure),
            (self.formatting_rules, &mut template.formatting_rules),
            (self.constraints, &mut template.constraints),
            (self.persona, &mut template.persona),
            (self.examples, &mut template.examples),
        ];

        for (value, field) in targets {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

/// Where `render` takes its notes from.
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    /// Template id or name.
    pub reference: String,
    /// Inline notes.
    pub notes: Option<String>,
    /// File to read notes from.
    pub notes_file: Option<PathBuf>,
    /// Write the prompt here instead of stdout.
    pub output: Option<PathBuf>,
}

/// Executes the `list` command.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn cmd_list(catalog: &TemplateCatalog, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, catalog.templates()),
        OutputFormat::Table | OutputFormat::Text => write_table(out, catalog.templates()),
    }
}

/// Executes the `show` command.
///
/// # Errors
///
/// Returns an error if the template is not found or output cannot be
/// written.
pub fn cmd_show(
    catalog: &TemplateCatalog,
    reference: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let template = catalog.resolve(reference)?;
    match format {
        OutputFormat::Json => write_json(out, template),
        OutputFormat::Table | OutputFormat::Text => write_details(out, template),
    }
}

/// Executes the `add` command.
///
/// # Errors
///
/// Returns an error if the name or objective is not given, the new template
/// fails validation, or output cannot be written.
pub fn cmd_add(
    catalog: &mut TemplateCatalog,
    fields: TemplateFields,
    out: &mut dyn Write,
) -> Result<()> {
    if fields.name.is_none() || fields.objective.is_none() {
        return Err(Error::InvalidInput(
            "a new template needs both a name and an objective".to_string(),
        ));
    }

    let mut editor = TemplateEditor::new_template();
    fields.apply(editor.draft_mut());
    let name = editor.draft().name.clone();
    let id = editor.commit(catalog)?;

    write_line(out, &format!("Added template: {name} ({id})"))?;
    warn_if_unsaved(catalog, out)
}

/// Executes the `update` command.
///
/// # Errors
///
/// Returns an error if the template is not found, the result fails
/// validation, or output cannot be written.
pub fn cmd_update(
    catalog: &mut TemplateCatalog,
    reference: &str,
    fields: TemplateFields,
    out: &mut dyn Write,
) -> Result<()> {
    let mut editor = TemplateEditor::edit(catalog.resolve(reference)?);
    fields.apply(editor.draft_mut());
    let name = editor.draft().name.clone();
    let id = editor.commit(catalog)?;

    write_line(out, &format!("Updated template: {name} ({id})"))?;
    warn_if_unsaved(catalog, out)
}

/// Executes the `delete` command.
///
/// # Errors
///
/// Returns an error if the template is not found or output cannot be
/// written.
pub fn cmd_delete(catalog: &mut TemplateCatalog, reference: &str, out: &mut dyn Write) -> Result<()> {
    let (id, name) = {
        let template = catalog.resolve(reference)?;
        (template.id, template.name.clone())
    };
    catalog.delete(&id);

    write_line(out, &format!("Deleted template: {name} ({id})"))?;
    warn_if_unsaved(catalog, out)
}

/// Executes the `reset-defaults` command.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn cmd_reset_defaults(catalog: &mut TemplateCatalog, out: &mut dyn Write) -> Result<()> {
    catalog.reset_to_defaults();
    write_line(out, &format!("Restored {} default templates", catalog.len()))?;
    warn_if_unsaved(catalog, out)
}

/// Executes the `render` command.
///
/// Notes come from `--notes`, `--notes-file`, or `stdin`, in that order;
/// naming more than one source is an error. The prompt goes to
/// `--output` when given, otherwise to `out` followed by a newline.
///
/// # Errors
///
/// Returns an error if the template is not found, the notes are missing or
/// blank, or the prompt cannot be written.
pub fn cmd_render(
    catalog: &TemplateCatalog,
    args: RenderArgs,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<()> {
    let template_id = catalog.resolve(&args.reference)?.id;
    let notes = read_notes(args.notes, args.notes_file, stdin)?;

    let mut speech = ScriptedSpeech::new(notes);
    let mut session = PromptSession::new();
    session.handle_activation(catalog, &mut speech);
    session.select(template_id);
    session.advance();

    session.toggle_recording(&mut speech);
    session.toggle_recording(&mut speech);
    if let Some(message) = session.error_message() {
        return Err(Error::InvalidInput(message.to_string()));
    }

    let mut clipboard: Box<dyn Clipboard + '_> = match args.output {
        Some(path) => Box::new(FileClipboard::new(path)),
        None => Box::new(WriterClipboard::new(out).with_terminator("\n")),
    };

    if !session.copy_prompt(catalog, clipboard.as_mut())? {
        return Err(Error::InvalidInput("notes are required to render a prompt".to_string()));
    }
    tracing::debug!(template = %template_id, "Rendered prompt");
    Ok(())
}

/// Picks the single notes source.
fn read_notes(
    notes: Option<String>,
    notes_file: Option<PathBuf>,
    stdin: &mut dyn Read,
) -> Result<String> {
    match (notes, notes_file) {
        (Some(_), Some(_)) => Err(Error::InvalidInput(
            "use either --notes or --notes-file, not both".to_string(),
        )),
        (Some(notes), None) => Ok(notes),
        (None, Some(path)) => std::fs::read_to_string(&path).map_err(|e| {
            Error::operation("read_notes_file", format!("{}: {e}", path.display()))
        }),
        (None, None) => {
            let mut buffer = String::new();
            stdin
                .read_to_string(&mut buffer)
                .map_err(|e| Error::operation("read_notes_stdin", e))?;
            Ok(buffer)
        },
    }
}

fn write_table(out: &mut dyn Write, templates: &[Template]) -> Result<()> {
    if templates.is_empty() {
        return write_line(out, "No templates found.");
    }

    write_line(out, &format!("{:<36}  {:<32}  SUMMARY", "ID", "NAME"))?;
    write_line(out, &"-".repeat(36 + 2 + 32 + 2 + SUMMARY_WIDTH))?;
    for template in templates {
        write_line(
            out,
            &format!(
                "{:<36}  {:<32}  {}",
                template.id,
                truncate(&template.name, 32),
                truncate(&template.summary, SUMMARY_WIDTH)
            ),
        )?;
    }
    write_line(out, "")?;
    write_line(out, &format!("Total: {} templates", templates.len()))
}

fn write_details(out: &mut dyn Write, template: &Template) -> Result<()> {
    write_line(out, &format!("Name: {}", template.name))?;
    write_line(out, &format!("ID: {}", template.id))?;

    let fields = [
        ("Summary", &template.summary),
        ("Icon", &template.icon_token),
        ("Internal note", &template.internal_note),
        ("Channel or environment", &template.channel_or_environment),
        ("Objective", &template.objective),
        ("Audience", &template.audience),
        ("Tone and style", &template.tone_and_style),
        ("Length", &template.length_guidance),
        ("Output structure", &template.output_structure),
        ("Formatting rules", &template.formatting_rules),
        ("Constraints", &template.constraints),
        ("Persona", &template.persona),
        ("Examples", &template.examples),
    ];
    for (label, value) in fields {
        if !value.trim().is_empty() {
            write_line(out, &format!("{label}: {value}"))?;
        }
    }
    Ok(())
}

fn write_json<T: serde::Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| Error::operation("serialize_json", e))?;
    write_line(out, &json)
}

fn warn_if_unsaved(catalog: &TemplateCatalog, out: &mut dyn Write) -> Result<()> {
    if catalog.is_persisted() {
        return Ok(());
    }
    write_line(out, "Warning: changes could not be saved and will be lost on exit")
}

fn write_line(out: &mut dyn Write, line: &str) -> Result<()> {
    out.write_all(line.as_bytes())
        .and_then(|()| out.write_all(b"\n"))
        .map_err(|e| Error::operation("write_output", e))
}

/// Shortens `s` to at most `width` characters, marking the cut with "...".
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let kept: String = s.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}
