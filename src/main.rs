//! Binary entry point for prompt-builder.
//!
//! Manages the template catalog and renders prompts from the command line.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::{Args, Parser, Subcommand};
use prompt_builder::cli::{self, OutputFormat, RenderArgs, TemplateFields};
use prompt_builder::config::AppConfig;
use prompt_builder::observability::{self, LoggingConfig};
use prompt_builder::storage::TemplateStoreFactory;
use prompt_builder::{Result, TemplateCatalog};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Environment variable naming a config file.
const CONFIG_PATH_ENV: &str = "PROMPT_BUILDER_CONFIG_PATH";

/// Prompt Builder - assemble LLM prompts from reusable templates.
#[derive(Parser)]
#[command(name = "prompt-builder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the template catalog file.
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// List templates.
    List {
        /// Output format: table, json.
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show one template.
    Show {
        /// Template id or name.
        template: String,

        /// Output format: text, json.
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Add a template.
    Add {
        /// Display name.
        #[arg(long)]
        name: String,

        /// Primary instruction.
        #[arg(long)]
        objective: String,

        #[command(flatten)]
        guidance: GuidanceArgs,
    },

    /// Update fields of a template; omitted fields keep their value.
    Update {
        /// Template id or name.
        template: String,

        /// New display name.
        #[arg(long)]
        name: Option<String>,

        /// New primary instruction.
        #[arg(long)]
        objective: Option<String>,

        #[command(flatten)]
        guidance: GuidanceArgs,
    },

    /// Delete a template.
    Delete {
        /// Template id or name.
        template: String,
    },

    /// Render a prompt from a template and notes.
    ///
    /// Notes are read from stdin unless --notes or --notes-file is given.
    Render {
        /// Template id or name.
        template: String,

        /// Notes text.
        #[arg(short, long, conflicts_with = "notes_file")]
        notes: Option<String>,

        /// File containing the notes.
        #[arg(long)]
        notes_file: Option<PathBuf>,

        /// Write the prompt to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all templates with the built-in defaults.
    ResetDefaults,
}

/// Optional template field flags shared by `add` and `update`.
#[derive(Args)]
struct GuidanceArgs {
    /// Short description.
    #[arg(long)]
    summary: Option<String>,

    /// Icon token.
    #[arg(long)]
    icon: Option<String>,

    /// Internal note (never rendered).
    #[arg(long)]
    note: Option<String>,

    /// Channel or environment.
    #[arg(long)]
    channel: Option<String>,

    /// Audience.
    #[arg(long)]
    audience: Option<String>,

    /// Tone and style.
    #[arg(long)]
    tone: Option<String>,

    /// Length guidance.
    #[arg(long)]
    length: Option<String>,

    /// Output structure.
    #[arg(long)]
    structure: Option<String>,

    /// Formatting rules.
    #[arg(long)]
    formatting: Option<String>,

    /// Constraints.
    #[arg(long)]
    constraints: Option<String>,

    /// Persona.
    #[arg(long)]
    persona: Option<String>,

    /// Examples.
    #[arg(long)]
    examples: Option<String>,
}

impl GuidanceArgs {
    /// Combines these flags with the name and objective flags.
    fn into_fields(self, name: Option<String>, objective: Option<String>) -> TemplateFields {
        TemplateFields {
            name,
            objective,
            summary: self.summary,
            icon_token: self.icon,
            internal_note: self.note,
            channel: self.channel,
            audience: self.audience,
            tone_and_style: self.tone,
            length_guidance: self.length,
            output_structure: self.structure,
            formatting_rules: self.formatting,
            constraints: self.constraints,
            persona: self.persona,
            examples: self.examples,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    let logging = LoggingConfig::from_settings(Some(&config.logging), cli.verbose);
    if let Err(e) = observability::init(logging) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(cli: Cli, mut config: AppConfig) -> Result<()> {
    if let Some(store) = cli.store {
        config = config.with_store_path(store);
    }

    let store = TemplateStoreFactory::create(config.store_backend, config.store_path)?;
    let mut catalog = TemplateCatalog::load(store);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::List { format } => cli::cmd_list(&catalog, OutputFormat::parse(&format), &mut out),
        Commands::Show { template, format } => {
            cli::cmd_show(&catalog, &template, OutputFormat::parse(&format), &mut out)
        },
        Commands::Add {
            name,
            objective,
            guidance,
        } => {
            let fields = guidance.into_fields(Some(name), Some(objective));
            cli::cmd_add(&mut catalog, fields, &mut out)
        },
        Commands::Update {
            template,
            name,
            objective,
            guidance,
        } => {
            let fields = guidance.into_fields(name, objective);
            cli::cmd_update(&mut catalog, &template, fields, &mut out)
        },
        Commands::Delete { template } => cli::cmd_delete(&mut catalog, &template, &mut out),
        Commands::Render {
            template,
            notes,
            notes_file,
            output,
        } => {
            let args = RenderArgs {
                reference: template,
                notes,
                notes_file,
                output,
            };
            cli::cmd_render(&catalog, args, &mut io::stdin().lock(), &mut out)
        },
        Commands::ResetDefaults => cli::cmd_reset_defaults(&mut catalog, &mut out),
    };

    result?;
    out.flush()
        .map_err(|e| prompt_builder::Error::operation("flush_stdout", e))
}

/// Loads configuration from `--config`, the environment, or the default
/// location, in that order.
fn load_config(path: Option<&std::path::Path>) -> Result<AppConfig> {
    if let Some(config_path) = path {
        return AppConfig::load_from_file(config_path);
    }

    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        if !config_path.trim().is_empty() {
            return AppConfig::load_from_file(std::path::Path::new(&config_path));
        }
    }

    Ok(AppConfig::load_default())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("prompt-builder").chain(args.iter().copied()))
    }

    #[test]
    fn test_add_requires_name_and_objective() {
        assert!(parse(&["add"]).is_err());
        assert!(parse(&["add", "--name", "Standup"]).is_err());
        assert!(parse(&["add", "--objective", "Write it."]).is_err());
        assert!(parse(&["add", "--name", "Standup", "--objective", "Write it."]).is_ok());
    }

    #[test]
    fn test_update_flags_are_optional() {
        let cli = parse(&["update", "Standup", "--tone", "Brief."]).unwrap();
        let Commands::Update { name, guidance, .. } = cli.command else {
            panic!("expected update");
        };
        assert!(name.is_none());

        let fields = guidance.into_fields(name, None);
        assert_eq!(fields.tone_and_style.as_deref(), Some("Brief."));
        assert!(fields.objective.is_none());
    }
}
