//! Adpilot - AI campaign wizard for search ads.
//!
//! Walks a business through strategy, keyword research and ad copy, with
//! each step generated by a structured-output LLM call.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use adpilot::ai::{provider_from_config, GenerationClient};
use adpilot::campaign::BusinessField;
use adpilot::core::Config;
use adpilot::wizard::{Action, WizardController};
use adpilot::{tui, App};

/// AI campaign wizard for search ads
#[derive(Parser)]
#[command(name = "adpilot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the campaign wizard (default)
    Run,

    /// Generate a full campaign without the TUI
    Generate {
        /// Business name
        #[arg(long)]
        name: String,

        /// What the business sells or offers
        #[arg(long)]
        description: String,

        /// Website URL
        #[arg(long, default_value = "")]
        website: String,

        /// Target audience
        #[arg(long, default_value = "")]
        audience: String,

        /// Approximate monthly budget
        #[arg(long, default_value = "")]
        budget: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show configuration
    Config {
        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Write the current settings to the global config file
        #[arg(long, conflicts_with = "path")]
        init: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load()?;

    let interactive = matches!(cli.command, None | Some(Commands::Run));
    init_logging(cli.verbose, interactive, &config);

    match cli.command {
        None | Some(Commands::Run) => cmd_run(config)?,
        Some(Commands::Generate { name, description, website, audience, budget, format }) => {
            let fields = [
                (BusinessField::Name, name),
                (BusinessField::Description, description),
                (BusinessField::Website, website),
                (BusinessField::Audience, audience),
                (BusinessField::Budget, budget),
            ];
            cmd_generate(&config, fields, format)?;
        }
        Some(Commands::Config { path, init }) => cmd_config(&config, path, init)?,
        Some(Commands::Completions { shell }) => cmd_completions(shell),
    }

    Ok(())
}

/// Setup logging.
///
/// The TUI owns the terminal, so interactive sessions log to a file; all
/// other commands log to stderr.
fn init_logging(verbose: bool, interactive: bool, config: &Config) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if interactive {
        let file = config.log_path().and_then(|path| {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).ok()?;
            }
            OpenOptions::new().create(true).append(true).open(path).ok()
        });

        if let Some(file) = file {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(filter)
                .init();
        }
        return;
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn build_wizard(config: &Config) -> Result<WizardController> {
    let provider = provider_from_config(&config.ai)?;
    Ok(WizardController::new(GenerationClient::new(provider)))
}

/// Run the interactive wizard.
fn cmd_run(config: Config) -> Result<()> {
    let wizard = build_wizard(&config)?;
    let app = App::new(wizard, config);
    tui::run_tui(app)?;
    Ok(())
}

/// Run every step headless and print the finished campaign.
fn cmd_generate(
    config: &Config,
    fields: [(BusinessField, String); 5],
    format: OutputFormat,
) -> Result<()> {
    let mut wizard = build_wizard(config)?;
    for (field, value) in fields {
        wizard.update_field(field, value);
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        for action in [Action::AdvanceToStrategy, Action::AdvanceToKeywords, Action::AdvanceToCreative] {
            eprintln!("{}", wizard.current_step().loading_message());
            wizard.dispatch(action).await?;
        }
        anyhow::Ok(())
    })?;

    wizard.finalize();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(wizard.document())
                .context("Failed to serialize campaign")?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{}", wizard.document().summary()),
    }

    Ok(())
}

/// Show configuration.
fn cmd_config(config: &Config, show_path: bool, init: bool) -> Result<()> {
    if init {
        let path = Config::global_config_path().context("Could not determine config directory")?;
        if path.exists() {
            anyhow::bail!("Config file already exists: {}", path.display());
        }
        config.save()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    if show_path {
        if let Some(path) = Config::global_config_path() {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let toml = toml::to_string_pretty(config)?;
    println!("{toml}");

    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "adpilot", &mut io::stdout());
}
