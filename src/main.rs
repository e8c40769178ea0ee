//! web3-focus-slider: score Web3 stack styles against your priorities.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use web3_focus_slider::{
    cli::{self, PresetQuery, ScoreConfig, StylesConfig},
    config::{self, AppConfig, Validatable},
    pipeline::exit_codes,
    reports::ReportFormat,
    scoring::SortField,
};

#[derive(Parser)]
#[command(name = "web3-focus-slider")]
#[command(version)]
#[command(
    about = "Tiny Web3 style slider inspired by Aztec, Zama and soundness-first designs",
    long_about = None
)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  A check failed (missing environment variables, file not found)
    2  Invalid JSON document
    3  Error occurred

EXAMPLES:
    # Score every style for your priorities
    web3-focus-slider score --privacy 9 --soundness 8 --speed 5

    # Styles with the strongest privacy emphasis, top two
    web3-focus-slider styles --sort-by privacy --limit 2

    # Machine-readable listing
    web3-focus-slider styles --json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "WEB3_FOCUS_SLIDER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Privacy importance (0-10, default 8)
    #[arg(short, long, allow_negative_numbers = true)]
    privacy: Option<i64>,

    /// Soundness / proofs importance (0-10, default 7)
    #[arg(long, allow_negative_numbers = true)]
    soundness: Option<i64>,

    /// UX speed importance (0-10, default 6)
    #[arg(long, allow_negative_numbers = true)]
    speed: Option<i64>,

    /// Disable Unicode symbols in output
    #[arg(long)]
    no_unicode: bool,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `styles` subcommand
#[derive(Parser)]
struct StylesArgs {
    /// Sort styles by key, privacy, soundness, or speed (default: key)
    #[arg(long, value_enum)]
    sort_by: Option<SortField>,

    /// Lowest value first when sorting by a numeric field
    #[arg(long, conflicts_with = "descending")]
    ascending: bool,

    /// Highest value first, overriding `ascending: true` from the config file
    #[arg(long)]
    descending: bool,

    /// Show only the top N rows after sorting (0 = show all)
    #[arg(long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Emit JSON instead of a human-readable table
    #[arg(long)]
    json: bool,

    /// Privacy importance used for the fit column
    #[arg(long, allow_negative_numbers = true)]
    privacy: Option<i64>,

    /// Soundness importance used for the fit column
    #[arg(long, allow_negative_numbers = true)]
    soundness: Option<i64>,

    /// UX speed importance used for the fit column
    #[arg(long, allow_negative_numbers = true)]
    speed: Option<i64>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every style profile against your preferences
    Score(ScoreArgs),

    /// List the raw style profiles, sorted and filtered
    Styles(StylesArgs),

    /// List or show focus presets
    Presets {
        #[command(subcommand)]
        action: PresetsAction,
    },

    /// Validate and inspect a JSON file
    CheckJson {
        /// Path to JSON file
        file: PathBuf,

        /// Emit the inspection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that required environment variables are set (no network access)
    Env {
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `presets` command
#[derive(Subcommand)]
enum PresetsAction {
    /// List all focus presets
    List {
        /// Output presets as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single preset by name
    Show {
        /// Preset name (chill / balanced / max)
        name: String,

        /// Output the preset as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .web3-focus-slider.yaml in the current directory
    Init,
}

const fn json_or(json: bool, fallback: ReportFormat) -> ReportFormat {
    if json {
        ReportFormat::Json
    } else {
        fallback
    }
}

const fn direction_flag(ascending: bool, descending: bool) -> Option<bool> {
    if ascending {
        Some(true)
    } else if descending {
        Some(false)
    } else {
        None
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr so reports on stdout stay parseable
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let outcome = match config::load_config(cli.config.as_deref()) {
        Ok((app_config, loaded_from)) => {
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }
            for problem in app_config.validate() {
                tracing::debug!("config: {problem}");
            }
            dispatch(cli, app_config, loaded_from)
        }
        Err(e) => Err(e.into()),
    };
    let exit_code = match outcome {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            exit_codes::ERROR
        }
    };
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn dispatch(cli: Cli, app_config: AppConfig, loaded_from: Option<PathBuf>) -> Result<i32> {
    let no_color = cli.no_color || app_config.output.no_color;

    match cli.command {
        Commands::Score(args) => cli::run_score(ScoreConfig {
            preferences: app_config
                .preferences
                .resolve(args.privacy, args.soundness, args.speed),
            format: args.output.unwrap_or(app_config.output.format),
            output_file: args.output_file,
            unicode: app_config.output.unicode && !args.no_unicode,
            no_color,
            quiet: cli.quiet,
        }),

        Commands::Styles(args) => cli::run_styles(StylesConfig {
            preferences: app_config
                .preferences
                .resolve(args.privacy, args.soundness, args.speed),
            sort_by: args.sort_by.unwrap_or(app_config.listing.sort_by),
            ascending: app_config.listing.resolve_ascending(direction_flag(
                args.ascending,
                args.descending,
            )),
            limit: args.limit.unwrap_or(app_config.listing.limit),
            format: json_or(args.json, app_config.output.format),
            output_file: args.output_file,
            no_color,
            quiet: cli.quiet,
        }),

        Commands::Presets { action } => match action {
            PresetsAction::List { json } => cli::run_presets(
                &PresetQuery::All,
                json_or(json, app_config.output.format),
            ),
            PresetsAction::Show { name, json } => cli::run_presets(
                &PresetQuery::Named(name),
                json_or(json, app_config.output.format),
            ),
        },

        Commands::CheckJson { file, json } => {
            cli::run_check_json(&file, json_or(json, app_config.output.format))
        }

        Commands::Env { json } => cli::run_env(
            &app_config.env.required_vars,
            json_or(json, app_config.output.format),
        ),

        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "web3-focus-slider",
                &mut io::stdout(),
            );
            Ok(0)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(0)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                match &loaded_from {
                    Some(path) => eprintln!("# Loaded from: {}", path.display()),
                    None => eprintln!("# No config file found; showing defaults"),
                }
                for problem in app_config.validate() {
                    tracing::warn!("{problem}");
                }
                let yaml =
                    serde_yaml::to_string(&app_config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(0)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in config::config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(0)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".web3-focus-slider.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(0)
            }
        },
    }
}
