//! lostfound-matcher: rank lost and found item reports against each other.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use lostfound_matcher::{
    cli,
    config::{self, AppConfig, BehaviorConfig, MatchingConfig, OutputConfig},
    model::{ItemId, ItemKind},
    pipeline::{exit_codes, OutputTarget},
    reports::ReportFormat,
    MatchConfig,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lostfound-matcher")]
#[command(version)]
#[command(about = "Rank lost and found item reports by lexical similarity", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  At least one match reported (or --allow-empty)
    1  No candidate passed the threshold
    3  Error occurred

EXAMPLES:
    # Top 3 found items for lost item 12
    lostfound-matcher match items.json --lost 12

    # Stricter threshold, JSON for scripts
    lostfound-matcher match items.json --found 7 --preset strict -o json

    # Every active lost item against the found pool
    lostfound-matcher match-all items.json --kind lost -o table")]
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
    #[arg(long, global = true, env = "LOSTFOUND_MATCHER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Matching and output options shared by `match` and `match-all`.
#[derive(Args)]
struct MatchOptions {
    /// Matching preset (strict, balanced, permissive)
    #[arg(long)]
    preset: Option<String>,

    /// Maximum number of candidates per item
    #[arg(short = 'n', long)]
    top_n: Option<usize>,

    /// Minimum confidence (0-100)
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Output format (auto: summary on a terminal, JSON otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 0 even when nothing matched
    #[arg(long)]
    allow_empty: bool,
}

/// Arguments for the `match` subcommand
#[derive(Parser)]
struct MatchArgs {
    /// JSON snapshot with `lost_items` and `found_items`
    snapshot: PathBuf,

    /// Match the lost item with this id against found items
    #[arg(long, conflicts_with = "found", required_unless_present = "found")]
    lost: Option<u64>,

    /// Match the found item with this id against lost items
    #[arg(long)]
    found: Option<u64>,

    #[command(flatten)]
    options: MatchOptions,
}

/// Arguments for the `match-all` subcommand
#[derive(Parser)]
struct MatchAllArgs {
    /// JSON snapshot with `lost_items` and `found_items`
    snapshot: PathBuf,

    /// Kind of item to use as queries
    #[arg(long, default_value = "lost")]
    kind: ItemKind,

    #[command(flatten)]
    options: MatchOptions,
}

/// Arguments for the `explain` subcommand
#[derive(Parser)]
struct ExplainArgs {
    /// Overall confidence (computed from the components if omitted)
    #[arg(long)]
    confidence: Option<f64>,

    /// Category score (0-100)
    #[arg(long, default_value_t = 0.0)]
    category: f64,

    /// Location score (0-100)
    #[arg(long, default_value_t = 0.0)]
    location: f64,

    /// Description score (0-100)
    #[arg(long, default_value_t = 0.0)]
    description: f64,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank candidates for one stored item
    Match(MatchArgs),

    /// Rank candidates for every active item of one kind
    MatchAll(MatchAllArgs),

    /// Explain a set of component scores
    Explain(ExplainArgs),

    /// Inspect or create configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print the discovered config file and matcher presets
    Path,
    /// Write an example config file
    Init {
        /// Target path (defaults to the user config directory)
        path: Option<PathBuf>,
    },
    /// Print the JSON Schema of the config file format
    Schema,
}

impl MatchOptions {
    /// CLI values as a config layer to merge over the file config.
    fn overrides(&self, cli: &Cli) -> AppConfig {
        AppConfig {
            matching: MatchingConfig {
                preset: self.preset.clone(),
                top_n: self.top_n,
                threshold: self.threshold,
            },
            output: OutputConfig {
                format: self.output,
                file: self.output_file.clone(),
                no_color: cli.no_color,
            },
            behavior: BehaviorConfig {
                quiet: cli.quiet,
                allow_empty: self.allow_empty,
            },
        }
    }
}

fn effective_config(cli: &Cli, options: &MatchOptions) -> AppConfig {
    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &options.overrides(cli));
    if let Some(path) = loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }
    config
}

fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Match(args) => {
            let config = effective_config(cli, &args.options);
            let (kind, id) = match (args.lost, args.found) {
                (Some(id), _) => (ItemKind::Lost, id),
                (None, Some(id)) => (ItemKind::Found, id),
                (None, None) => anyhow::bail!("one of --lost or --found is required"),
            };
            cli::run_match(&args.snapshot, kind, ItemId(id), &config)
        }

        Commands::MatchAll(args) => {
            let config = effective_config(cli, &args.options);
            cli::run_match_all(&args.snapshot, args.kind, &config)
        }

        Commands::Explain(args) => cli::run_explain(
            cli::ExplainArgs {
                confidence: args.confidence,
                category: args.category,
                location: args.location,
                description: args.description,
            },
            args.output,
            &OutputTarget::Stdout,
        ),

        Commands::Config { action } => run_config(cli, action),

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "lostfound-matcher", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_config(cli: &Cli, action: &ConfigAction) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
            match &loaded_from {
                Some(path) => eprintln!("# Loaded from: {}", path.display()),
                None => eprintln!("# No config file found; showing defaults"),
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            match config::discover_config_file(cli.config.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
            if let Some(path) = config::default_config_path() {
                eprintln!("User config location: {}", path.display());
            }
            eprintln!();
            eprintln!("Matching presets:");
            for name in MatchConfig::preset_names() {
                if let Some(preset) = MatchConfig::from_preset(name) {
                    eprintln!("  {name:<12} top {:<3} threshold {:.0}", preset.top_n, preset.threshold);
                }
            }
        }
        ConfigAction::Init { path } => {
            let target = path
                .clone()
                .or_else(config::default_config_path)
                .context("cannot determine a config directory; pass a path")?;
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(&target, config::generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
        ConfigAction::Schema => {
            let schema = config::generate_json_schema().context("failed to serialize schema")?;
            println!("{schema}");
        }
    }
    Ok(exit_codes::SUCCESS)
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
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
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}
