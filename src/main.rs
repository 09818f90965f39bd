//! diff-checker: line and word level text comparison tool
//!
//! Aligns two text files line by line and highlights word changes inside
//! lines that are similar but not identical.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use diff_checker::{
    cli,
    config::{
        self, AppConfig, ConfigPreset, DiffConfig, DiffPaths, Validatable,
        STRICT_SIMILARITY_THRESHOLD,
    },
    pipeline::exit_codes,
    reports::{ReportFormat, TextColor},
};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nOutput Formats:",
        "\n  console, summary, json",
        "\n\nColors:",
        "\n  black, red, green, yellow, blue, magenta, cyan, white"
    )
}

#[derive(Parser)]
#[command(name = "diff-checker")]
#[command(version, long_version = build_long_version())]
#[command(about = "Line and word level text diff", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected (or --fail-on-change not set)
    1  Changes detected with --fail-on-change
    2  Error occurred

EXAMPLES:
    # Compare a.txt and b.txt in the current directory
    diff-checker diff

    # Compare two files with custom colors
    diff-checker diff old.txt new.txt --a-color red --b-color green

    # CI check with a machine-readable report
    diff-checker diff old.txt new.txt -o json --fail-on-change > diff.json")]
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
    #[arg(long, global = true, env = "DIFF_CHECKER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Global flags shared by every subcommand
struct GlobalArgs {
    quiet: bool,
    no_color: bool,
    config: Option<PathBuf>,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to input A
    #[arg(default_value = "a.txt")]
    a: PathBuf,

    /// Path to input B
    #[arg(default_value = "b.txt")]
    b: PathBuf,

    /// Output format (auto: console listing)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Configuration preset (default, strict, loose, ci-cd)
    #[arg(long)]
    preset: Option<String>,

    /// Share of identical tokens a line pair must exceed to be shown as similar
    #[arg(long, value_parser = parse_threshold)]
    threshold: Option<f64>,

    /// Use the strict similarity threshold
    #[arg(long, conflicts_with = "threshold")]
    strict: bool,

    /// Color of text only in A
    #[arg(long, alias = "before-color", value_enum)]
    a_color: Option<TextColor>,

    /// Color of text only in B
    #[arg(long, alias = "after-color", value_enum)]
    b_color: Option<TextColor>,

    /// Only list lines that differ
    #[arg(long)]
    only_changes: bool,

    /// Exit with code 1 if the inputs differ
    #[arg(long)]
    fail_on_change: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two text files
    Diff(DiffArgs),

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

    /// Generate a man page and print it to stdout
    Man,
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .diff-checker.yaml in the current directory
    Init,
}

fn parse_threshold(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("must be between 0.0 and 1.0, got {value}"))
    }
}

/// Layer the command line over the file configuration.
fn build_diff_config(globals: &GlobalArgs, args: DiffArgs) -> Result<DiffConfig> {
    let (mut app_config, loaded_from) = config::load_or_default(globals.config.as_deref());
    if let Some(path) = &loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }

    if let Some(name) = &args.preset {
        let preset = ConfigPreset::from_name(name).with_context(|| {
            let names: Vec<_> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
            format!("unknown preset '{name}' (expected one of: {})", names.join(", "))
        })?;
        app_config.merge(&AppConfig::from_preset(preset));
    }

    let threshold = args
        .threshold
        .or_else(|| args.strict.then_some(STRICT_SIMILARITY_THRESHOLD));

    let mut overrides = AppConfig::builder()
        .output_file(args.output_file)
        .no_color(globals.no_color)
        .fail_on_change(args.fail_on_change)
        .quiet(globals.quiet);
    if let Some(format) = args.output {
        overrides = overrides.output_format(format);
    }
    if let Some(threshold) = threshold {
        overrides = overrides.similarity_threshold(threshold);
    }
    if let Some(color) = args.a_color {
        overrides = overrides.a_color(color);
    }
    if let Some(color) = args.b_color {
        overrides = overrides.b_color(color);
    }
    let mut overrides = overrides.build();
    overrides.output.only_changes = args.only_changes;
    app_config.merge(&overrides);

    // An explicit threshold wins even when it equals the default.
    if let Some(threshold) = threshold {
        app_config.matching.similarity_threshold = threshold;
    }

    let config = DiffConfig::from_app_config(
        DiffPaths {
            a: args.a,
            b: args.b,
        },
        &app_config,
    );

    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<_> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("invalid configuration:\n  {}", details.join("\n  "));
    }

    Ok(config)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:?}");
        std::process::exit(exit_codes::ERROR);
    }
}

fn run() -> Result<()> {
    let Cli {
        verbose,
        quiet,
        no_color,
        config: config_path,
        command,
    } = Cli::parse();
    let globals = GlobalArgs {
        quiet,
        no_color,
        config: config_path,
    };

    // Initialize logging
    let log_level = if verbose { "debug" } else { "info" };
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

    match command {
        Commands::Diff(args) => {
            let config = build_diff_config(&globals, args)?;
            let exit_code = cli::run_diff(&config)?;
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "diff-checker", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema =
                config::generate_json_schema().context("failed to serialize config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(globals.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                for error in config.validate() {
                    eprintln!("# warning: {error}");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("diff-checker").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[
                    ".diff-checker.yaml",
                    ".diff-checker.yml",
                    "diff-checker.yaml",
                    "diff-checker.yml",
                ] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(globals.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".diff-checker.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },

        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut buf = Vec::new();
            man.render(&mut buf).context("failed to render man page")?;
            io::stdout().write_all(&buf)?;
            Ok(())
        }
    }
}
