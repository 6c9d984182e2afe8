//! # form-forge-cli
//!
//! CLI tool for generating Lightning Web Component bundles from form designs.
//!
//! ## Usage
//!
//! ```bash
//! # Generate the bundle for a design
//! form-forge generate contact.json
//!
//! # Generate into a specific directory and bundle
//! form-forge generate contact.json --output ./lwc --bundle contactForm
//!
//! # Watch mode for development
//! form-forge generate contact.json --watch
//!
//! # Dry run to preview the output
//! form-forge generate contact.json --dry-run
//!
//! # List the field palette
//! form-forge catalog
//!
//! # Initialize configuration
//! form-forge init
//!
//! # Check that the generated bundle is up-to-date
//! form-forge validate contact.json
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use form_forge::catalog::{self, CatalogEntry};
use form_forge_cli::{
    config::{CliArgs, Config, ConfigManager, CONFIG_FILENAME},
    design::DesignLoader,
    error::CliError,
    generator::{BundleGenerator, GeneratedBundle},
    watcher::FileWatcher,
    writer::{is_current, FileWriter, WriteResult},
};

#[derive(Parser)]
#[command(name = "form-forge")]
#[command(author, version, about = "Generate Lightning Web Components from form designs", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the component bundle for a design
    Generate {
        /// Design file (.json or .toml)
        design: PathBuf,

        /// Directory holding component bundles
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Bundle name
        #[arg(short, long)]
        bundle: Option<String>,

        /// Exported class name
        #[arg(long)]
        class_name: Option<String>,

        /// Watch the design for changes and regenerate
        #[arg(short, long)]
        watch: bool,

        /// Preview output without writing files
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate that the generated bundle is up-to-date
    Validate {
        /// Design file (.json or .toml)
        design: PathBuf,

        /// Directory holding component bundles
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Bundle name
        #[arg(short, long)]
        bundle: Option<String>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the field palette and the properties each field supports
    Catalog {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize a new form-forge configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = CONFIG_FILENAME)]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Generate {
            design,
            output,
            bundle,
            class_name,
            watch,
            dry_run,
            config,
        } => {
            let args = CliArgs {
                output,
                bundle,
                class_name,
            };
            cmd_generate(&design, &args, watch, dry_run, config)
        }

        Commands::Validate {
            design,
            output,
            bundle,
            config,
        } => {
            let args = CliArgs {
                output,
                bundle,
                ..Default::default()
            };
            cmd_validate(&design, &args, config)
        }

        Commands::Catalog { json } => cmd_catalog(json),

        Commands::Init { output, force } => cmd_init(output, force),
    }
}

/// Load, merge and check the configuration.
fn load_config(config_path: Option<&Path>, args: &CliArgs) -> Result<Config, CliError> {
    let config = ConfigManager::resolve(config_path, args)?;
    debug!(?config, "Resolved configuration");
    Ok(config)
}

/// Generate command implementation.
fn cmd_generate(
    design: &Path,
    args: &CliArgs,
    watch: bool,
    dry_run: bool,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = load_config(config_path.as_deref(), args)?;

    if watch {
        run_watch_mode(design, &config, config_path.as_deref(), args, dry_run)
    } else {
        run_generate(design, &config, dry_run)
    }
}

/// Run bundle generation once.
fn run_generate(design: &Path, config: &Config, dry_run: bool) -> Result<(), CliError> {
    println!("{} {}", "Loading design".cyan(), design.display());

    let schema = DesignLoader::load(design)?;
    println!("  Found {} component(s)", schema.len().to_string().green());

    let bundle = BundleGenerator::new(config.clone()).generate(&schema);
    print_warnings(&bundle);

    let writer = FileWriter::new(dry_run);
    for (path, content) in bundle.files() {
        match writer.write(path, content)? {
            WriteResult::Written { path, bytes } => {
                println!(
                    "{} Written {} bytes to {}",
                    "✓".green(),
                    bytes,
                    path.display()
                );
            }
            WriteResult::Unchanged { path } => {
                println!("{} Unchanged {}", "✓".green(), path.display());
            }
            WriteResult::DryRun { content, path } => {
                println!(
                    "{} Would write to {}:",
                    "[dry-run]".yellow(),
                    path.display()
                );
                println!("{}", "─".repeat(60).dimmed());
                print!("{}", content);
                println!("{}", "─".repeat(60).dimmed());
            }
        }
    }

    Ok(())
}

fn print_warnings(bundle: &GeneratedBundle) {
    if bundle.warnings.is_empty() {
        return;
    }

    println!(
        "{} {} design warning(s):",
        "Warning:".yellow(),
        bundle.warnings.len()
    );
    for warning in &bundle.warnings {
        warn!(id = ?warning.id(), "{}", warning);
        println!("  {}", warning);
    }
}

/// Run in watch mode.
fn run_watch_mode(
    design: &Path,
    config: &Config,
    config_path: Option<&Path>,
    args: &CliArgs,
    dry_run: bool,
) -> Result<(), CliError> {
    println!("{}", "Starting watch mode...".cyan());
    println!("  Watching: {}", design.display());
    println!("  Press Ctrl+C to stop\n");

    if let Err(e) = run_generate(design, config, dry_run) {
        println!("{} {}", "Generation error:".red(), e);
    }

    let mut watcher = FileWatcher::new(design);
    if let Some(path) = config_path {
        watcher = watcher.with_file(path);
    }
    let (_debouncer, rx) = watcher.watch()?;

    println!("\n{}", "Watching for changes...".cyan());

    let mut config = config.clone();
    while let Ok(event) = rx.recv() {
        if event.is_error() {
            println!(
                "{} {}",
                "Watch error:".red(),
                event.error_message().unwrap_or("Unknown error")
            );
            continue;
        }

        if let Some(path) = event.path() {
            println!("\n{} {}", "File changed:".cyan(), path.display());

            if config_path.is_some_and(|c| c.file_name() == path.file_name()) {
                match ConfigManager::reload(&config, config_path, args) {
                    Ok(reloaded) => {
                        debug!(config = ?reloaded, "Reloaded configuration");
                        config = reloaded;
                    }
                    Err(e) => {
                        println!("{} {}", "Keeping previous configuration:".red(), e);
                    }
                }
            }
        }

        if let Err(e) = run_generate(design, &config, dry_run) {
            println!("{} {}", "Generation error:".red(), e);
        }

        println!("\n{}", "Watching for changes...".cyan());
    }

    Ok(())
}

/// Validate command implementation.
fn cmd_validate(
    design: &Path,
    args: &CliArgs,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    println!("{}", "Validating bundle...".cyan());

    let config = load_config(config_path.as_deref(), args)?;
    let schema = DesignLoader::load(design)?;
    let bundle = BundleGenerator::new(config).generate(&schema);
    print_warnings(&bundle);

    let stale: Vec<&PathBuf> = bundle
        .files()
        .into_iter()
        .filter(|(path, content)| !is_current(path, content))
        .map(|(path, _)| path)
        .collect();

    if stale.is_empty() {
        println!("{} Bundle is up-to-date", "✓".green());
        return Ok(());
    }

    for path in &stale {
        println!("{} {} is out of date", "✗".red(), path.display());
    }
    println!("  Run 'form-forge generate {}' to update", design.display());
    Err(CliError::Validation(format!(
        "{} generated file(s) out of date",
        stale.len()
    )))
}

#[derive(Serialize)]
struct CatalogRow<'a> {
    #[serde(flatten)]
    entry: &'a CatalogEntry,
    properties: Vec<&'static str>,
}

/// Catalog command implementation.
fn cmd_catalog(json: bool) -> Result<(), CliError> {
    let rows: Vec<CatalogRow> = catalog::entries()
        .iter()
        .map(|entry| CatalogRow {
            entry,
            properties: entry
                .field_type()
                .visibility()
                .applicable()
                .into_iter()
                .map(|property| property.as_str())
                .collect(),
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&rows)
            .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
        println!("{}", out);
        return Ok(());
    }

    for row in &rows {
        println!(
            "{:<16} {:<16} {}",
            row.entry.name.bold(),
            row.entry.tag.cyan(),
            row.properties.join(", ").dimmed()
        );
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    ConfigManager::init(&output, force)?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
