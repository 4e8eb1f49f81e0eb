//! PDG Table CLI - Generate particle tables from a PDG catalog.
//!
//! Writes either a plain comma-separated table or a C++ source file holding
//! one `ParticleData` expression per particle.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pdg_table_core::Dialect;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod config;

use commands::{config as config_cmd, generate};
use config::Config;

/// PDG Table CLI - Generate particle tables from a PDG catalog.
///
/// Run `pdg-table` or `pdg-table text` to write the plain table.
#[derive(Parser, Debug)]
#[command(
    name = "pdg-table",
    author,
    version,
    about = "Generate plain-text and C++ particle tables from a PDG catalog",
    long_about = None
)]
struct Cli {
    /// JSON particle catalog (overrides PDG_CATALOG and the config file)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the comma-separated table (default command).
    Text {
        /// Destination file (defaults to pdg-table.txt).
        output: Option<PathBuf>,
    },

    /// Write the C++ source table.
    Cpp {
        /// Destination file (defaults to PDGTable.cc).
        output: Option<PathBuf>,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Default to the text table if no command given
    let command = cli.command.unwrap_or(Commands::Text { output: None });

    match command {
        Commands::Text { output } => {
            let config = Config::load()?;
            generate::execute(&config, Dialect::Text, cli.catalog, output)?;
        }

        Commands::Cpp { output } => {
            let config = Config::load()?;
            generate::execute(&config, Dialect::Cpp, cli.catalog, output)?;
        }

        Commands::Config(config_cmd_inner) => match config_cmd_inner {
            ConfigCommands::Show => {
                config_cmd::show(&Config::load()?)?;
            }
            ConfigCommands::Set { key, value } => {
                // Only persist what the file holds, never one-off env overrides
                let mut config = Config::load_file()?;
                config_cmd::set(&mut config, &key, &value)?;
            }
            ConfigCommands::Get { key } => {
                config_cmd::get(&Config::load()?, &key)?;
            }
            ConfigCommands::Reset => {
                config_cmd::reset()?;
            }
            ConfigCommands::Path => {
                if let Some(path) = Config::config_file_path() {
                    println!("{}", path.display());
                } else {
                    println!("(no config file path available)");
                }
            }
        },
    }

    Ok(())
}
