mod command;
mod config;
mod term;
mod theme;

pub use command::{DesignCommand, FillCommand};
pub use config::*;
pub use term::TerminalHost;

use anyhow::Result;
use clap::Parser;
use dynform::Forms;
use dynform_driver_memory::Memory;
use dynform_driver_sqlite::Sqlite;
use std::path::PathBuf;

/// Terminal host for designing form templates and filling them in
pub struct DynformCli {
    forms: Forms,
    config: Config,
}

impl DynformCli {
    /// Create a new DynformCli instance on the given record store
    pub fn new(forms: Forms) -> Self {
        Self {
            forms,
            config: Config::default(),
        }
    }

    /// Create a new DynformCli instance with a custom configuration
    pub fn with_config(forms: Forms, config: Config) -> Self {
        Self { forms, config }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn run(&self, cli: Cli) -> Result<()> {
        match cli.command {
            Command::Design(cmd) => cmd.run(&self.forms, &self.config).await,
            Command::Fill(cmd) => cmd.run(&self.forms, &self.config).await,
        }
    }
}

/// Opens the record store a `[store] url` points at: `memory:` or a
/// `sqlite:` URL.
pub fn open_store(url: &str) -> Result<Forms> {
    log::debug!(target: "dynform", "opening store {url}");

    if url == "memory:" {
        return Ok(Forms::new(Memory::new()));
    }
    Ok(Forms::new(Sqlite::new(url)?))
}

#[derive(Parser, Debug)]
#[command(name = "dynform")]
#[command(about = "dynform - design form templates and fill them in")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, env = "DYNFORM_CONFIG", default_value = "dynform.toml")]
    pub config: PathBuf,

    /// Record store URL, overriding `[store] url`
    #[arg(long, global = true, env = "DYNFORM_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Build a schema and save it as a template
    Design(DesignCommand),

    /// Open the form of a host item
    Fill(FillCommand),
}
