//! CLI for the tinylink URL shortener.

mod commands;
mod repl;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tinylink_core::codegen::CodeGenerator;
use tinylink_core::config;

use commands::{run_mint, run_session};

/// Top-level CLI for the tinylink URL shortener.
#[derive(Debug, Parser)]
#[command(name = "tinylink")]
#[command(about = "tinylink: shorten URLs and manage them per account", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Start an interactive session. The store lives until the session ends.
    Run {
        /// Seed the session with the built-in example accounts and links.
        #[arg(long)]
        examples: bool,
    },

    /// Generate short codes without touching any store.
    Mint {
        /// How many codes to print.
        #[arg(long, default_value = "1", value_name = "N")]
        count: usize,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let gen = CodeGenerator::from_config(&cfg);

        match cli.command {
            CliCommand::Run { examples } => run_session(&gen, examples)?,
            CliCommand::Mint { count } => run_mint(&gen, count),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
