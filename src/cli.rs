//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::commands;
use sitepub::output::OutputMode;

/// sitepub - Regenerate a static site and publish it
#[derive(Parser, Debug)]
#[command(
    name = "sitepub",
    version,
    about = "Regenerate a static site and publish it",
    long_about = "Regenerate a static site and publish it through its output repository.\n\n\
                  Run from the sources repository root. The output directory is a nested\n\
                  repository that is cleaned, regenerated, committed and pushed to its\n\
                  publish branch; the sources repository is then optionally committed\n\
                  and pushed too. Do not run two publishes against the same trees at once."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Sources repository root (default: current directory)
    #[arg(short = 'C', long = "dir", global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Configuration file (default: <root>/.sitepub.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Answer yes at every confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands; none means `publish`
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Regenerate and publish the site (the default)
    Publish,

    /// Write a default .sitepub.toml in the sources repository
    Init {
        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show the branch and working-tree state of both repositories
    Status,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let source_root = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    let config_path = cli.config.as_deref();

    match cli.command.unwrap_or(Command::Publish) {
        Command::Publish => commands::publish(&source_root, config_path, cli.yes, output_mode),
        Command::Init { force } => commands::init(&source_root, force, output_mode),
        Command::Status => commands::status(&source_root, config_path, output_mode),
    }
}
