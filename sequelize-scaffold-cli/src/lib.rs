//! sequelize-scaffold CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ModelsCommand, NewCommand, ToolchainCommand};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "sequelize-scaffold")]
#[command(version)]
#[command(
    about = "Generate Sequelize models and bootstrap the Node.js toolchain",
    long_about = None
)]
pub struct Cli {
    /// Config file (defaults to ./sequelize-scaffold.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate models, then install, init and migrate
    New {
        /// Project directory name (relative to the current directory)
        name: String,
        /// Schema file (.json or .toml)
        #[arg(short, long)]
        schema: PathBuf,
        /// Only generate model files
        #[arg(long)]
        skip_toolchain: bool,
        /// Treat a failing toolchain step as an error
        #[arg(long)]
        strict: bool,
    },
    /// Generate model files only
    Models {
        /// Project directory name (relative to the current directory)
        name: String,
        /// Schema file (.json or .toml)
        #[arg(short, long)]
        schema: PathBuf,
    },
    /// Run install, init and migrate in an existing project
    Toolchain {
        /// Project directory name (relative to the current directory)
        name: String,
        /// Treat a failing toolchain step as an error
        #[arg(long)]
        strict: bool,
    },
}
