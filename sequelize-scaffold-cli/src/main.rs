//! sequelize-scaffold CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use sequelize_scaffold::observability;
use sequelize_scaffold_cli_lib::commands::load_config;
use sequelize_scaffold_cli_lib::{Cli, Commands, ModelsCommand, NewCommand, ToolchainCommand};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init(cli.verbose).context("Failed to initialize logging")?;

    match cli.command {
        Commands::New {
            name,
            schema,
            skip_toolchain,
            strict,
        } => {
            let config = load_config(cli.config.as_deref(), strict)?;
            let cmd = NewCommand::new(name, schema, skip_toolchain)?;
            cmd.execute(config).await?;
        }
        Commands::Models { name, schema } => {
            let config = load_config(cli.config.as_deref(), false)?;
            let cmd = ModelsCommand::new(name, schema)?;
            cmd.execute(config)?;
        }
        Commands::Toolchain { name, strict } => {
            let config = load_config(cli.config.as_deref(), strict)?;
            let cmd = ToolchainCommand::new(name)?;
            cmd.execute(config).await?;
        }
    }

    Ok(())
}
