//! Toolchain bootstrap command

use std::sync::Arc;

use anyhow::{Context, Result};
use console::style;
use sequelize_scaffold::config::ScaffoldConfig;
use sequelize_scaffold::logging::TracingLogger;
use sequelize_scaffold::scaffold::{validate_project_name, Scaffolder};

/// Run install, init and migrate inside an existing project
pub struct ToolchainCommand {
    name: String,
}

impl ToolchainCommand {
    /// Create a new command instance
    ///
    /// # Errors
    ///
    /// Returns an error if the project name is not a single directory name.
    pub fn new(name: String) -> Result<Self> {
        validate_project_name(&name)?;
        Ok(Self { name })
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if a step can't be spawned, or fails under `--strict`.
    pub async fn execute(&self, config: ScaffoldConfig) -> Result<()> {
        println!(
            "{} {} {}",
            style("Bootstrapping").green().bold(),
            style("toolchain in").bold(),
            style(&self.name).cyan().bold()
        );
        println!();

        let scaffolder = Scaffolder::new(config, Arc::new(TracingLogger));
        scaffolder
            .run_toolchain(&self.name)
            .await
            .context("Toolchain bootstrap failed")?;

        println!();
        println!("{}", style("✓ Toolchain finished").green().bold());
        Ok(())
    }
}
