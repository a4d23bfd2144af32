//! Project scaffolding command

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use sequelize_scaffold::config::ScaffoldConfig;
use sequelize_scaffold::logging::TracingLogger;
use sequelize_scaffold::scaffold::{validate_project_name, Scaffolder, Schema};

/// Generate models for a project, then bootstrap its toolchain
pub struct NewCommand {
    name: String,
    schema_path: PathBuf,
    skip_toolchain: bool,
}

impl NewCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `name` - Project directory name, relative to the current directory
    /// * `schema_path` - JSON or TOML schema file
    /// * `skip_toolchain` - Stop after writing model files
    ///
    /// # Errors
    ///
    /// Returns an error if the project name is not a single directory name.
    pub fn new(name: String, schema_path: PathBuf, skip_toolchain: bool) -> Result<Self> {
        validate_project_name(&name)?;

        Ok(Self {
            name,
            schema_path,
            skip_toolchain,
        })
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the schema can't be loaded, a model file can't be
    /// written, or the toolchain can't be started.
    pub async fn execute(&self, config: ScaffoldConfig) -> Result<()> {
        println!(
            "{} {} {}",
            style("Scaffolding").green().bold(),
            style("Sequelize project:").bold(),
            style(&self.name).cyan().bold()
        );

        let schema = Schema::load(&self.schema_path)
            .with_context(|| format!("Failed to load schema: {}", self.schema_path.display()))?;

        let scaffolder = Scaffolder::new(config, Arc::new(TracingLogger));

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message(format!("Writing {} model file(s)...", schema.len()));

        let written = scaffolder.generate_models(&self.name, &schema);
        spinner.finish_and_clear();
        let written = written.context("Failed to generate model files")?;

        super::print_written(&written);

        if self.skip_toolchain {
            self.print_next_steps();
            return Ok(());
        }

        // Child output goes straight to the terminal, so no spinner here
        println!(
            "\n{} {}\n",
            style("Running").green().bold(),
            style("install, init and migrate...").bold()
        );
        scaffolder
            .run_toolchain(&self.name)
            .await
            .context("Toolchain bootstrap failed")?;

        println!();
        println!("{}", style("✓ Project scaffolded!").green().bold());
        Ok(())
    }

    /// Print what to run when the toolchain was skipped
    fn print_next_steps(&self) {
        println!();
        println!("{}", style("Next steps:").bold());
        println!("  {} Bootstrap the toolchain:", style("1.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style(format!("sequelize-scaffold toolchain {}", self.name)).cyan()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_command_validates_name() {
        let result = NewCommand::new("a/b".to_string(), PathBuf::from("schema.json"), false);
        assert!(result.is_err());

        let result = NewCommand::new("blog".to_string(), PathBuf::from("schema.json"), false);
        assert!(result.is_ok());
    }
}
