//! Model generation command

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use console::style;
use sequelize_scaffold::config::ScaffoldConfig;
use sequelize_scaffold::logging::TracingLogger;
use sequelize_scaffold::scaffold::{validate_project_name, Scaffolder, Schema};

/// Write model files for a schema without touching the toolchain
pub struct ModelsCommand {
    name: String,
    schema_path: PathBuf,
}

impl ModelsCommand {
    /// Create a new command instance
    ///
    /// # Errors
    ///
    /// Returns an error if the project name is not a single directory name.
    pub fn new(name: String, schema_path: PathBuf) -> Result<Self> {
        validate_project_name(&name)?;
        Ok(Self { name, schema_path })
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the schema can't be loaded or a file can't be written.
    pub fn execute(&self, config: ScaffoldConfig) -> Result<()> {
        println!(
            "{} {} {}",
            style("Generating").green().bold(),
            style("models for").bold(),
            style(&self.name).cyan().bold()
        );

        let schema = Schema::load(&self.schema_path)
            .with_context(|| format!("Failed to load schema: {}", self.schema_path.display()))?;

        let scaffolder = Scaffolder::new(config, Arc::new(TracingLogger));
        let written = scaffolder
            .generate_models(&self.name, &schema)
            .context("Failed to generate model files")?;

        super::print_written(&written);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_command_validates_name() {
        assert!(ModelsCommand::new("../app".to_string(), PathBuf::from("schema.json")).is_err());
        assert!(ModelsCommand::new("app".to_string(), PathBuf::from("schema.json")).is_ok());
    }
}
