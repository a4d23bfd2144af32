//! Project scaffolding orchestrator
//!
//! Writes every model file for a schema, then runs the external toolchain in
//! the project directory. The two steps run strictly in sequence; nothing is
//! rolled back if the toolchain fails.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::generator::ModelGenerator;
use super::schema::Schema;
use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::logging::ScaffoldLogger;
use crate::runner::ToolchainRunner;

/// Generates models and bootstraps the toolchain for a named project
pub struct Scaffolder {
    config: ScaffoldConfig,
    logger: Arc<dyn ScaffoldLogger>,
    /// Base directory projects are resolved against (current dir when unset)
    root: Option<PathBuf>,
}

impl Scaffolder {
    /// Create a scaffolder
    pub fn new(config: ScaffoldConfig, logger: Arc<dyn ScaffoldLogger>) -> Self {
        Self {
            config,
            logger,
            root: None,
        }
    }

    /// Resolve project names against `root` instead of the current directory
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Directory a project name resolves to
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a single directory name or the
    /// current directory can't be determined.
    pub fn project_dir(&self, project_name: &str) -> Result<PathBuf> {
        validate_project_name(project_name)?;

        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().map_err(|e| ScaffoldError::io(".", e))?,
        };

        Ok(root.join(project_name))
    }

    /// Write model files for every schema entity
    ///
    /// # Errors
    ///
    /// Returns an error if validation or any write fails; files written before
    /// the failure stay on disk.
    pub fn generate_models(&self, project_name: &str, schema: &Schema) -> Result<Vec<PathBuf>> {
        let project_dir = self.project_dir(project_name)?;
        self.write_models(&project_dir, schema)
    }

    /// Run the install, init and migrate steps in the project directory
    ///
    /// # Errors
    ///
    /// Returns an error if a step can't be spawned, or if a step fails under
    /// the `fail` exit-code policy.
    pub async fn run_toolchain(&self, project_name: &str) -> Result<()> {
        let project_dir = self.project_dir(project_name)?;
        self.toolchain().run(&project_dir).await
    }

    /// Write model files, then run the toolchain
    ///
    /// # Errors
    ///
    /// Filesystem errors abort before the toolchain starts; toolchain errors
    /// are reported as by [`Scaffolder::run_toolchain`].
    pub async fn create(&self, project_name: &str, schema: &Schema) -> Result<()> {
        let project_dir = self.project_dir(project_name)?;

        let written = self.write_models(&project_dir, schema)?;
        self.logger.info(&format!(
            "generated {} model file(s) for {project_name}",
            written.len()
        ));

        self.toolchain().run(&project_dir).await
    }

    /// Toolchain runner configured from settings
    #[must_use]
    pub fn toolchain(&self) -> ToolchainRunner {
        ToolchainRunner::from_settings(&self.config.toolchain, Arc::clone(&self.logger))
    }

    fn write_models(&self, project_dir: &Path, schema: &Schema) -> Result<Vec<PathBuf>> {
        let generator = ModelGenerator::new(project_dir, self.config.models.clone())?;
        generator.write(schema, self.logger.as_ref())
    }
}

/// Validate that a project name is one relative directory name
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidProjectName`] for empty names, `.`/`..`,
/// and names containing path separators or NUL.
pub fn validate_project_name(name: &str) -> Result<()> {
    let invalid = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);

    if invalid {
        return Err(ScaffoldError::InvalidProjectName(name.to_string()));
    }

    Ok(())
}
