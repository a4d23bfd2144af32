//! Model file generator
//!
//! Renders one Sequelize model module per schema entity and writes it to
//! `<project>/<models dir>/<Entity>.<ext>`. Rendering ([`ModelGenerator::generate`])
//! never touches the filesystem; [`ModelGenerator::write`] applies the result.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::schema::{FieldSet, Schema};
use super::template::ModelTemplate;
use crate::config::ModelSettings;
use crate::error::{Result, ScaffoldError};
use crate::logging::ScaffoldLogger;

/// Sequelize model generator for one project directory
pub struct ModelGenerator {
    /// Project root directory
    project_dir: PathBuf,
    /// Model directory and extension
    settings: ModelSettings,
    /// Template renderer
    template: ModelTemplate,
}

impl ModelGenerator {
    /// Create a new generator
    ///
    /// # Arguments
    ///
    /// * `project_dir` - Project root; created on first write if missing
    /// * `settings` - Model directory and file extension
    ///
    /// # Errors
    ///
    /// Returns an error if the model template fails to compile.
    pub fn new(project_dir: impl Into<PathBuf>, settings: ModelSettings) -> Result<Self> {
        Ok(Self {
            project_dir: project_dir.into(),
            settings,
            template: ModelTemplate::new()?,
        })
    }

    /// Project root this generator writes into
    #[must_use]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Path of an entity's model file, relative to the project root
    #[must_use]
    pub fn model_path(&self, model_name: &str) -> PathBuf {
        self.settings
            .dir
            .join(format!("{model_name}.{}", self.settings.extension))
    }

    /// Render the model file for a single entity
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn generate_model(&self, model_name: &str, fields: &FieldSet) -> Result<GeneratedFile> {
        let content = self.template.render(model_name, fields)?;

        Ok(GeneratedFile {
            model_name: model_name.to_string(),
            path: self.model_path(model_name),
            content,
        })
    }

    /// Render model files for every entity, in schema order
    ///
    /// # Errors
    ///
    /// Returns an error if an entity or field name is not a JavaScript
    /// identifier, or if rendering fails.
    pub fn generate(&self, schema: &Schema) -> Result<Vec<GeneratedFile>> {
        schema.validate()?;

        schema
            .entities()
            .map(|(model_name, fields)| self.generate_model(model_name, fields))
            .collect()
    }

    /// Render and write model files for every entity
    ///
    /// Files are written one entity at a time. A failure aborts the remaining
    /// entities and leaves already written files in place. Existing files are
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, rendering or any filesystem operation
    /// fails.
    pub fn write(&self, schema: &Schema, logger: &dyn ScaffoldLogger) -> Result<Vec<PathBuf>> {
        schema.validate()?;

        let mut written = Vec::with_capacity(schema.len());
        for (model_name, fields) in schema.entities() {
            let file = self.generate_model(model_name, fields)?;
            let full_path = self.project_dir.join(&file.path);

            write_file_atomic(&full_path, &file.content)?;
            logger.info(&format!("created {}", full_path.display()));

            written.push(full_path);
        }

        Ok(written)
    }
}

/// Represents a generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Entity the file defines
    pub model_name: String,
    /// Relative path from project root
    pub path: PathBuf,
    /// File content
    pub content: String,
}

/// Write `content` to `path` whole or not at all, creating parent directories
///
/// Content goes to a temporary file next to the destination which then
/// replaces it.
fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| ScaffoldError::io(parent, e))?;
    let temp_path = temp.path().to_path_buf();
    temp.write_all(content.as_bytes()).map_err(|e| ScaffoldError::io(&temp_path, e))?;
    temp.flush().map_err(|e| ScaffoldError::io(&temp_path, e))?;

    temp.persist(path).map_err(|e| ScaffoldError::io(path, e.error))?;

    Ok(())
}
