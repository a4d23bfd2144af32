//! Error types and error handling

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Scaffolding error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Filesystem error while creating directories or writing model files
    #[error("Filesystem error at {}: {source}", .path.display())]
    Io {
        /// Path being written or created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An external program could not be started at all
    #[error("Failed to spawn `{program}`: {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying launch error
        #[source]
        source: io::Error,
    },

    /// A toolchain step exited unsuccessfully (only under the `fail` exit-code policy)
    #[error("Toolchain step `{step}` failed with {}", describe_code(.code.as_ref().copied()))]
    StepFailed {
        /// Label of the failing step
        step: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
    },

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Template registration error
    #[error("Template registration error: {0}")]
    TemplateRegistration(#[from] Box<handlebars::TemplateError>),

    /// Schema document could not be parsed
    #[error("Schema parse error: {0}")]
    SchemaParse(String),

    /// Entity or field name is not usable as a JavaScript identifier
    #[error("Invalid {kind} name: '{name}'. Must be a non-reserved JavaScript identifier")]
    InvalidIdentifier {
        /// What was being validated ("entity" or "field")
        kind: &'static str,
        /// The offending name
        name: String,
    },

    /// Project name is not a single relative directory name
    #[error("Invalid project name: '{0}'. Must be a single directory name")]
    InvalidProjectName(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Global tracing subscriber could not be installed
    #[error("Logging setup error: {0}")]
    Observability(#[from] tracing_subscriber::util::TryInitError),
}

impl ScaffoldError {
    /// Wrap an I/O error together with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<figment::Error> for ScaffoldError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<handlebars::TemplateError> for ScaffoldError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::TemplateRegistration(Box::new(err))
    }
}

pub(crate) fn describe_code(code: Option<i32>) -> String {
    code.map_or_else(
        || "no exit code (terminated by signal)".to_string(),
        |code| format!("exit code {code}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_failed_message() {
        let err = ScaffoldError::StepFailed {
            step: "migrate".to_string(),
            code: Some(2),
        };
        assert_eq!(err.to_string(), "Toolchain step `migrate` failed with exit code 2");

        let err = ScaffoldError::StepFailed {
            step: "install".to_string(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_io_keeps_path() {
        let err = ScaffoldError::io("/tmp/models/User.js", io::Error::other("disk full"));
        let message = err.to_string();
        assert!(message.contains("/tmp/models/User.js"));
        assert!(message.contains("disk full"));
    }
}
