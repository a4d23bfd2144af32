//! # sequelize-scaffold
//!
//! Generate Sequelize model modules from a schema and bootstrap the Node.js
//! toolchain around them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use sequelize_scaffold::prelude::*;
//!
//! # async fn example() -> sequelize_scaffold::Result<()> {
//! let schema = Schema::from_json_str(r#"{"User": {"name": "string", "age": "int"}}"#)?;
//!
//! let scaffolder = Scaffolder::new(ScaffoldConfig::load()?, Arc::new(TracingLogger));
//! scaffolder.create("my-app", &schema).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`scaffold`]: field-type mapping, schemas, model rendering and writing
//! - [`runner`]: external toolchain steps (install, init, migrate)
//! - [`config`]: layered configuration (defaults, TOML file, environment)
//! - [`logging`]: logger collaborator injected into generator and runner
//! - [`observability`]: `tracing` subscriber setup

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod logging;
pub mod observability;
pub mod runner;
pub mod scaffold;

pub use error::{Result, ScaffoldError};

/// Prelude module for convenient imports
///
/// ```rust
/// use sequelize_scaffold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ExitCodePolicy, ModelSettings, ScaffoldConfig, ToolchainSettings};
    pub use crate::error::{Result, ScaffoldError};
    pub use crate::logging::{LogLevel, LogRecord, MemoryLogger, ScaffoldLogger, TracingLogger};
    pub use crate::runner::{CommandStep, RunReport, StepState, ToolchainPlan, ToolchainRunner};
    pub use crate::scaffold::{
        map_field_type, DataType, FieldSet, GeneratedFile, ModelGenerator, ModelTemplate,
        Scaffolder, Schema,
    };
}
