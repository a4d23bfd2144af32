//! Sequelize model scaffolding
//!
//! Turns a schema of entities and typed fields into Sequelize model modules,
//! and drives the external toolchain that installs and migrates them.
//!
//! # Example
//!
//! ```bash
//! sequelize-scaffold new blog --schema schema.json
//! ```

pub mod field_type;
pub mod generator;
pub mod project;
pub mod schema;
pub mod template;

pub use field_type::{map_field_type, DataType};
pub use generator::{GeneratedFile, ModelGenerator};
pub use project::{validate_project_name, Scaffolder};
pub use schema::{FieldSet, Schema};
pub use template::ModelTemplate;
