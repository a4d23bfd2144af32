//! Integration tests for model generation and project scaffolding

use std::fs;
use std::sync::Arc;

use sequelize_scaffold::prelude::*;
use tempfile::TempDir;

fn scaffolder(temp_dir: &TempDir, config: ScaffoldConfig, logger: &MemoryLogger) -> Scaffolder {
    Scaffolder::new(config, Arc::new(logger.clone())).with_root(temp_dir.path())
}

/// Toolchain settings whose steps succeed without Node.js installed
#[cfg(unix)]
fn noop_toolchain() -> ToolchainSettings {
    ToolchainSettings {
        install_tool: "true".to_string(),
        runner: "true".to_string(),
        ..ToolchainSettings::default()
    }
}

/// One entity produces exactly one file with the mapped field types
#[test]
fn test_user_model_file() {
    let temp_dir = TempDir::new().unwrap();
    let logger = MemoryLogger::new();
    let schema = Schema::from_json_str(r#"{"User": {"name": "string", "age": "int"}}"#).unwrap();

    let written = scaffolder(&temp_dir, ScaffoldConfig::default(), &logger)
        .generate_models("app", &schema)
        .unwrap();

    let models_dir = temp_dir.path().join("app/models");
    assert_eq!(written, vec![models_dir.join("User.js")]);
    assert_eq!(fs::read_dir(&models_dir).unwrap().count(), 1);

    let content = fs::read_to_string(models_dir.join("User.js")).unwrap();
    assert!(content.contains("sequelize.define('User', {"));
    assert!(content.contains("name: { type: DataTypes.STRING }"));
    assert!(content.contains("age: { type: DataTypes.INTEGER }"));
    assert!(content.contains("return User;"));
}

/// An empty schema writes nothing
#[test]
fn test_empty_schema_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let logger = MemoryLogger::new();

    let written = scaffolder(&temp_dir, ScaffoldConfig::default(), &logger)
        .generate_models("app", &Schema::new())
        .unwrap();

    assert!(written.is_empty());
    assert!(!temp_dir.path().join("app").exists());
}

/// Regenerating an entity replaces the previous file
#[test]
fn test_regeneration_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let logger = MemoryLogger::new();
    let scaffolder = scaffolder(&temp_dir, ScaffoldConfig::default(), &logger);

    let first = Schema::new().with_entity("User", [("name", "string"), ("age", "int")]);
    let second = Schema::new().with_entity("User", [("email", "string"), ("active", "boolean")]);

    scaffolder.generate_models("app", &first).unwrap();
    scaffolder.generate_models("app", &second).unwrap();

    let path = temp_dir.path().join("app/models/User.js");
    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("age:"));
    assert!(content.contains("email: { type: DataTypes.STRING }"));
    assert!(content.contains("active: { type: DataTypes.BOOLEAN }"));

    let expected = ModelGenerator::new(temp_dir.path().join("app"), ModelSettings::default())
        .unwrap()
        .generate(&second)
        .unwrap()
        .remove(0)
        .content;
    assert_eq!(content, expected);
}

/// Model directory and extension follow configuration
#[test]
fn test_custom_model_settings() {
    let temp_dir = TempDir::new().unwrap();
    let logger = MemoryLogger::new();
    let config = ScaffoldConfig {
        models: ModelSettings {
            dir: "db/models".into(),
            extension: "cjs".to_string(),
        },
        ..ScaffoldConfig::default()
    };

    let schema = Schema::from_toml_str("[Post]\ntitle = \"string\"\n").unwrap();
    scaffolder(&temp_dir, config, &logger)
        .generate_models("app", &schema)
        .unwrap();

    assert!(temp_dir.path().join("app/db/models/Post.cjs").is_file());
}

/// Schema files are read by extension
#[test]
fn test_load_schema_files() {
    let temp_dir = TempDir::new().unwrap();

    let json_path = temp_dir.path().join("schema.json");
    fs::write(&json_path, r#"{"User": {"name": "string"}, "Post": {"title": "string"}}"#).unwrap();
    let schema = Schema::load(&json_path).unwrap();
    assert_eq!(schema.len(), 2);

    let toml_path = temp_dir.path().join("schema.toml");
    fs::write(&toml_path, "[User]\nname = \"string\"\n").unwrap();
    let schema = Schema::load(&toml_path).unwrap();
    assert_eq!(schema.len(), 1);

    let missing = Schema::load(temp_dir.path().join("missing.json"));
    assert!(matches!(missing, Err(ScaffoldError::Io { .. })));
}

/// Full flow: models first, then the toolchain in the project directory
#[cfg(unix)]
#[tokio::test]
async fn test_create_generates_then_runs_toolchain() {
    let temp_dir = TempDir::new().unwrap();
    let logger = MemoryLogger::new();
    let config = ScaffoldConfig {
        toolchain: noop_toolchain(),
        ..ScaffoldConfig::default()
    };
    let schema = Schema::new()
        .with_entity("User", [("name", "string")])
        .with_entity("Post", [("title", "string"), ("published", "boolean")]);

    scaffolder(&temp_dir, config, &logger)
        .create("blog", &schema)
        .await
        .unwrap();

    assert!(temp_dir.path().join("blog/models/User.js").is_file());
    assert!(temp_dir.path().join("blog/models/Post.js").is_file());
    assert!(logger.contains("generated 2 model file(s) for blog"));
    assert!(logger.contains("running `true sequelize db:migrate`"));
}

/// Files stay on disk when the toolchain cannot start
#[tokio::test]
async fn test_create_keeps_models_when_toolchain_fails_to_spawn() {
    let temp_dir = TempDir::new().unwrap();
    let logger = MemoryLogger::new();
    let config = ScaffoldConfig {
        toolchain: ToolchainSettings {
            install_tool: "sequelize-scaffold-no-such-program".to_string(),
            ..ToolchainSettings::default()
        },
        ..ScaffoldConfig::default()
    };
    let schema = Schema::new().with_entity("User", [("name", "string")]);

    let result = scaffolder(&temp_dir, config, &logger)
        .create("blog", &schema)
        .await;

    assert!(matches!(result, Err(ScaffoldError::Spawn { .. })));
    assert!(temp_dir.path().join("blog/models/User.js").is_file());
}
