//! Configuration management for sequelize-scaffold
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `SEQUELIZE_SCAFFOLD_` prefix,
//!    `__` separates sections, e.g. `SEQUELIZE_SCAFFOLD_TOOLCHAIN__INSTALL_TOOL=pnpm`)
//! 2. An explicit config file, or `./sequelize-scaffold.toml` when present
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! [models]
//! dir = "models"
//! extension = "js"
//!
//! [toolchain]
//! install_tool = "npm"
//! packages = ["sequelize", "sequelize-cli"]
//! runner = "npx"
//! cli_package = "sequelize"
//! exit_code_policy = "tolerate"
//! ```

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Where and how model files are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Directory under the project root that receives model files
    pub dir: PathBuf,

    /// File extension of generated models
    pub extension: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("models"),
            extension: "js".to_string(),
        }
    }
}

/// What to do when a toolchain step exits with a non-zero code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitCodePolicy {
    /// Log the exit code and report success
    #[default]
    Tolerate,
    /// Report the failing step as an error
    Fail,
}

/// External toolchain invocation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainSettings {
    /// Package manager used for `<install_tool> install <packages..>`
    pub install_tool: String,

    /// Packages installed into the project
    pub packages: Vec<String>,

    /// Package runner used for the init and migrate steps
    pub runner: String,

    /// Package whose CLI provides `init` and `db:migrate`
    pub cli_package: String,

    /// Exit-code policy for the toolchain steps
    pub exit_code_policy: ExitCodePolicy,
}

impl Default for ToolchainSettings {
    fn default() -> Self {
        Self {
            install_tool: "npm".to_string(),
            packages: vec!["sequelize".to_string(), "sequelize-cli".to_string()],
            runner: "npx".to_string(),
            cli_package: "sequelize".to_string(),
            exit_code_policy: ExitCodePolicy::Tolerate,
        }
    }
}

/// Complete sequelize-scaffold configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Model file settings
    #[serde(default)]
    pub models: ModelSettings,

    /// Toolchain settings
    #[serde(default)]
    pub toolchain: ToolchainSettings,
}

impl ScaffoldConfig {
    /// Config file picked up from the working directory
    pub const FILE_NAME: &'static str = "sequelize-scaffold.toml";

    /// Prefix for environment overrides
    pub const ENV_PREFIX: &'static str = "SEQUELIZE_SCAFFOLD_";

    /// Build the layered figment without extracting it
    #[must_use]
    pub fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(Self::ENV_PREFIX).split("__"))
    }

    /// Load configuration from `./sequelize-scaffold.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source holds values of the wrong shape.
    pub fn load() -> Result<Self> {
        Ok(Self::figment(Path::new(Self::FILE_NAME)).extract::<Self>()?)
    }

    /// Load configuration from a specific file plus the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or holds invalid values.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ScaffoldError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
            ));
        }

        Ok(Self::figment(path).extract::<Self>()?)
    }

    /// Override the exit-code policy
    #[must_use]
    pub const fn with_exit_code_policy(mut self, policy: ExitCodePolicy) -> Self {
        self.toolchain.exit_code_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = ScaffoldConfig::default();
        assert_eq!(config.models.dir, PathBuf::from("models"));
        assert_eq!(config.models.extension, "js");
        assert_eq!(config.toolchain.install_tool, "npm");
        assert_eq!(config.toolchain.packages, vec!["sequelize", "sequelize-cli"]);
        assert_eq!(config.toolchain.runner, "npx");
        assert_eq!(config.toolchain.cli_package, "sequelize");
        assert_eq!(config.toolchain.exit_code_policy, ExitCodePolicy::Tolerate);
    }

    #[test]
    fn test_load_without_sources_gives_defaults() {
        Jail::expect_with(|_jail| {
            let config = ScaffoldConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config, ScaffoldConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                ScaffoldConfig::FILE_NAME,
                r#"
                [models]
                extension = "cjs"

                [toolchain]
                install_tool = "pnpm"
                exit_code_policy = "fail"
                "#,
            )?;

            let config = ScaffoldConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.models.extension, "cjs");
            assert_eq!(config.models.dir, PathBuf::from("models"));
            assert_eq!(config.toolchain.install_tool, "pnpm");
            assert_eq!(config.toolchain.runner, "npx");
            assert_eq!(config.toolchain.exit_code_policy, ExitCodePolicy::Fail);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[toolchain]\ninstall_tool = \"pnpm\"\n")?;
            jail.set_env("SEQUELIZE_SCAFFOLD_TOOLCHAIN__INSTALL_TOOL", "yarn");
            jail.set_env("SEQUELIZE_SCAFFOLD_MODELS__DIR", "src/models");

            let config = ScaffoldConfig::load_from("custom.toml").map_err(|e| e.to_string())?;
            assert_eq!(config.toolchain.install_tool, "yarn");
            assert_eq!(config.models.dir, PathBuf::from("src/models"));
            Ok(())
        });
    }

    #[test]
    fn test_load_from_missing_file() {
        Jail::expect_with(|_jail| {
            let result = ScaffoldConfig::load_from("nope.toml");
            assert!(matches!(result, Err(ScaffoldError::Io { .. })));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_policy_is_config_error() {
        Jail::expect_with(|jail| {
            jail.set_env("SEQUELIZE_SCAFFOLD_TOOLCHAIN__EXIT_CODE_POLICY", "sometimes");
            let result = ScaffoldConfig::load();
            assert!(matches!(result, Err(ScaffoldError::Config(_))));
            Ok(())
        });
    }
}
