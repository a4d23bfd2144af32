//! CLI command implementations

pub mod models;
pub mod new;
pub mod toolchain;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use sequelize_scaffold::config::{ExitCodePolicy, ScaffoldConfig};

pub use models::ModelsCommand;
pub use new::NewCommand;
pub use toolchain::ToolchainCommand;

/// Load configuration, forcing the `fail` exit-code policy when `strict` is set
///
/// # Errors
///
/// Returns an error if the config file is missing or invalid.
pub fn load_config(path: Option<&Path>, strict: bool) -> Result<ScaffoldConfig> {
    let config = match path {
        Some(path) => ScaffoldConfig::load_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => ScaffoldConfig::load().context("Failed to load configuration")?,
    };

    Ok(if strict {
        config.with_exit_code_policy(ExitCodePolicy::Fail)
    } else {
        config
    })
}

/// Print one line per written model file, relative to the current directory when possible
fn print_written(files: &[PathBuf]) {
    let cwd = std::env::current_dir().ok();

    println!(
        "\n{} {} model file(s):",
        style("Generated").green().bold(),
        files.len()
    );

    for file in files {
        let shown = cwd
            .as_deref()
            .and_then(|cwd| file.strip_prefix(cwd).ok())
            .unwrap_or(file);
        println!("  {} {}", style("✓").green(), style(shown.display()).dim());
    }
}
