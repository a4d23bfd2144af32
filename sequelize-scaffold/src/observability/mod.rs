//! Logging setup
//!
//! Installs a `tracing` subscriber: pretty output in debug builds, JSON in
//! release builds, filtered by `RUST_LOG` when set and by the requested
//! verbosity otherwise.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::Result;

/// Default filter directive for a verbosity level (`-v` count)
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,sequelize_scaffold=info",
        1 => "info,sequelize_scaffold=debug",
        _ => "debug,sequelize_scaffold=trace",
    }
}

/// Initialize the global subscriber
///
/// # Example
///
/// ```rust,no_run
/// use sequelize_scaffold::observability;
///
/// # fn main() -> sequelize_scaffold::Result<()> {
/// observability::init(0)?;
/// tracing::info!("Scaffolder started");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: u8) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    #[cfg(debug_assertions)]
    {
        // Pretty formatting for development
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()?;
    }

    #[cfg(not(debug_assertions))]
    {
        // JSON formatting for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}
