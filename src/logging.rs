//! Logging initialization for embedding applications.

use crate::error::{Result, SocialError};
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber with the given filter directive.
pub fn init_logging(level: &str) -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_new(level)
                .map_err(|e| SocialError::InvalidArgument(format!("Invalid log level: {e}")))?,
        )
        .with_target(true)
        .with_thread_ids(true)
        .try_init()
        .map_err(|_| SocialError::InvalidArgument("Logging already initialized".into()))
}
