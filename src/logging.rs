use tracing_subscriber::EnvFilter;

use crate::error::{EngineError, Result};

/// Install a `tracing` formatter writing to stderr.
///
/// `filter` takes `RUST_LOG`-style directives; when absent, `RUST_LOG` is
/// read, falling back to `warn`. Returns `Ok(false)` when a global
/// subscriber was already installed (by an earlier call or by the host).
pub fn init_logging(filter: Option<&str>) -> Result<bool> {
    let filter = match filter {
        Some(directives) => {
            EnvFilter::try_new(directives).map_err(|e| EngineError::Logging(e.to_string()))?
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    Ok(installed)
}
