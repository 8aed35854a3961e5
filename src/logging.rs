use flexi_logger::{opt_format, Logger};

use crate::{Result, RouteGameError};

/// Starts the logger for binaries: level from `RUST_LOG` with an "info"
/// fallback, writing to stderr. Library code only ever uses the `log`
/// facade and never initializes anything.
pub fn setup_logging() -> Result<()> {
    Logger::try_with_env_or_str("info")
        .map_err(|e| RouteGameError::Logging(e.to_string()))?
        .format(opt_format)
        .start()
        .map_err(|e| RouteGameError::Logging(e.to_string()))?;
    Ok(())
}
