//! Logging and diagnostics for the railfence library.
//!
//! The library itself only talks to the `log` facade. Binaries call
//! [`init_logging`] once to install an `env_logger` backend; `log_metric!` is
//! for key/value diagnostics and compiles out of release builds.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::RailFenceError;

/// Logs a structured key-value metric line at debug level, only in debug builds.
///
/// # Example
/// ```
/// use railfence::log_metric;
/// let rails = 3;
/// log_metric!("event" = "encrypt", "rails" = &rails);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            $crate::log::debug!("RAILFENCE_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs the global logger. `RUST_LOG` overrides `level` when set.
///
/// Only the first call has any effect; later calls return `Ok(())`.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), RailFenceError> {
    // Open the file up front so a bad path is reported instead of swallowed.
    let target = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(level);
        builder.parse_default_env();

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = target {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}
