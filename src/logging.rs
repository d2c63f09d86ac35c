use anyhow::Result;
use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

use std::path::Path;

/// Sends log output to files in `directory` so it never lands on top of the
/// board. `RUST_LOG` takes precedence over `level`.
///
/// The returned handle must be kept alive for as long as logging is needed.
pub fn setup_logging(level: &str, directory: &Path) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_file(FileSpec::default().directory(directory))
        .format(opt_format)
        .rotate(
            Criterion::Size(10 * 1024 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()?;
    Ok(handle)
}
