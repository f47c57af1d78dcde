// src/logging.rs

use crate::errors::ObrolanResult;
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Starts the file logger. The returned handle must stay alive for the
/// lifetime of the program or logging stops.
pub fn init_logging(level: &str) -> ObrolanResult<LoggerHandle> {
    let handle = Logger::try_with_str(level)?
        .log_to_file(FileSpec::default().basename("obrolan").suppress_timestamp())
        .append()
        .start()?;
    Ok(handle)
}
