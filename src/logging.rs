/*!
Logging for debug purposes.
*/
use std::fmt::{Display, Error as FormatError, Formatter};
use std::io::{Error as IOError, Write};
use std::path::PathBuf;

use flexi_logger::{
    DeferredNow, FileSpec, FlexiLoggerError, LogSpecification, Logger, LoggerHandle, Record,
};

/// Configure logging to the file at `path`.
pub fn configure_logging(
    path: PathBuf,
    log_specification: LogSpecification,
) -> ConfigureLoggingResult {
    let file_spec: FileSpec = match FileSpec::try_from(&path) {
        Ok(file_spec) => file_spec,
        Err(error) => {
            return Err(ConfigureLoggingError::BadPath { path, error });
        }
    };

    let logger = Logger::with(log_specification)
        .format(log_format)
        .log_to_file(file_spec);

    match logger.start() {
        Ok(logger_handle) => Ok(logger_handle),
        Err(error) => Err(ConfigureLoggingError::StartError { path, error }),
    }
}

/// Format log records.
fn log_format(writer: &mut dyn Write, now: &mut DeferredNow, record: &Record) -> Result<(), IOError> {
    write!(
        writer,
        "{} {} [{}] {}",
        now.now().format("%d-%m-%Y %H:%M.%S"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        &record.args()
    )
}

pub type ConfigureLoggingResult = Result<LoggerHandle, ConfigureLoggingError>;

/// An error configuring logging.
#[derive(Debug)]
pub enum ConfigureLoggingError {
    /// The log file path cannot be used.
    BadPath {
        path: PathBuf,
        error: FlexiLoggerError,
    },
    /// The logger could not be started.
    StartError {
        path: PathBuf,
        error: FlexiLoggerError,
    },
}

impl Display for ConfigureLoggingError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FormatError> {
        match self {
            Self::BadPath { path, error } => {
                write!(
                    formatter,
                    "Failed to use \"{}\" as the log file: {}",
                    path.display(),
                    error
                )
            }
            Self::StartError { path, error } => {
                write!(
                    formatter,
                    "Failed to start logging to \"{}\": {}",
                    path.display(),
                    error
                )
            }
        }
    }
}
