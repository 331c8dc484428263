use std::path::PathBuf;

use clap::Parser;
#[cfg(feature = "logging")]
use flexi_logger::{LevelFilter as LogLevelFilter, LogSpecification};

use crate::config::Config;

#[derive(Parser, Debug)]
#[clap(name = "sweep", author, version, about)]
pub struct Args {
    /// Configuration file to read the directory to sweep from
    #[clap(short, long = "config", display_order = 0, default_value = Config::DEFAULT_PATH)]
    config_path: PathBuf,

    /// File to write logs to
    #[cfg(feature = "logging")]
    #[clap(long = "log-file", display_order = 1)]
    log_file_path: Option<PathBuf>,

    /// Log level
    #[cfg(feature = "logging")]
    #[clap(display_order = 2, long = "log-level", id = "LOG_LEVEL", default_value_t = LogLevelFilter::Info)]
    log_level_filter: LogLevelFilter,
}

impl Args {
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    #[cfg(feature = "logging")]
    pub fn log_file_path(&self) -> &Option<PathBuf> {
        &self.log_file_path
    }

    #[cfg(feature = "logging")]
    pub fn log_specification(&self) -> LogSpecification {
        let mut log_specification_builder = LogSpecification::builder();
        log_specification_builder.default(self.log_level_filter);
        log_specification_builder.finalize()
    }
}
