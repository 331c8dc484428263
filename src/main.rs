/*!
Step through every file under a directory and delete the ones you do not want.
*/
#![allow(clippy::module_inception)]
#![allow(clippy::single_match)]
#![allow(clippy::new_without_default)]

mod app;
mod args;
mod color;
mod component;
mod components;
mod config;
#[cfg(feature = "logging")]
mod logging;
mod rendering;
mod scan;
mod startup;
mod stateful;
mod system_effect;

use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use crossterm::terminal;
#[cfg(feature = "logging")]
use flexi_logger::LoggerHandle;

use crate::app::App;
use crate::args::Args;
use crate::component::Component;
use crate::components::{Sweeper, SweeperProps};
#[cfg(feature = "logging")]
use crate::logging::{configure_logging, ConfigureLoggingResult};
use crate::rendering::Size;
use crate::startup::{start, Outcome, Startup};

fn main() {
    let args: Args = Args::parse();

    #[cfg(feature = "logging")]
    let _logger_handle: LoggerHandle;
    #[cfg(feature = "logging")]
    if let Some(log_file_path) = args.log_file_path() {
        let configure_logging_result: ConfigureLoggingResult =
            configure_logging(log_file_path.to_path_buf(), args.log_specification());
        _logger_handle = match configure_logging_result {
            Ok(_logger_handle) => _logger_handle,
            Err(error) => {
                println!("{}", error);
                exit(1);
            }
        }
    }

    let startup: Startup = match start(args.config_path()) {
        Ok(startup) => startup,
        Err(error) => {
            #[cfg(feature = "logging")]
            log::error!("{}", error);
            println!("{}", error);
            exit(1);
        }
    };
    for message in startup.messages() {
        println!("{}", message);
    }

    let files: Vec<PathBuf> = match startup.into_outcome() {
        Outcome::Sweep { files } => files,
        Outcome::NothingToSweep => return,
    };

    let size: Size = match terminal::size() {
        Ok(size) => Size::from(size),
        Err(error) => {
            println!("Failed to determine the terminal size: {}", error);
            exit(1);
        }
    };

    let mut root = Sweeper::new(SweeperProps::builder().files(files).size(size).build());

    let mut app = App::new();
    if let Err(error) = app.run(&mut root) {
        #[cfg(feature = "logging")]
        log::error!("Terminal error: {}", error);
        println!("Terminal error: {}", error);
        exit(1);
    }

    #[cfg(feature = "logging")]
    log::info!("Left in mode {:?}.", root.mode());

    for failure in root.deletion_failures() {
        println!("{}", failure);
    }
}
