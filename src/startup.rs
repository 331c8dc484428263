/*!
Everything that happens before the terminal is taken over.
*/
use crate::config::{Config, ConfigLoadError};
use crate::scan::{scan, Scan, ScanError};

use std::fmt::{Display, Error as FmtError, Formatter};
use std::path::{Path, PathBuf};

/// What was found before the terminal is taken over.
#[derive(Debug)]
pub struct Startup {
    /// Lines to print before going any further.
    messages: Vec<String>,
    outcome: Outcome,
}

impl Startup {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_outcome(self) -> Outcome {
        self.outcome
    }
}

/// Whether there is anything to sweep.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Step through these files.
    Sweep { files: Vec<PathBuf> },
    /// The directory has no files, so the interactive mode is never entered.
    NothingToSweep,
}

/// Load the configuration file at `config_path` and list the files of its directory.
pub fn start(config_path: &Path) -> StartupResult {
    let config: Config = Config::load(config_path).map_err(StartupError::Config)?;
    let scan: Scan = scan(config.downloads_dir()).map_err(StartupError::Scan)?;

    let mut messages: Vec<String> = scan
        .skipped()
        .iter()
        .map(|error| format!("Failed to access path: {}", error))
        .collect();

    let files: Vec<PathBuf> = scan.into_files();
    let outcome = if files.is_empty() {
        messages.push(String::from("No files found in the directory."));
        Outcome::NothingToSweep
    } else {
        Outcome::Sweep { files }
    };

    Ok(Startup { messages, outcome })
}

pub type StartupResult = Result<Startup, StartupError>;

/// An error that stops the program before the terminal is taken over.
#[derive(Debug)]
pub enum StartupError {
    Config(ConfigLoadError),
    Scan(ScanError),
}

impl Display for StartupError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Self::Config(error) => write!(formatter, "{}", error),
            Self::Scan(error) => write!(formatter, "{}", error),
        }
    }
}

impl std::error::Error for StartupError {}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    /// Write a configuration file pointing at `downloads_dir` and return its path.
    fn write_config(dir: &TempDir, downloads_dir: &Path) -> PathBuf {
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            format!("downloads_dir: \"{}\"\n", downloads_dir.display()),
        )
        .unwrap();
        path
    }

    #[test]
    fn test_start_with_an_empty_directory_has_nothing_to_sweep() {
        let dir = TempDir::new().unwrap();
        let downloads = dir.path().join("downloads");
        fs::create_dir(&downloads).unwrap();
        let config_path = write_config(&dir, &downloads);

        let startup = start(&config_path).unwrap();

        assert_eq!(
            startup.messages(),
            &[String::from("No files found in the directory.")]
        );
        assert_eq!(startup.into_outcome(), Outcome::NothingToSweep);
    }

    #[test]
    fn test_start_with_files_sweeps_them_in_order() {
        let dir = TempDir::new().unwrap();
        let downloads = dir.path().join("downloads");
        fs::create_dir_all(downloads.join("nested")).unwrap();
        let first = downloads.join("a.txt");
        let second = downloads.join("nested/b.txt");
        fs::write(&first, "a").unwrap();
        fs::write(&second, "b").unwrap();
        let config_path = write_config(&dir, &downloads);

        let startup = start(&config_path).unwrap();

        assert!(startup.messages().is_empty());
        assert_eq!(
            startup.into_outcome(),
            Outcome::Sweep {
                files: vec![first, second]
            }
        );
    }

    #[test]
    fn test_start_without_a_config_file_fails() {
        let dir = TempDir::new().unwrap();

        let result = start(&dir.path().join("config.yaml"));

        assert!(matches!(
            result,
            Err(StartupError::Config(ConfigLoadError::ReadError { .. }))
        ));
    }

    #[test]
    fn test_start_with_a_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, &dir.path().join("missing"));

        let result = start(&config_path);

        match result {
            Err(error @ StartupError::Scan(ScanError::RootInaccessible { .. })) => {
                assert!(error.to_string().ends_with("because it does not exist."));
            }
            other => panic!("Expected the scan to fail, got {:?}.", other),
        }
    }
}
