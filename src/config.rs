/*!
Configuration loaded from a YAML file (`config.yaml` in the working directory by default).
*/

/// Configuration options.
mod config {
    use std::fmt::{Display, Formatter, Result as FormatResult};
    use std::fs::File;
    use std::io::Error as IOError;
    use std::path::{Path, PathBuf};

    use serde::Deserialize;
    use serde_yaml::Error as YamlParseError;

    /// Configuration options.
    #[derive(Deserialize, Debug, Default, Clone, Eq, PartialEq)]
    pub struct Config {
        /// The directory to sweep.
        ///
        /// No default is substituted: when the key is missing this is an empty path.
        #[serde(default)]
        downloads_dir: PathBuf,
    }

    impl Config {
        /// The path of the configuration file, relative to the working directory, used when no
        /// other path is given.
        pub const DEFAULT_PATH: &'static str = "config.yaml";

        /// Return the `Config` loaded from the file at `path`.
        ///
        /// Keys other than `downloads_dir` are ignored.
        pub fn load(path: &Path) -> ConfigLoadResult {
            let file: File = match File::open(path) {
                Ok(file) => file,
                Err(error) => {
                    return Err(ConfigLoadError::ReadError {
                        path: path.to_path_buf(),
                        error,
                    });
                }
            };

            match serde_yaml::from_reader(file) {
                Ok(config) => Ok(config),
                Err(error) => Err(ConfigLoadError::ParseError {
                    path: path.to_path_buf(),
                    error,
                }),
            }
        }

        /// Return the directory to sweep.
        pub fn downloads_dir(&self) -> &Path {
            &self.downloads_dir
        }
    }

    /// The result of trying to load the configuration file.
    type ConfigLoadResult = Result<Config, ConfigLoadError>;

    /// An error loading the configuration file.
    #[derive(Debug)]
    #[allow(clippy::enum_variant_names)]
    pub enum ConfigLoadError {
        /// The configuration file could not be read (including when it does not exist).
        ReadError {
            /// The path of the configuration file.
            path: PathBuf,
            /// The IO error encountered while reading.
            error: IOError,
        },
        /// The configuration file is not well-formed.
        ParseError {
            /// The path of the configuration file.
            path: PathBuf,
            /// The YAML error.
            error: YamlParseError,
        },
    }

    impl Display for ConfigLoadError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
            match self {
                Self::ReadError { path, error } => {
                    write!(
                        f,
                        "Failed to load configuration: failed to read config file \"{}\": {}",
                        path.display(),
                        error
                    )
                }
                Self::ParseError { path, error } => {
                    write!(
                        f,
                        "Failed to load configuration: failed to parse config file \"{}\": {}",
                        path.display(),
                        error
                    )
                }
            }
        }
    }

    impl std::error::Error for ConfigLoadError {}
}
pub use config::{Config, ConfigLoadError};
