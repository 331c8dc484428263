/*!
This module contains the [`scan`] function for listing every file under a directory.
*/
use std::fmt::{Display, Error as FmtError, Formatter};
use std::io::{Error as IOError, ErrorKind as IOErrorKind};
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, Error as WalkError, WalkDir};

/// The files found under a directory, and the entries that could not be read.
#[derive(Debug, Default)]
pub struct Scan {
    files: Vec<PathBuf>,
    skipped: Vec<WalkError>,
}

impl Scan {
    /// Return the paths of the files in the order they were found.
    #[cfg(test)]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Return the errors for the entries that were skipped.
    pub fn skipped(&self) -> &[WalkError] {
        &self.skipped
    }

    /// Return the paths of the files, discarding the skipped entries.
    pub fn into_files(self) -> Vec<PathBuf> {
        self.files
    }
}

/// Recursively list every entry under `root` that is not itself a directory.
///
/// Entries of a directory are visited in lexical order and symbolic links are not followed, so a
/// link to a directory is listed like a file. An entry that cannot be read is skipped. If the root
/// itself cannot be read then the whole scan fails.
pub fn scan(root: &Path) -> ScanResult {
    let mut scan = Scan::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry: DirEntry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                if error.depth() == 0 {
                    return Err(ScanError::RootInaccessible {
                        root: root.to_path_buf(),
                        error: error.into(),
                    });
                }

                #[cfg(feature = "logging")]
                log::warn!("Skipping an entry that could not be accessed: {}", error);

                scan.skipped.push(error);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            scan.files.push(entry.into_path());
        }
    }

    #[cfg(feature = "logging")]
    log::info!(
        "Scanned \"{}\": {} files, {} skipped entries.",
        root.display(),
        scan.files.len(),
        scan.skipped.len()
    );

    Ok(scan)
}

/// The result of scanning a directory.
pub type ScanResult = Result<Scan, ScanError>;

/// An error that stops a scan.
#[derive(Debug)]
pub enum ScanError {
    /// The directory to scan could not be accessed.
    RootInaccessible {
        /// The directory.
        root: PathBuf,
        /// The reason it could not be accessed.
        error: IOError,
    },
}

impl Display for ScanError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Self::RootInaccessible { root, error } => {
                if error.kind() == IOErrorKind::NotFound {
                    write!(
                        formatter,
                        "Failed to walk directory \"{}\" because it does not exist.",
                        root.display()
                    )
                } else {
                    write!(
                        formatter,
                        "Failed to walk directory \"{}\": {}",
                        root.display(),
                        error
                    )
                }
            }
        }
    }
}

impl std::error::Error for ScanError {}
