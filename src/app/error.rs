use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read one source file. Recorded inline unless the run is strict.
#[derive(Debug, Error)]
pub enum SourceReadError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("Could not decode content ({reason})")]
    Undecodable { reason: String },
}

/// Errors that abort the whole run.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Error opening or writing to the output file '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error reading file '{}': {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: SourceReadError,
    },
}
