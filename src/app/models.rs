use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::error::SourceReadError;

/// Directory basenames that are never descended into.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    ".vscode",
    "__pycache__",
    ".venv",
    "venv",
    "dist",
    "build",
];

pub const DEFAULT_OUTPUT_NAME: &str = "output.txt";

/// Immutable settings for one run, built once from the invocation parameters.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    /// Criteria exactly as given, kept for the banner line.
    pub criteria: Vec<String>,
    /// Lower-cased suffixes, each starting with '.'.
    pub extensions: HashSet<String>,
    /// Lower-cased exact filenames, never starting with '.'.
    pub literal_names: HashSet<String>,
    pub output_name: String,
    pub output_path: PathBuf,
    pub excluded_dir_names: HashSet<String>,
    pub strict: bool,
}

impl ScanConfig {
    /// `root` must already be absolute.
    pub fn new(root: PathBuf, criteria: &[String], output_name: &str) -> Self {
        let (extensions, literal_names): (Vec<&String>, Vec<&String>) =
            criteria.iter().partition(|c| c.starts_with('.'));

        Self {
            output_path: root.join(output_name),
            root,
            criteria: criteria.to_vec(),
            extensions: extensions.into_iter().map(|e| e.to_lowercase()).collect(),
            literal_names: literal_names.into_iter().map(|n| n.to_lowercase()).collect(),
            output_name: output_name.to_string(),
            excluded_dir_names: EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
            strict: false,
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Latin1,
}

impl Encoding {
    /// Decode attempts in order; the first success wins.
    pub const ATTEMPTS: [Encoding; 2] = [Encoding::Utf8, Encoding::Latin1];

    pub fn decode(self, bytes: &[u8]) -> Result<String, std::str::Utf8Error> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes).map(str::to_owned),
            // Every byte is a valid Latin-1 code point.
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }

    pub fn is_fallback(self) -> bool {
        self != Encoding::ATTEMPTS[0]
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => f.write_str("UTF-8"),
            Encoding::Latin1 => f.write_str("Latin-1"),
        }
    }
}

#[derive(Debug)]
pub struct DecodedText {
    pub text: String,
    pub encoding: Encoding,
}

/// Runs the decode attempts over `bytes`, keeping the last failure if none succeed.
pub fn decode_with_fallback(bytes: &[u8]) -> Result<DecodedText, SourceReadError> {
    let mut last_error = None;

    for encoding in Encoding::ATTEMPTS {
        match encoding.decode(bytes) {
            Ok(text) => return Ok(DecodedText { text, encoding }),
            Err(err) => {
                log::debug!("Content is not valid {}: {}", encoding, err);
                last_error = Some(err);
            }
        }
    }

    Err(SourceReadError::Undecodable {
        reason: last_error.map(|e| e.to_string()).unwrap_or_default(),
    })
}

/// One matched file, read and ready to be written. Lives for a single loop iteration.
#[derive(Debug)]
pub struct FileRecord {
    pub absolute_path: PathBuf,
    /// Forward-slash path relative to the scan root.
    pub relative_path: String,
    pub body: Result<DecodedText, SourceReadError>,
}

impl FileRecord {
    pub fn read(root: &Path, absolute_path: PathBuf) -> Self {
        let relative_path = relative_slash_path(&absolute_path, root);
        let body = fs::read(&absolute_path)
            .map_err(SourceReadError::from)
            .and_then(|bytes| decode_with_fallback(&bytes));

        if let Err(err) = &body {
            log::info!("Could not read {}: {}", absolute_path.display(), err);
        }

        Self {
            absolute_path,
            relative_path,
            body,
        }
    }
}

/// Produced once the traversal has finished and every record was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub matched_count: usize,
}

fn relative_slash_path(path: &Path, root: &Path) -> String {
    let relative = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
