use crate::app::models::ScanConfig;
use ignore::{DirEntry, WalkBuilder};
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// One visited directory and the names of the non-directory entries directly inside it.
#[derive(Debug)]
pub struct DirListing {
    pub dir: PathBuf,
    pub file_names: Vec<OsString>,
}

pub struct Scanner<'a> {
    config: &'a ScanConfig,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Lazily walks the root depth-first, yielding each directory before its subdirectories.
    ///
    /// Excluded directories are pruned before descent. A missing root, or a root that is
    /// not a directory, yields nothing.
    pub fn walk(&self) -> impl Iterator<Item = DirListing> + 'a {
        let excluded = self.config.excluded_dir_names.clone();

        // Hidden files and ignore files get no special treatment.
        let walker = WalkBuilder::new(&self.config.root)
            .standard_filters(false)
            .follow_links(true)
            .filter_entry(move |entry| !is_excluded_dir(entry, &excluded))
            .build();

        walker
            .filter_map(|result| match result {
                Ok(entry) => Some(entry),
                // Unreadable directories are reported by `list_files`; the rest are
                // symlink loops and entries the walker failed to stat.
                Err(err) => {
                    log::debug!("Error walking entry: {}", err);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_some_and(|t| t.is_dir()))
            .filter_map(|entry| list_files(entry.path()))
    }
}

fn is_excluded_dir(entry: &DirEntry, excluded: &HashSet<String>) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_some_and(|t| t.is_dir()) {
        return false;
    }

    let skip = entry
        .file_name()
        .to_str()
        .is_some_and(|name| excluded.contains(name));
    if skip {
        log::debug!("Skipping excluded directory {}", entry.path().display());
    }
    skip
}

fn list_files(dir: &Path) -> Option<DirListing> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            log::info!("Cannot list {}: {}", dir.display(), err);
            return None;
        }
    };

    let mut file_names = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(entry) => {
                // Follows symlinks; dangling links are listed as files.
                let is_dir = fs::metadata(entry.path()).is_ok_and(|m| m.is_dir());
                if !is_dir {
                    file_names.push(entry.file_name());
                }
            }
            Err(err) => log::info!("Error reading entry in {}: {}", dir.display(), err),
        }
    }

    Some(DirListing {
        dir: dir.to_path_buf(),
        file_names,
    })
}
