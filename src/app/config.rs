use crate::app::cli::Cli;
use crate::app::models::ScanConfig;
use anyhow::{bail, Context, Result};
use std::path::{Component, Path, PathBuf};

/// Output must be a bare file name so it lands directly inside the root.
fn normalize_output_name(name: &str) -> Result<String> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(file_name)), None) => Ok(file_name.to_string_lossy().into_owned()),
        _ => bail!("Output name must be a plain file name, got {:?}", name),
    }
}

/// Folds `.` and `..` without touching the filesystem, so symlinks stay unresolved.
/// `..` at the root stays at the root.
fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

pub fn resolve_config(cli: Cli, current_dir: &Path) -> Result<ScanConfig> {
    // Relative roots resolve against the current directory; symlinks are left as-is.
    let root = match cli.root {
        Some(root) => current_dir.join(root),
        None => current_dir.to_path_buf(),
    };
    let root = std::path::absolute(&root)
        .map(|absolute| clean_path(&absolute))
        .with_context(|| format!("Failed to resolve root directory {:?}", root))?;

    let output_name = normalize_output_name(&cli.output)?;

    Ok(ScanConfig::new(root, &cli.criteria, &output_name).with_strict(cli.strict))
}
