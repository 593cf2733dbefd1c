//! Path checks for CLI input and output.

use std::{fs::create_dir_all, path::Path};

use anyhow::{Context, Result, bail};

/// Fail unless `path` ends in `.{extension}`, ignoring case.
pub fn require_extension(path: &Path, extension: &str, what: &str) -> Result<()> {
    let matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
    if !matches {
        bail!("{what} must be a .{extension} file: {}", path.display());
    }
    Ok(())
}

/// Create the parent directory of `path` if it doesn't exist.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(())
}
