use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::models::options::{FRAGMENT_DIR_NAME, fragment_dir};
use crate::utils::has_json_extension;

/// List every fragment in `<build_dir>/CompilationDatabase/`
///
/// # Returns
///
/// The fragment paths sorted by file name, so repeated runs see fragments in the same order.
///
/// # Errors
///
/// Returns an error if:
/// - The fragment directory does not exist
/// - The fragment directory is empty
/// - Any entry does not end in `.json`
/// - The directory or one of its entries cannot be read
pub fn list_fragments(build_dir: &Path) -> Result<Vec<PathBuf>> {
    let dir = fragment_dir(build_dir);

    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("The directory {}/{}/ does not exist.", build_dir.display(), FRAGMENT_DIR_NAME);
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to read fragment directory: {}", dir.display())
            });
        }
    };

    let mut fragments = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        fragments.push(entry.path());
    }

    if fragments.is_empty() {
        bail!("The directory {}/{}/ is empty.", build_dir.display(), FRAGMENT_DIR_NAME);
    }

    fragments.sort();

    if let Some(stray) = fragments.iter().find(|path| !has_json_extension(path)) {
        bail!(
            "found file without extension .json in {}/ ({})",
            FRAGMENT_DIR_NAME,
            stray.display()
        );
    }

    Ok(fragments)
}
