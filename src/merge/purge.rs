use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::models::FragmentGroup;

/// Delete every fragment that was superseded by a newer one for the same source file
///
/// Groups must already be ordered with [`crate::merge::select_newest`]. Returns the deleted
/// paths.
///
/// # Errors
///
/// Returns an error on the first fragment that cannot be removed.
pub fn purge_superseded(groups: &[FragmentGroup]) -> Result<Vec<PathBuf>> {
    let mut purged = Vec::new();

    for group in groups {
        for candidate in group.superseded() {
            println!("Purging old cdb fragment {}", candidate.path.display());
            fs::remove_file(&candidate.path).with_context(|| {
                format!("Failed to purge cdb fragment: {}", candidate.path.display())
            })?;
            purged.push(candidate.path.clone());
        }
    }

    Ok(purged)
}
