use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::models::{FragmentCandidate, FragmentGroup};
use crate::parsers::parse_fragment;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedFragments {
    /// One group per source file, in order of first appearance
    pub groups: Vec<FragmentGroup>,
    /// Fragments that could not be decoded
    pub skipped: Vec<PathBuf>,
}

/// Parse every fragment and group them by the source file they compile
///
/// Malformed fragments are skipped with a warning and recorded in
/// [`GroupedFragments::skipped`].
///
/// # Errors
///
/// Returns an error if a fragment or its metadata cannot be read.
pub fn group_fragments(fragments: &[PathBuf]) -> Result<GroupedFragments> {
    let mut grouped = GroupedFragments::default();
    let mut index_by_file: HashMap<String, usize> = HashMap::new();

    for path in fragments {
        println!("Processing cdb fragment {}", path.display());

        let Some(entry) = parse_fragment(path)? else {
            grouped.skipped.push(path.clone());
            continue;
        };

        let modified = fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .with_context(|| format!("Failed to read modification time: {}", path.display()))?;

        let index = *index_by_file.entry(entry.file).or_insert_with_key(|file| {
            grouped.groups.push(FragmentGroup::new(file.clone()));
            grouped.groups.len() - 1
        });

        grouped.groups[index].candidates.push(FragmentCandidate {
            modified: DateTime::<Utc>::from(modified),
            path: path.clone(),
        });
    }

    Ok(grouped)
}

/// Order every group newest first so its head is the surviving fragment
pub fn select_newest(groups: &mut [FragmentGroup]) {
    for group in groups.iter_mut() {
        group.sort_newest_first();
    }
}
