use std::path::PathBuf;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentCandidate {
    pub modified: DateTime<Utc>,
    pub path: PathBuf,
}

/// Fragments that compiled the same source file.
///
/// After [`FragmentGroup::sort_newest_first`] the first candidate is the survivor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentGroup {
    pub file: String,
    pub candidates: Vec<FragmentCandidate>,
}

impl FragmentGroup {
    pub fn new(file: String) -> Self {
        Self { file, candidates: Vec::new() }
    }

    /// Stable sort, so fragments with equal mtimes keep discovery order
    pub fn sort_newest_first(&mut self) {
        self.candidates.sort_by(|a, b| b.modified.cmp(&a.modified));
    }

    pub fn newest(&self) -> Option<&FragmentCandidate> {
        self.candidates.first()
    }

    pub fn superseded(&self) -> &[FragmentCandidate] {
        self.candidates.get(1..).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub output_path: PathBuf,
    pub entries_written: usize,
    pub purged: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}
