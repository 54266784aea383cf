use std::fs::{self, File};
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::FragmentGroup;
use crate::parsers::FRAGMENT_SEPARATOR;

const ARRAY_OPEN: &[u8] = b"[\n";
const ARRAY_CLOSE: &[u8] = b"\n]\n";

/// Write the surviving fragment of every group into one JSON array at `output_path`
///
/// Fragments are copied verbatim, separator included. The separator after the last
/// fragment is then overwritten with the closing bracket. Groups must already be ordered
/// with [`crate::merge::select_newest`].
///
/// Returns the number of entries written.
///
/// # Errors
///
/// Returns an error if the output cannot be written, or a surviving fragment cannot be
/// read or no longer ends with its separator.
pub fn write_database(output_path: &Path, groups: &[FragmentGroup]) -> Result<usize> {
    let mut output = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;

    output.write_all(ARRAY_OPEN).context("Failed to write compilation database")?;

    let mut written = 0;
    for candidate in groups.iter().filter_map(FragmentGroup::newest) {
        let fragment = fs::read(&candidate.path).with_context(|| {
            format!("Failed to read cdb fragment: {}", candidate.path.display())
        })?;
        if !fragment.ends_with(FRAGMENT_SEPARATOR) {
            bail!("cdb fragment changed while merging: {}", candidate.path.display());
        }
        output.write_all(&fragment).context("Failed to write compilation database")?;
        written += 1;
    }

    if written > 0 {
        let separator_len = FRAGMENT_SEPARATOR.len() as i64;
        output
            .seek(SeekFrom::End(-separator_len))
            .context("Failed to seek in compilation database")?;
        output.write_all(ARRAY_CLOSE).context("Failed to write compilation database")?;
    } else {
        eprintln!("Warning: No valid cdb fragments found. Writing an empty compilation database.");
        output.write_all(&ARRAY_CLOSE[1..]).context("Failed to write compilation database")?;
    }

    output.flush().context("Failed to flush compilation database")?;
    Ok(written)
}
