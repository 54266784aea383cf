use anyhow::Result;

use crate::build::run_build;
use crate::discovery::list_fragments;
use crate::merge::{group_fragments, purge_superseded, select_newest, write_database};
use crate::models::{MergeOptions, MergeReport};

/// Build (optionally), merge the fragments and write `compile_commands.json`
///
/// # Errors
///
/// Returns an error if:
/// - The build command contains `OTHER_CFLAGS`
/// - The build fails and build errors are not ignored
/// - The fragment directory is missing, empty, or holds a non-`.json` entry
/// - A fragment cannot be read or purged, or the output cannot be written
///
/// Malformed fragments are skipped with a warning and listed in [`MergeReport::skipped`].
///
/// # Examples
///
/// ```no_run
/// use xcode_compdb::{MergeOptions, generate_database};
///
/// let report = generate_database(&MergeOptions::new("build"))?;
/// println!("Wrote {} entries", report.entries_written);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_database(options: &MergeOptions) -> Result<MergeReport> {
    run_build(options)?;

    let fragments = list_fragments(&options.build_dir)?;

    let mut grouped = group_fragments(&fragments)?;
    select_newest(&mut grouped.groups);

    let purged = if options.purge_old { purge_superseded(&grouped.groups)? } else { Vec::new() };

    let output_path = options.output_path();
    let entries_written = write_database(&output_path, &grouped.groups)?;

    println!("Successfully saved compilation database at {}", output_path.display());

    Ok(MergeReport { output_path, entries_written, purged, skipped: grouped.skipped })
}
