use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::CompileCommand;
use crate::utils::validate_file_size;

/// Every fragment written by clang ends with this separator
pub const FRAGMENT_SEPARATOR: &[u8] = b",\n";

/// Decode the raw bytes of a fragment into its compilation entry
///
/// The trailing [`FRAGMENT_SEPARATOR`] is required and stripped before parsing.
///
/// # Examples
///
/// ```
/// use xcode_compdb::parsers::decode_fragment;
///
/// let entry = decode_fragment(b"{\"file\":\"main.c\"},\n")?;
/// assert_eq!(entry.file, "main.c");
/// assert!(decode_fragment(b"{\"file\":\"main.c\"}").is_err());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn decode_fragment(bytes: &[u8]) -> Result<CompileCommand> {
    let Some(object) = bytes.strip_suffix(FRAGMENT_SEPARATOR) else {
        bail!("fragment does not end with a \",\\n\" separator");
    };
    serde_json::from_slice(object).context("invalid compilation database entry")
}

/// Read and decode a fragment file
///
/// Returns `Ok(None)` when the fragment is malformed; a warning is printed and the caller
/// should skip it. Returns an error only when the file cannot be opened or read.
pub fn parse_fragment(path: &Path) -> Result<Option<CompileCommand>> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open cdb fragment: {}", path.display()))?;

    if let Err(e) = validate_file_size(&file, path) {
        eprintln!("Warning: Could not JSON decode {}. Skipping this file. ({:#})", path.display(), e);
        return Ok(None);
    }

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read cdb fragment: {}", path.display()))?;

    match decode_fragment(&bytes) {
        Ok(entry) => Ok(Some(entry)),
        Err(e) => {
            eprintln!(
                "Warning: Could not JSON decode {}. Skipping this file. ({:#})",
                path.display(),
                e
            );
            Ok(None)
        }
    }
}
