use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size of a single fragment: 10MB
const MAX_FRAGMENT_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Returns true when the file name ends in `.json`
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use xcode_compdb::utils::has_json_extension;
///
/// assert!(has_json_extension(Path::new("CompilationDatabase/main-1A2B.json")));
/// assert!(!has_json_extension(Path::new("CompilationDatabase/.DS_Store")));
/// ```
pub fn has_json_extension(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name.to_string_lossy().ends_with(".json"))
}

/// Validates that a fragment's size is within acceptable limits (10MB)
///
/// Takes an open file handle so the size check applies to the same file that is read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FRAGMENT_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FRAGMENT_SIZE_BYTES
        );
    }

    Ok(())
}
