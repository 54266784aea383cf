use std::path::{Path, PathBuf};

/// Name of the subdirectory of the build directory that holds fragments
pub const FRAGMENT_DIR_NAME: &str = "CompilationDatabase";

/// Name of the aggregate database written to the output directory
pub const OUTPUT_FILE_NAME: &str = "compile_commands.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub build_dir: PathBuf,
    pub output_dir: PathBuf,
    pub purge_old: bool,
    pub build_with: Option<String>,
    pub ignore_build_errors: bool,
}

impl MergeOptions {
    /// Options with the default flags: purge on, no build, build errors fatal.
    /// The output directory defaults to the build directory.
    pub fn new(build_dir: impl Into<PathBuf>) -> Self {
        let build_dir = build_dir.into();
        Self {
            output_dir: build_dir.clone(),
            build_dir,
            purge_old: true,
            build_with: None,
            ignore_build_errors: false,
        }
    }

    pub fn fragment_dir(&self) -> PathBuf {
        fragment_dir(&self.build_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_FILE_NAME)
    }
}

pub fn fragment_dir(build_dir: &Path) -> PathBuf {
    build_dir.join(FRAGMENT_DIR_NAME)
}
