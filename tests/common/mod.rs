//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// Builder for creating test build directories holding cdb fragments
pub struct BuildDirBuilder {
    temp_dir: TempDir,
}

impl BuildDirBuilder {
    /// Create a new builder with an empty build directory (no CompilationDatabase/)
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the build directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create an empty CompilationDatabase/ directory
    pub fn with_fragment_dir(self) -> Self {
        fs::create_dir_all(fragment_dir(self.temp_dir.path()))
            .expect("Failed to create CompilationDatabase dir");
        self
    }

    /// Add a fragment file
    pub fn with_fragment(self, fragment: FragmentBuilder) -> Self {
        let dir = fragment_dir(self.temp_dir.path());
        fs::create_dir_all(&dir).expect("Failed to create CompilationDatabase dir");
        fragment.create_in(&dir);
        self
    }

    /// Add a file with arbitrary content to CompilationDatabase/
    pub fn with_raw_file(self, name: &str, content: &str) -> Self {
        let dir = fragment_dir(self.temp_dir.path());
        fs::create_dir_all(&dir).expect("Failed to create CompilationDatabase dir");
        fs::write(dir.join(name), content).expect("Failed to write raw file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for BuildDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single cdb fragment as written by clang's -gen-cdb-fragment-path
pub struct FragmentBuilder {
    name: String,
    file: String,
    arguments: Vec<String>,
    mtime_secs: u64,
}

impl FragmentBuilder {
    /// Create a new fragment with the given file name and the source file it compiles
    pub fn new(name: &str, file: &str) -> Self {
        Self {
            name: name.to_string(),
            file: file.to_string(),
            arguments: vec!["clang".to_string(), "-c".to_string(), file.to_string()],
            mtime_secs: 1_000,
        }
    }

    /// Set the modification time in seconds since the epoch
    pub fn mtime(mut self, secs: u64) -> Self {
        self.mtime_secs = secs;
        self
    }

    /// Add a compiler argument
    pub fn arg(mut self, arg: &str) -> Self {
        self.arguments.push(arg.to_string());
        self
    }

    /// The JSON object without the trailing separator
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "directory": "/src",
            "file": self.file,
            "output": format!("/build/{}.o", self.name),
            "arguments": self.arguments,
        })
        .to_string()
    }

    pub fn create_in(&self, dir: &Path) -> PathBuf {
        let path = dir.join(&self.name);
        fs::write(&path, format!("{},\n", self.to_json())).expect("Failed to write fragment");
        set_mtime(&path, self.mtime_secs);
        path
    }
}

pub fn fragment_dir(build_dir: &Path) -> PathBuf {
    build_dir.join("CompilationDatabase")
}

pub fn set_mtime(path: &Path, secs: u64) {
    File::options()
        .write(true)
        .open(path)
        .expect("Failed to open file for mtime")
        .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .expect("Failed to set mtime");
}

/// Parse the aggregate database in `dir`
pub fn read_database(dir: &Path) -> Vec<serde_json::Value> {
    let contents =
        fs::read_to_string(dir.join("compile_commands.json")).expect("Failed to read output");
    serde_json::from_str(&contents).expect("Output is not a JSON array")
}

/// Names of the fragment files still on disk, sorted
pub fn remaining_fragments(build_dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(fragment_dir(build_dir))
        .expect("Failed to list fragments")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
