//! xcode-compdb - Build a `compile_commands.json` from Xcode cdb fragments
//!
//! Xcode builds with `-gen-cdb-fragment-path` leave one small JSON fragment per compiled
//! file in `<build_dir>/CompilationDatabase/`. This library:
//!
//! - Optionally runs a build command with the fragment flag injected through `OTHER_CFLAGS`
//! - Discovers and parses the fragments
//! - Keeps only the newest fragment per source file, optionally purging the rest
//! - Concatenates the survivors into a single JSON array for language servers and linters
//!
//! # Example
//!
//! ```no_run
//! use xcode_compdb::{MergeOptions, generate_database};
//!
//! let mut options = MergeOptions::new("build");
//! options.purge_old = false;
//! let report = generate_database(&options)?;
//! println!("Saved {} entries to {}", report.entries_written, report.output_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod build;
pub mod cli;
pub mod discovery;
pub mod merge;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use merge::generate_database;
pub use models::{CompileCommand, MergeOptions, MergeReport};
pub use parsers::parse_fragment;
