//! Data models for compilation database fragments.
//!
//! - [`CompileCommand`] - Typed view of a single compilation database entry
//! - [`FragmentCandidate`] - A fragment file on disk with its modification time
//! - [`FragmentGroup`] - All fragments that compiled the same source file
//! - [`MergeOptions`] - Resolved run configuration
//! - [`MergeReport`] - Summary of a completed merge

pub mod compile_command;
pub mod fragment;
pub mod options;

pub use compile_command::CompileCommand;
pub use fragment::{FragmentCandidate, FragmentGroup, MergeReport};
pub use options::MergeOptions;
