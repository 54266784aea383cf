//! Optional build step that produces fragments before merging
//!
//! The user's build command is run through the platform shell inside the build directory,
//! with an `OTHER_CFLAGS` override appended that asks clang to write one fragment per
//! compiled file into `<build_dir>/CompilationDatabase/`.

pub mod invocation;

pub use invocation::{RESERVED_FLAG, build_command_line, run_build};
