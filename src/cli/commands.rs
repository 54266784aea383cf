use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::merge::generate_database;
use crate::models::MergeOptions;

#[derive(Parser, Debug)]
#[command(name = "xcode-compdb")]
#[command(version = "0.1.0")]
#[command(
    about = "Generate a compilation database from the cdb fragments of an Xcode build",
    long_about = None
)]
pub struct Cli {
    /// The directory where CompilationDatabase/ resides
    pub build_dir: PathBuf,

    /// The directory where compile_commands.json should be written [default: build_dir]
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Purge old compile commands from the cache (default)
    #[arg(long = "purge-old", overrides_with = "no_purge_old")]
    pub purge_old: bool,

    /// Keep superseded cdb fragments on disk
    #[arg(long = "no-purge-old", overrides_with = "purge_old")]
    pub no_purge_old: bool,

    /// First build with the given command before generating the compilation database.
    /// OTHER_CFLAGS is appended to request cdb fragments, so the command must not set it.
    /// Invoke like `--build-with "xcodebuild <options>"` or
    /// `--build-with "cmake --build build <options> --"`.
    #[arg(long, value_name = "COMMAND", help_heading = "Build before creating cdb")]
    pub build_with: Option<String>,

    /// Generate the compilation database even if the build fails
    #[arg(
        long = "ignore-build-errors",
        overrides_with = "no_ignore_build_errors",
        help_heading = "Build before creating cdb"
    )]
    pub ignore_build_errors: bool,

    /// Stop when the build fails (default)
    #[arg(
        long = "no-ignore-build-errors",
        overrides_with = "ignore_build_errors",
        help_heading = "Build before creating cdb"
    )]
    pub no_ignore_build_errors: bool,
}

impl Cli {
    pub fn into_options(self) -> MergeOptions {
        let mut options = MergeOptions::new(self.build_dir);
        if let Some(output) = self.output {
            options.output_dir = output;
        }
        options.purge_old = !self.no_purge_old;
        options.build_with = self.build_with;
        options.ignore_build_errors = self.ignore_build_errors;
        options
    }
}

pub fn run() -> Result<()> {
    let options = Cli::parse().into_options();
    generate_database(&options)?;
    Ok(())
}
