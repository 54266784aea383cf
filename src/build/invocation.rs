use std::path::Path;
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result, bail};

use crate::models::MergeOptions;
use crate::models::options::fragment_dir;
use crate::utils::quote_for_double_quotes;

/// Build setting overridden by this tool; user commands must not set it themselves
pub const RESERVED_FLAG: &str = "OTHER_CFLAGS";

/// Compose the shell command line for a build that emits fragments into `fragment_dir`
///
/// `$(inherited)` is escaped so it reaches the build tool literally.
///
/// # Errors
///
/// Returns an error if `build_with` already mentions [`RESERVED_FLAG`].
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use xcode_compdb::build::build_command_line;
///
/// let line = build_command_line("xcodebuild -scheme App", Path::new("/b/CompilationDatabase"))?;
/// assert_eq!(
///     line,
///     r#"xcodebuild -scheme App OTHER_CFLAGS="\$(inherited) -gen-cdb-fragment-path /b/CompilationDatabase""#
/// );
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_command_line(build_with: &str, fragment_dir: &Path) -> Result<String> {
    check_reserved_flag(build_with)?;

    let fragment_dir = fragment_dir.to_string_lossy();
    Ok(format!(
        "{} {}=\"\\$(inherited) -gen-cdb-fragment-path {}\"",
        build_with,
        RESERVED_FLAG,
        quote_for_double_quotes(&fragment_dir)
    ))
}

/// Run the configured build command, if any
///
/// A failing build is fatal unless `ignore_build_errors` is set, in which case a warning is
/// printed and the merge continues with whatever fragments exist.
///
/// # Errors
///
/// Returns an error if:
/// - The command contains [`RESERVED_FLAG`] (checked before anything runs)
/// - The build directory cannot be resolved to an absolute path
/// - The build fails and `ignore_build_errors` is off
pub fn run_build(options: &MergeOptions) -> Result<()> {
    let Some(build_with) = options.build_with.as_deref() else {
        return Ok(());
    };

    check_reserved_flag(build_with)?;

    let build_dir = options.build_dir.canonicalize().with_context(|| {
        format!("Failed to resolve build directory: {}", options.build_dir.display())
    })?;
    let command_line = build_command_line(build_with, &fragment_dir(&build_dir))?;

    println!("Running build: {}", command_line);
    let outcome = shell_command(&command_line).current_dir(&build_dir).status();

    let failure = match outcome {
        Ok(status) if status.success() => return Ok(()),
        Ok(status) => describe_status(status),
        Err(e) => format!("could not be started: {}", e),
    };

    if !options.ignore_build_errors {
        bail!("Build process failed ({}). Stopping {}.", failure, env!("CARGO_PKG_NAME"));
    }

    eprintln!("Warning: Build process failed ({}). Continuing...", failure);
    Ok(())
}

fn check_reserved_flag(build_with: &str) -> Result<()> {
    if build_with.contains(RESERVED_FLAG) {
        bail!(
            "{} is not supported as a build option as it will be overriden by {}. Exiting.",
            RESERVED_FLAG,
            env!("CARGO_PKG_NAME")
        );
    }
    Ok(())
}

#[cfg(unix)]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(command_line);
    command
}

#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(command_line);
    command
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}
