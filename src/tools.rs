//! External tool invocation.
//!
//! Every external step (catalog compiler, LaTeX engine, PDF grayscale
//! conversion, the optional dev server) is a synchronous subprocess; a
//! nonzero exit status is an [`Error::ToolError`].

use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// Runs an external program to completion in the given working directory.
///
/// With `quiet`, the child's stdout and stderr are discarded; otherwise
/// they pass through to the controlling terminal.
pub fn run_tool<I, S>(program: &str, args: I, cwd: &Path, quiet: bool) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut command = Command::new(program);
    command.args(args).current_dir(cwd);
    if quiet {
        command.stdout(Stdio::null()).stderr(Stdio::null());
    }
    debug!("Running '{}' in '{}'.", program, cwd.display());
    let status = command.status()?;
    if !status.success() {
        return Err(Error::ToolError { program: program.to_string(), status });
    }
    Ok(())
}

/// Serves a directory over plain HTTP on the given port, blocking until
/// the server process is interrupted.
pub fn serve(dir: &Path, port: u16, quiet: bool) -> Result<()> {
    let port = port.to_string();
    run_tool("python3", ["-m", "http.server", port.as_str()], dir, quiet)
}
