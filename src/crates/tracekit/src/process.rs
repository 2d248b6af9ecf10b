//! Process spawning and shell execution
//!
//! Every failure is raised as a traced [`UtilsError`]; exit codes of
//! processes that did run are returned, not treated as errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use tracekit::process::{exec_and_wait, shell_exec_and_wait};
//!
//! shell_exec_and_wait("echo aaa > echo_out.txt")?;
//! let code = exec_and_wait("/bin/ls", &["-l", "-a", "-h"], "ls_out.txt")?;
//! ```

use std::fs::File;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;

use tracing::{debug, warn};

use crate::config::ProcessConfig;
use crate::logging::sanitize_for_logging;
use crate::{traced, Result, TraceContext, UtilsError};

/// Exit code reported for processes terminated without one (e.g. by a
/// signal).
pub const NO_EXIT_CODE: i32 = -1;

/// Run `cmd` through the platform default shell and wait for it.
pub fn shell_exec_and_wait(cmd: &str) -> Result<i32> {
    shell_exec_and_wait_with(cmd, &ProcessConfig::default())
}

/// Run `cmd` through the configured shell and wait for it.
pub fn shell_exec_and_wait_with(cmd: &str, config: &ProcessConfig) -> Result<i32> {
    config.validate()?;
    if config.log_commands {
        debug!(shell = %config.shell, "Executing shell command: {}", sanitize_for_logging(cmd));
    }
    let start = Instant::now();
    let status = Command::new(&config.shell)
        .arg(&config.shell_flag)
        .arg(cmd)
        .status()
        .map_err(|e| {
            traced!(
                UtilsError,
                "Cannot execute shell command, shell: [{}], error: [{}]",
                config.shell,
                e
            )
        })?;
    let code = exit_code(status);
    debug!(code, elapsed = ?start.elapsed(), "Shell command finished");
    Ok(code)
}

/// Run `executable` with `args`, sending stdout and stderr to `out_path`,
/// and wait for it to exit.
pub fn exec_and_wait<S: AsRef<str>>(
    executable: &str,
    args: &[S],
    out_path: impl AsRef<Path>,
) -> Result<i32> {
    let mut command = prepare(executable, args, out_path.as_ref())
        .trace_as::<UtilsError>(crate::call_site!())?;
    let start = Instant::now();
    let status = command.status().map_err(|e| {
        traced!(
            UtilsError,
            "Cannot execute process, executable: [{}], error: [{}]",
            executable,
            e
        )
    })?;
    let code = exit_code(status);
    debug!(executable, code, elapsed = ?start.elapsed(), "Process finished");
    Ok(code)
}

/// Start `executable` with `args`, sending stdout and stderr to `out_path`,
/// without waiting. Returns the child's pid.
///
/// The child keeps running after this returns and is not reaped by this
/// process.
pub fn exec_async<S: AsRef<str>>(
    executable: &str,
    args: &[S],
    out_path: impl AsRef<Path>,
) -> Result<u32> {
    let mut command = prepare(executable, args, out_path.as_ref())
        .trace_as::<UtilsError>(crate::call_site!())?;
    let child = command.spawn().map_err(|e| {
        traced!(
            UtilsError,
            "Cannot spawn process, executable: [{}], error: [{}]",
            executable,
            e
        )
    })?;
    let pid = child.id();
    debug!(executable, pid, "Process spawned");
    Ok(pid)
}

/// Absolute path of the running executable.
pub fn current_executable_path() -> Result<String> {
    let path = std::env::current_exe()
        .map_err(|e| traced!(UtilsError, "Cannot determine executable path, error: [{}]", e))?;
    path.into_os_string().into_string().map_err(|raw| {
        traced!(
            UtilsError,
            "Executable path is not valid UTF-8: [{}]",
            raw.to_string_lossy()
        )
    })
}

fn prepare<S: AsRef<str>>(executable: &str, args: &[S], out_path: &Path) -> Result<Command> {
    let out = File::create(out_path).map_err(|e| {
        traced!(
            UtilsError,
            "Cannot open output file, path: [{}], error: [{}]",
            out_path.display(),
            e
        )
    })?;
    let err = out.try_clone().map_err(|e| {
        traced!(
            UtilsError,
            "Cannot duplicate output file handle, path: [{}], error: [{}]",
            out_path.display(),
            e
        )
    })?;

    let mut command = Command::new(executable);
    command
        .args(args.iter().map(AsRef::<str>::as_ref))
        .stdin(Stdio::null())
        .stdout(Stdio::from(out))
        .stderr(Stdio::from(err));
    debug!(
        executable,
        out = %out_path.display(),
        "Prepared process with {} argument(s)",
        args.len()
    );
    Ok(command)
}

fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => {
            warn!(%status, "Process terminated without an exit code");
            NO_EXIT_CODE
        }
    }
}
