//! Delegation to an external ADF renderer binary.
//!
//! When an `adf2md` binary is discoverable on `PATH`, conversion may pipe
//! the JSON-encoded tree to it and use its output verbatim. This is a
//! best-effort optimization: any failure here (missing binary, non-zero
//! exit, timeout, garbage output) makes the caller fall through to the
//! built-in renderer, so nothing in this module is load-bearing for
//! correctness.

use crate::error::{Error, Result};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Default name of the external renderer binary.
pub const DEFAULT_PROGRAM: &str = "adf2md";

/// Default time budget for one delegated conversion.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Poll interval while waiting for the child process.
const WAIT_POLL: Duration = Duration::from_millis(10);

/// Handle to an external renderer binary.
#[derive(Debug, Clone)]
pub struct ExternalRenderer {
    program: PathBuf,
    timeout: Duration,
}

impl ExternalRenderer {
    /// Looks up the default renderer binary on `PATH`.
    ///
    /// Returns `None` when the binary is absent; that is the normal state
    /// in most environments, not an error.
    pub fn detect() -> Option<Self> {
        Self::detect_program(DEFAULT_PROGRAM)
    }

    /// Looks up a named renderer binary on `PATH`.
    pub fn detect_program(program: &str) -> Option<Self> {
        find_on_path(program).map(|path| Self {
            program: path,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Creates a handle for an explicit binary path (no `PATH` lookup).
    pub fn at_path(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the time budget for one conversion.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pipes the JSON payload to the binary and returns its trimmed stdout.
    pub fn render(&self, json: &str) -> Result<String> {
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        // The write happens off-thread: a child that never reads stdin
        // would otherwise block us once the payload exceeds the pipe
        // buffer, and the deadline loop below must start immediately. A
        // child that exits without reading breaks the pipe; that shows up
        // as a failed exit status below.
        if let Some(mut stdin) = child.stdin.take() {
            let payload = json.as_bytes().to_vec();
            std::thread::spawn(move || {
                let _ = stdin.write_all(&payload);
            });
        }

        // Stdout must be drained concurrently or a chatty child can fill
        // the pipe buffer and deadlock against our wait loop.
        let mut stdout = child.stdout.take().ok_or_else(|| {
            Error::ExternalTool("child stdout not captured".to_string())
        })?;
        let reader = std::thread::spawn(move || {
            let mut buf = Vec::new();
            stdout.read_to_end(&mut buf).map(|_| buf)
        });

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait()? {
                Some(status) => break status,
                None if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(Error::ExternalToolTimeout(self.timeout));
                }
                None => std::thread::sleep(WAIT_POLL),
            }
        };

        let output = reader
            .join()
            .map_err(|_| Error::ExternalTool("stdout reader panicked".to_string()))??;

        if !status.success() {
            return Err(Error::ExternalTool(format!(
                "{} exited with {status}",
                self.program.display()
            )));
        }

        let output = String::from_utf8(output).map_err(|_| Error::InvalidOutput)?;
        Ok(output.trim().to_string())
    }
}

/// Searches `PATH` for an executable file with the given name.
fn find_on_path(program: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
