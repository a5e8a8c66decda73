//! Subprocess execution seam for external tools.
//!
//! The precompiler shells out to the DAFSA minimizer and the checksum
//! utility. Both go through [`CommandExecutor`] so that pipeline logic can be
//! exercised in tests without touching the host system. Commands are always
//! invoked as argument vectors; there is no shell involved, so paths with
//! spaces or metacharacters need no quoting.

use crate::error::{PrecompileError, Result};
use std::process::{Command, Output};

/// Abstraction for running external commands.
pub trait CommandExecutor {
    /// Runs a command with arguments and returns the captured output.
    ///
    /// The call blocks until the command exits; there is no timeout.
    ///
    /// # Errors
    ///
    /// Returns any I/O errors encountered while spawning or running the
    /// command.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use psl2rs::exec::{CommandExecutor, SystemCommandExecutor};
    ///
    /// let executor = SystemCommandExecutor;
    /// let output = executor.run("sha1sum", &["public_suffix_list.dat"])?;
    /// assert!(output.status.success());
    /// # Ok::<(), psl2rs::error::PrecompileError>(())
    /// ```
    fn run(&self, cmd: &str, args: &[&str]) -> Result<Output>;
}

/// Executes commands on the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandExecutor;

impl CommandExecutor for SystemCommandExecutor {
    fn run(&self, cmd: &str, args: &[&str]) -> Result<Output> {
        Command::new(cmd)
            .args(args)
            .output()
            .map_err(PrecompileError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_executor_reports_missing_programs_as_io_errors() {
        let executor = SystemCommandExecutor;
        let err = executor
            .run("psl2rs-no-such-program-2f8a", &[])
            .expect_err("expected spawn failure");
        assert!(matches!(err, PrecompileError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn system_executor_captures_exit_status_and_stdout() {
        let executor = SystemCommandExecutor;
        let output = executor
            .run("sh", &["-c", "printf hello; exit 7"])
            .expect("expected the shell to spawn");
        assert_eq!(output.status.code(), Some(7));
        assert_eq!(output.stdout, b"hello");
    }
}
