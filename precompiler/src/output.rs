//! Diagnostic output helpers.
//!
//! All user-facing progress and warning text goes through an injected
//! `&mut dyn Write` sink so that tests can capture it; only the process
//! entrypoint wires the sink to the real standard error stream.

use std::io::Write;

/// Writes one line to the diagnostic sink.
///
/// # Examples
///
/// ```
/// use psl2rs::output::write_stderr_line;
///
/// let mut sink = Vec::new();
/// write_stderr_line(&mut sink, "something went sideways");
/// assert_eq!(sink, b"something went sideways\n");
/// ```
pub fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort diagnostics; ignore sink failures.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_stderr_line_appends_a_newline() {
        let mut sink = Vec::new();
        write_stderr_line(&mut sink, "warning");
        assert_eq!(sink, b"warning\n");
    }

    #[test]
    fn write_stderr_line_swallows_sink_failures() {
        struct BrokenSink;

        impl Write for BrokenSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("sink closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        write_stderr_line(&mut BrokenSink, "dropped");
    }
}
