//! External DAFSA minimizer invocation.
//!
//! The heavy lifting of automaton construction is delegated to an external
//! program, by default `psl-make-dafsa`. Source mode asks it for Rust source
//! text and treats failures as non-fatal: the warning goes to the diagnostic
//! sink and assembly carries on with whatever the minimizer managed to
//! produce. Binary mode asks it to write the artefact directly and any
//! failure there is fatal.

use crate::error::{PrecompileError, Result};
use crate::exec::CommandExecutor;
use crate::intermediate::ScratchFile;
use crate::output::write_stderr_line;
use camino::Utf8Path;
use std::io::Write;

/// The minimizer invoked when [`PROGRAM_ENV`] is unset.
pub const DEFAULT_PROGRAM: &str = "psl-make-dafsa";

/// Environment variable naming an alternative minimizer program.
pub const PROGRAM_ENV: &str = "PSL_MAKE_DAFSA";

/// The minimizer program to invoke, honouring the environment override.
///
/// An empty override counts as unset.
#[must_use]
pub fn program() -> String {
    match std::env::var(PROGRAM_ENV) {
        Ok(value) if !value.is_empty() => value,
        _ => DEFAULT_PROGRAM.to_owned(),
    }
}

/// Runs the minimizer over a records file and returns the generated source
/// text.
///
/// The minimizer is invoked as `<program> <records> <capture>` with a fresh
/// scratch file as the capture path. A nonzero exit or spawn failure is
/// reported on the diagnostic sink but is not fatal; whatever text reached
/// the capture file is returned, possibly none at all.
///
/// # Errors
///
/// Returns [`PrecompileError::Intermediate`] when the capture file cannot be
/// created.
pub fn generate_source(
    executor: &dyn CommandExecutor,
    records: &Utf8Path,
    stderr: &mut dyn Write,
) -> Result<String> {
    let program = program();
    let capture = ScratchFile::new()?;
    match executor.run(&program, &[records.as_str(), capture.path().as_str()]) {
        Ok(output) if !output.status.success() => {
            write_stderr_line(
                stderr,
                format!("Failed to execute {program} ({})", output.status),
            );
        }
        Ok(_) => {}
        Err(err) => {
            write_stderr_line(stderr, format!("Failed to execute {program}: {err}"));
        }
    }
    Ok(std::fs::read_to_string(capture.path()).unwrap_or_default())
}

/// Runs the minimizer in binary mode, writing the artefact to `target`.
///
/// The minimizer is invoked as `<program> --binary <records> <target>` and
/// owns the output file entirely.
///
/// # Errors
///
/// Returns [`PrecompileError::Minimizer`] when the minimizer cannot be
/// spawned or exits nonzero.
pub fn generate_binary(
    executor: &dyn CommandExecutor,
    records: &Utf8Path,
    target: &Utf8Path,
) -> Result<()> {
    let program = program();
    let output = executor
        .run(&program, &["--binary", records.as_str(), target.as_str()])
        .map_err(|err| match err {
            PrecompileError::Io(source) => PrecompileError::Minimizer {
                program: program.clone(),
                reason: source.to_string(),
            },
            other => other,
        })?;

    if output.status.success() {
        return Ok(());
    }

    let detail = String::from_utf8_lossy(&output.stderr);
    let detail = detail.trim();
    let reason = if detail.is_empty() {
        output.status.to_string()
    } else {
        format!("{}: {detail}", output.status)
    };
    Err(PrecompileError::Minimizer { program, reason })
}
