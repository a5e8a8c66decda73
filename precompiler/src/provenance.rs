//! Provenance metadata embedded in generated source artefacts.
//!
//! Downstream consumers compare these facts against a newer list file to
//! detect a stale builtin. Every field degrades rather than fails: a missing
//! mtime becomes `0`, a failed checksum an empty string, an uncanonicalizable
//! path the literal argument.

use crate::output::write_stderr_line;
use camino::Utf8Path;
use psl_list::SuffixSet;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable overriding the embedded compile time.
///
/// Reproducible-build environments set it to seconds since the Unix epoch.
/// Unset or empty means wall-clock time; an unparseable value is ignored
/// with a warning on the diagnostic sink.
pub const SOURCE_DATE_EPOCH_ENV: &str = "SOURCE_DATE_EPOCH";

/// Build-time facts embedded in a generated source artefact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// Modification time of the suffix list file, seconds since the epoch.
    pub file_time: i64,
    /// Time of this precompilation run, seconds since the epoch.
    pub compile_time: i64,
    /// Plain and wildcard rule count.
    pub suffixes: u32,
    /// Exception rule count.
    pub exceptions: u32,
    /// Wildcard rule count.
    pub wildcards: u32,
    /// Hex checksum of the list file, empty when unavailable.
    pub checksum: String,
    /// Absolute path of the list file, or the literal argument.
    pub source_path: String,
}

impl Provenance {
    /// Gathers provenance for a loaded set.
    ///
    /// The checksum is supplied by the caller so that the capture subprocess
    /// runs at the point in the pipeline the caller chooses. A malformed
    /// [`SOURCE_DATE_EPOCH_ENV`] override is reported on `stderr`.
    #[must_use]
    pub fn collect(
        input: &Utf8Path,
        set: &SuffixSet,
        checksum: String,
        stderr: &mut dyn Write,
    ) -> Self {
        Self {
            file_time: source_mtime(input),
            compile_time: compile_time(stderr),
            suffixes: set.suffix_count(),
            exceptions: set.exception_count(),
            wildcards: set.wildcard_count(),
            checksum,
            source_path: absolute_source_path(input),
        }
    }

    /// Renders the seven declarations, in their fixed order.
    ///
    /// String fields are emitted as Rust string literals with full escaping,
    /// so a hostile path cannot break out of the generated module.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "pub static PSL_FILE_TIME: i64 = {};\n\
             pub static PSL_COMPILE_TIME: i64 = {};\n\
             pub static PSL_NSUFFIXES: u32 = {};\n\
             pub static PSL_NEXCEPTIONS: u32 = {};\n\
             pub static PSL_NWILDCARDS: u32 = {};\n\
             pub static PSL_SHA1_CHECKSUM: &str = {:?};\n\
             pub static PSL_FILENAME: &str = {:?};\n",
            self.file_time,
            self.compile_time,
            self.suffixes,
            self.exceptions,
            self.wildcards,
            self.checksum,
            self.source_path,
        )
    }
}

/// The compile-time stamp, honouring [`SOURCE_DATE_EPOCH_ENV`].
fn compile_time(stderr: &mut dyn Write) -> i64 {
    match std::env::var(SOURCE_DATE_EPOCH_ENV) {
        Ok(value) if !value.is_empty() => match value.parse::<i64>() {
            Ok(stamp) => stamp,
            Err(err) => {
                write_stderr_line(
                    stderr,
                    format!("ignoring unparseable {SOURCE_DATE_EPOCH_ENV} ({value:?}): {err}"),
                );
                wall_clock()
            }
        },
        _ => wall_clock(),
    }
}

fn wall_clock() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
        Err(_) => 0,
    }
}

/// Modification time of the list file, or `0` when unavailable.
fn source_mtime(input: &Utf8Path) -> i64 {
    std::fs::metadata(input)
        .and_then(|metadata| metadata.modified())
        .ok()
        .and_then(|modified| modified.duration_since(UNIX_EPOCH).ok())
        .and_then(|elapsed| i64::try_from(elapsed.as_secs()).ok())
        .unwrap_or(0)
}

/// Canonicalizes the list file path, resolving symbolic links.
///
/// Staleness checks compare this against the live file, so a relative
/// argument must not be embedded as-is; only when resolution fails does the
/// literal argument go in.
fn absolute_source_path(input: &Utf8Path) -> String {
    input
        .canonicalize_utf8()
        .map_or_else(|_| input.to_string(), camino::Utf8PathBuf::into_string)
}
