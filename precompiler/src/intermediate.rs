//! Scratch files and the minimizer's line-oriented input format.
//!
//! Each ASCII rule becomes one `label, FLAGS` line with the flag nibble in
//! uppercase hexadecimal. Records live in a uniquely named temp file that is
//! removed when the handle drops, including on early error returns, so
//! concurrent precompiler runs never trample each other's intermediates.

use crate::error::{PrecompileError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use psl_list::SuffixEntry;
use std::io::{BufWriter, Write};
use tempfile::NamedTempFile;

/// A uniquely named temporary file, deleted on drop.
#[derive(Debug)]
pub struct ScratchFile {
    handle: NamedTempFile,
    path: Utf8PathBuf,
}

impl ScratchFile {
    /// Creates an empty scratch file in the system temp directory.
    ///
    /// # Errors
    ///
    /// Returns [`PrecompileError::Intermediate`] when the file cannot be
    /// created or its path is not valid UTF-8.
    pub fn new() -> Result<Self> {
        let handle =
            NamedTempFile::new().map_err(|source| PrecompileError::Intermediate { source })?;
        let path = Utf8PathBuf::try_from(handle.path().to_path_buf()).map_err(|err| {
            PrecompileError::Intermediate {
                source: err.into_io_error(),
            }
        })?;
        Ok(Self { handle, path })
    }

    /// The scratch file's path, for handing to external commands.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// Renders one intermediate record, without the trailing newline.
///
/// # Examples
///
/// ```
/// use psl2rs::intermediate::record_line;
/// use psl_list::{EntryFlags, SuffixEntry};
///
/// let entry = SuffixEntry::new("ck", EntryFlags::WILDCARD | EntryFlags::PLAIN);
/// assert_eq!(record_line(&entry), "ck, 2");
/// ```
#[must_use]
pub fn record_line(entry: &SuffixEntry) -> String {
    format!("{}, {:X}", entry.label(), entry.flags().dafsa_bits())
}

/// Writes one record per entry into a fresh scratch file.
///
/// The returned handle keeps the file alive; dropping it removes the file.
///
/// # Errors
///
/// Returns [`PrecompileError::Intermediate`] when the scratch file cannot be
/// created or written.
pub fn write_records<'a>(entries: impl Iterator<Item = &'a SuffixEntry>) -> Result<ScratchFile> {
    let mut scratch = ScratchFile::new()?;
    let mut writer = BufWriter::new(scratch.handle.as_file_mut());
    for entry in entries {
        writeln!(writer, "{}", record_line(entry))
            .map_err(|source| PrecompileError::Intermediate { source })?;
    }
    writer
        .flush()
        .map_err(|source| PrecompileError::Intermediate { source })?;
    drop(writer);
    Ok(scratch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use psl_list::EntryFlags;
    use rstest::rstest;

    #[rstest]
    #[case::plain(SuffixEntry::new("com", EntryFlags::PLAIN), "com, 0")]
    #[case::exception_icann(
        SuffixEntry::new("www.ck", EntryFlags::EXCEPTION | EntryFlags::ICANN),
        "www.ck, 5"
    )]
    #[case::wildcard_icann(
        SuffixEntry::new("ck", EntryFlags::WILDCARD | EntryFlags::PLAIN | EntryFlags::ICANN),
        "ck, 6"
    )]
    #[case::private_plain(
        SuffixEntry::new("blogspot.com", EntryFlags::PLAIN | EntryFlags::PRIVATE),
        "blogspot.com, 8"
    )]
    #[case::uppercase_hex(
        SuffixEntry::new("x", EntryFlags::EXCEPTION | EntryFlags::WILDCARD | EntryFlags::PRIVATE),
        "x, B"
    )]
    fn record_lines_render_label_and_flag_nibble(
        #[case] entry: SuffixEntry,
        #[case] expected: &str,
    ) {
        assert_eq!(record_line(&entry), expected);
    }

    #[test]
    fn write_records_produces_one_line_per_entry() {
        let entries = vec![
            SuffixEntry::new("co.uk", EntryFlags::PLAIN | EntryFlags::ICANN),
            SuffixEntry::new("com", EntryFlags::PLAIN | EntryFlags::ICANN),
        ];
        let scratch = write_records(entries.iter()).expect("write records");
        let text = std::fs::read_to_string(scratch.path()).expect("read records back");
        assert_eq!(text, "co.uk, 4\ncom, 4\n");
    }

    #[test]
    fn write_records_accepts_an_empty_set() {
        let scratch = write_records(std::iter::empty()).expect("write records");
        let text = std::fs::read_to_string(scratch.path()).expect("read records back");
        assert!(text.is_empty());
    }

    #[test]
    fn scratch_files_vanish_on_drop() {
        let scratch = ScratchFile::new().expect("create scratch file");
        let path = scratch.path().to_owned();
        assert!(path.exists());
        drop(scratch);
        assert!(!path.exists());
    }
}
