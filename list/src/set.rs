//! The parsed, ordered suffix rule collection.

use crate::entry::{EntryFlags, SuffixEntry};
use crate::error::{ListError, Result};
use camino::Utf8Path;

/// An ordered collection of suffix rules with aggregate counts.
///
/// The aggregate counts are taken per parsed rule line, before duplicate
/// labels are merged, so they track the list text rather than the final
/// entry vector. Punycoded twins never contribute to the counts.
#[derive(Debug, Clone, Default)]
pub struct SuffixSet {
    entries: Vec<SuffixEntry>,
    suffixes: u32,
    exceptions: u32,
    wildcards: u32,
}

impl SuffixSet {
    /// Loads and parses a suffix list file.
    ///
    /// The file is expected to be the `public_suffix_list.dat` format:
    /// lowercase UTF-8 rules, `//` comments, and the ICANN/PRIVATE section
    /// markers.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Read`] when the file cannot be opened or read.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ListError::Read {
            path: path.to_owned(),
            source,
        })?;
        let set = Self::parse(&text);
        log::debug!(
            "loaded {}: {} suffixes, {} exceptions, {} wildcards",
            path,
            set.suffixes,
            set.exceptions,
            set.wildcards
        );
        Ok(set)
    }

    /// Parses suffix list text into an ordered set.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut set = Self::default();
        let mut section = EntryFlags::empty();

        for line in text.lines() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(comment) = trimmed.strip_prefix("//") {
                section = next_section(section, comment);
                continue;
            }
            // A rule is the token up to the first whitespace.
            let token = trimmed.split_whitespace().next().unwrap_or(trimmed);
            set.push_rule(token, section);
        }

        #[cfg(feature = "idna")]
        add_punycode_twins(&mut set.entries);

        set.entries.sort_unstable_by(SuffixEntry::order);
        // A label can appear more than once, e.g. as both a plain rule and
        // an exception target; such entries collapse into one with the
        // union of their flags.
        set.entries.dedup_by(|dup, kept| {
            if dup.label() == kept.label() {
                kept.merge_flags(dup.flags());
                true
            } else {
                false
            }
        });

        set
    }

    fn push_rule(&mut self, token: &str, section: EntryFlags) {
        let (label, flags) = if let Some(rest) = token.strip_prefix('!') {
            self.exceptions += 1;
            (rest, EntryFlags::EXCEPTION | section)
        } else if let Some(rest) = token.strip_prefix('*') {
            // Only `*.rule` is a wildcard; anything else starting with an
            // asterisk is not a valid rule.
            let Some(rest) = rest.strip_prefix('.') else {
                return;
            };
            self.wildcards += 1;
            self.suffixes += 1;
            (rest, EntryFlags::WILDCARD | EntryFlags::PLAIN | section)
        } else {
            self.suffixes += 1;
            (token, EntryFlags::PLAIN | section)
        };

        if label.is_empty() {
            return;
        }
        self.entries.push(SuffixEntry::new(label, flags));
    }

    /// The rules, ordered most-labels-first.
    #[must_use]
    pub fn entries(&self) -> &[SuffixEntry] {
        &self.entries
    }

    /// Number of plain and wildcard rules parsed.
    #[must_use]
    pub fn suffix_count(&self) -> u32 {
        self.suffixes
    }

    /// Number of exception rules parsed.
    #[must_use]
    pub fn exception_count(&self) -> u32 {
        self.exceptions
    }

    /// Number of wildcard rules parsed.
    #[must_use]
    pub fn wildcard_count(&self) -> u32 {
        self.wildcards
    }

    /// Number of distinct entries after merging.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Applies a section marker found in a comment line.
///
/// BEGIN markers only take effect outside a section and END markers only
/// inside one, so stray markers in ordinary comments cannot flip state.
fn next_section(current: EntryFlags, comment: &str) -> EntryFlags {
    if current.is_empty() {
        if comment.contains("===BEGIN ICANN DOMAINS===") {
            EntryFlags::ICANN
        } else if comment.contains("===BEGIN PRIVATE DOMAINS===") {
            EntryFlags::PRIVATE
        } else {
            current
        }
    } else if comment.contains("===END ICANN DOMAINS===")
        || comment.contains("===END PRIVATE DOMAINS===")
    {
        EntryFlags::empty()
    } else {
        current
    }
}

/// Appends an ASCII twin for every non-ASCII label.
///
/// Twins carry the same flags as their Unicode original. Labels the IDNA
/// mapping rejects stay untwinned; the precompiler drops them later.
#[cfg(feature = "idna")]
fn add_punycode_twins(entries: &mut Vec<SuffixEntry>) {
    let mut twins = Vec::new();
    for entry in entries.iter() {
        if entry.label().is_ascii() {
            continue;
        }
        match idna::domain_to_ascii(entry.label()) {
            Ok(ascii) if !ascii.is_empty() && ascii != entry.label() => {
                twins.push(SuffixEntry::new(ascii, entry.flags()));
            }
            Ok(_) => {}
            Err(errors) => {
                log::debug!("no punycode twin for {}: {errors}", entry.label());
            }
        }
    }
    entries.append(&mut twins);
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
