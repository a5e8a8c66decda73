//! Suffix rules and their flag bitfield.

use std::cmp::Ordering;

bitflags::bitflags! {
    /// Attributes attached to a suffix rule.
    ///
    /// The low nibble is what the precompiler transports into the automaton;
    /// [`EntryFlags::PLAIN`] is loader bookkeeping and is masked out on the
    /// way there.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EntryFlags: u8 {
        /// Exception rule, introduced with `!` in the list.
        const EXCEPTION = 1 << 0;
        /// Wildcard rule, introduced with `*.` in the list.
        const WILDCARD = 1 << 1;
        /// The rule sits in the ICANN section of the list.
        const ICANN = 1 << 2;
        /// The rule sits in the PRIVATE section of the list.
        const PRIVATE = 1 << 3;
        /// Plain public-suffix rule.
        const PLAIN = 1 << 4;
    }
}

impl EntryFlags {
    /// The low-nibble view encoded into intermediate records.
    #[must_use]
    pub const fn dafsa_bits(self) -> u8 {
        self.bits() & 0x0F
    }
}

/// A single suffix rule from the list.
///
/// The stored label carries no `!` or `*.` prefix; rule kind lives in the
/// flags. Entries are immutable once the owning set has been built.
///
/// # Examples
///
/// ```
/// use psl_list::{EntryFlags, SuffixEntry};
///
/// let entry = SuffixEntry::new("ck", EntryFlags::WILDCARD | EntryFlags::PLAIN);
/// assert_eq!(entry.label(), "ck");
/// assert_eq!(entry.label_count(), 1);
/// assert_eq!(entry.flags().dafsa_bits(), 0x02);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixEntry {
    label: String,
    flags: EntryFlags,
    label_count: usize,
}

impl SuffixEntry {
    /// Creates an entry for the given label, counting its dot-separated
    /// labels.
    #[must_use]
    pub fn new(label: impl Into<String>, flags: EntryFlags) -> Self {
        let label = label.into();
        let label_count = label.split('.').count();
        Self {
            label,
            flags,
            label_count,
        }
    }

    /// The suffix label, e.g. `co.uk`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The rule's flag bitfield.
    #[must_use]
    pub fn flags(&self) -> EntryFlags {
        self.flags
    }

    /// Number of dot-separated labels in the suffix.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.label_count
    }

    pub(crate) fn merge_flags(&mut self, other: EntryFlags) {
        self.flags |= other;
    }

    /// Set ordering: most labels first, then shorter labels, then bytewise.
    pub(crate) fn order(a: &Self, b: &Self) -> Ordering {
        b.label_count
            .cmp(&a.label_count)
            .then_with(|| a.label.len().cmp(&b.label.len()))
            .then_with(|| a.label.cmp(&b.label))
    }
}
