//! Entry selection for automaton generation.
//!
//! The DAFSA format only carries byte labels, so rules whose label is not
//! pure ASCII cannot be encoded. The loader has already appended punycoded
//! twins for them (when built with the `idna` feature), so dropping the
//! Unicode originals here loses no matching power.

use psl_list::{SuffixEntry, SuffixSet};

/// Iterates over the entries whose labels are pure ASCII.
///
/// Order is preserved from the set, so records derived from this iterator
/// stay sorted most-labels-first.
///
/// # Examples
///
/// ```
/// use psl2rs::filter::ascii_entries;
/// use psl_list::SuffixSet;
///
/// let set = SuffixSet::parse("com\nco.uk\n");
/// let labels: Vec<_> = ascii_entries(&set).map(|e| e.label()).collect();
/// assert_eq!(labels, ["co.uk", "com"]);
/// ```
pub fn ascii_entries(set: &SuffixSet) -> impl Iterator<Item = &SuffixEntry> {
    set.entries().iter().filter(|entry| entry.label().is_ascii())
}
