//! Public Suffix List loading for the psl2rs precompiler.
//!
//! This crate parses `public_suffix_list.dat` into an ordered [`SuffixSet`]
//! of [`SuffixEntry`] rules with per-entry flags and aggregate counts. The
//! parser handles comment and blank lines, the ICANN/PRIVATE section markers,
//! and the exception (`!`) and wildcard (`*.`) rule prefixes. With the `idna`
//! feature enabled it also generates punycoded twin entries for non-ASCII
//! rules, so that an ASCII-only consumer can still match them.
//!
//! # Modules
//!
//! - [`entry`] - Suffix rules and their flag bitfield
//! - [`error`] - Load error types
//! - [`set`] - The parsed, ordered rule collection

pub mod entry;
pub mod error;
pub mod set;

pub use entry::{EntryFlags, SuffixEntry};
pub use error::{ListError, Result};
pub use set::SuffixSet;

/// Names the punycode backend compiled into the loader, if any.
///
/// Full source generation requires punycoded twins; when this returns `None`
/// the precompiler falls back to emitting a stub module.
///
/// # Examples
///
/// ```
/// if let Some(backend) = psl_list::unicode_backend() {
///     assert_eq!(backend, "idna");
/// }
/// ```
#[must_use]
pub fn unicode_backend() -> Option<&'static str> {
    if cfg!(feature = "idna") {
        Some("idna")
    } else {
        None
    }
}
