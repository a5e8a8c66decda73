//! Public Suffix List precompiler library.
//!
//! This crate converts `public_suffix_list.dat` into a compact, embeddable
//! DAFSA artefact by driving an external minimizer program, under one of two
//! output contracts: a Rust source module carrying provenance metadata (the
//! default), or a raw binary blob written by the minimizer itself. It backs
//! the `psl2rs` CLI binary and can be consumed programmatically for testing
//! or custom build pipelines.
//!
//! # Modules
//!
//! - [`assembler`] - Source module assembly, full and stub variants
//! - [`checksum`] - Source checksum capture via the external sha1sum utility
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Semantic error types with process exit codes
//! - [`exec`] - Subprocess execution seam for external tools
//! - [`filter`] - Entry eligibility filtering for automaton encoding
//! - [`intermediate`] - Intermediate record serialisation for the minimizer
//! - [`minimizer`] - External DAFSA minimizer invocation
//! - [`output`] - Diagnostic output helpers
//! - [`pipeline`] - End-to-end generation pipelines
//! - [`provenance`] - Provenance metadata collection and rendering

pub mod assembler;
pub mod checksum;
pub mod cli;
pub mod error;
pub mod exec;
pub mod filter;
pub mod intermediate;
pub mod minimizer;
pub mod output;
pub mod pipeline;
pub mod provenance;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
