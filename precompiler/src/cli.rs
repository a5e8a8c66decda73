//! CLI argument definitions for the precompiler.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the main entrypoint to keep the binary small and focused on
//! orchestration.

use camino::Utf8PathBuf;
use clap::Parser;

/// Precompile the Public Suffix List into a DAFSA artefact.
#[derive(Parser, Debug)]
#[command(name = "psl2rs")]
#[command(version, about)]
#[command(long_about = concat!(
    "Precompile the Public Suffix List into a DAFSA artefact.\n\n",
    "By default a Rust source module is generated: the minimised automaton ",
    "produced by the external `psl-make-dafsa` tool, followed by provenance ",
    "metadata (timestamps, rule counts, checksum, and source path) that lets ",
    "a consumer detect a stale builtin list. With --binary the minimizer ",
    "writes a raw DAFSA byte file instead and no provenance is attached.\n\n",
    "The input must be a `public_suffix_list.dat`, lowercase UTF-8 encoded.",
))]
#[command(after_help = concat!(
    "EXIT CODES:\n",
    "  0  success\n",
    "  1  usage error\n",
    "  2  suffix list load failure, or minimizer failure in binary mode\n",
    "  3  intermediate or output file could not be opened\n",
    "  4  output file could not be written or closed\n\n",
    "ENVIRONMENT:\n",
    "  PSL_MAKE_DAFSA     minimizer program to invoke [default: psl-make-dafsa]\n",
    "  SOURCE_DATE_EPOCH  compile-time stamp for reproducible builds\n\n",
    "EXAMPLES:\n",
    "  Generate a Rust module:\n",
    "    $ psl2rs public_suffix_list.dat psl_data.rs\n\n",
    "  Generate a binary DAFSA file:\n",
    "    $ psl2rs --binary public_suffix_list.dat psl.dafsa\n\n",
    "For more information, see: https://github.com/leynos/psl2rs",
))]
pub struct Cli {
    /// Generate a binary DAFSA artefact instead of Rust source.
    #[arg(long)]
    pub binary: bool,

    /// The suffix list to precompile, lowercase UTF-8 encoded.
    #[arg(value_name = "INFILE")]
    pub infile: Utf8PathBuf,

    /// The artefact to generate from INFILE.
    #[arg(value_name = "OUTFILE")]
    pub outfile: Utf8PathBuf,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
