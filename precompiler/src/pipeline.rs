//! Pipeline orchestration for the two output modes.
//!
//! Source mode hands the whole job to the selected [`SourceAssembler`].
//! Binary mode is shorter: load the list, stage the ASCII records, and let
//! the minimizer write the artefact itself. No provenance is attached to
//! binary artefacts.

use crate::assembler::{AssemblyJob, SourceAssembler};
use crate::error::Result;
use crate::exec::CommandExecutor;
use crate::filter;
use crate::intermediate;
use crate::minimizer;
use camino::Utf8Path;
use psl_list::SuffixSet;
use std::io::Write;

/// Everything one precompiler run needs.
pub struct PipelineContext<'a> {
    /// Path of the suffix list file.
    pub input: &'a Utf8Path,
    /// Path of the artefact to generate.
    pub output: &'a Utf8Path,
    /// Whether to produce the binary artefact instead of Rust source.
    pub binary: bool,
    /// Executor for external commands.
    pub executor: &'a dyn CommandExecutor,
    /// Strategy for source-mode assembly.
    pub assembler: &'a dyn SourceAssembler,
}

/// Runs the pipeline for the selected mode.
///
/// # Errors
///
/// Propagates any fatal pipeline error; the caller maps it onto the process
/// exit status via [`crate::error::PrecompileError::exit_code`].
pub fn run(context: &PipelineContext<'_>, stderr: &mut dyn Write) -> Result<()> {
    if context.binary {
        return run_binary(context);
    }

    let job = AssemblyJob {
        input: context.input,
        output: context.output,
        executor: context.executor,
    };
    context.assembler.assemble(&job, stderr)
}

fn run_binary(context: &PipelineContext<'_>) -> Result<()> {
    let set = SuffixSet::load(context.input)?;
    let records = intermediate::write_records(filter::ascii_entries(&set))?;
    minimizer::generate_binary(context.executor, records.path(), context.output)
}
