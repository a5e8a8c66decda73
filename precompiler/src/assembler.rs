//! Source artefact assembly.
//!
//! Source mode produces a Rust module: a generator header, the minimizer's
//! automaton text verbatim, then the seven provenance declarations. Which
//! strategy runs is fixed at startup from the loader's punycode backend:
//! with a backend the [`FullAssembler`] does the real work, without one the
//! [`StubAssembler`] emits a fixed placeholder so downstream compilation
//! still succeeds. Binary mode never touches this module.

use crate::checksum;
use crate::error::{PrecompileError, Result};
use crate::exec::CommandExecutor;
use crate::filter;
use crate::intermediate;
use crate::minimizer;
use crate::provenance::Provenance;
use camino::Utf8Path;
use psl_list::SuffixSet;
use std::fs::File;
use std::io::{BufWriter, Write};

/// One source-mode assembly request.
pub struct AssemblyJob<'a> {
    /// Path of the suffix list file.
    pub input: &'a Utf8Path,
    /// Path of the Rust module to generate.
    pub output: &'a Utf8Path,
    /// Executor for the minimizer and checksum subprocesses.
    pub executor: &'a dyn CommandExecutor,
}

/// Strategy for producing the source artefact.
pub trait SourceAssembler {
    /// Assembles the output module for the job.
    ///
    /// # Errors
    ///
    /// Returns [`PrecompileError::Load`] when the suffix list cannot be
    /// read, [`PrecompileError::Intermediate`] when a scratch file fails,
    /// and the `Output*` variants for failures on the output file itself.
    fn assemble(&self, job: &AssemblyJob<'_>, stderr: &mut dyn Write) -> Result<()>;
}

/// Full assembly: load, filter, minimize, embed, append provenance.
#[derive(Debug)]
pub struct FullAssembler {
    backend: &'static str,
}

/// Placeholder assembly for builds without punycode support.
///
/// Never loads the input file; the emitted module carries an empty automaton
/// and zeroed metadata.
#[derive(Debug)]
pub struct StubAssembler;

/// Picks the assembler matching the loader's punycode backend.
#[must_use]
pub fn select(backend: Option<&'static str>) -> Box<dyn SourceAssembler> {
    match backend {
        Some(backend) => Box::new(FullAssembler { backend }),
        None => Box::new(StubAssembler),
    }
}

const STUB_MODULE: &str = concat!(
    "// automatically generated by psl2rs (builtin DAFSA generation disabled)\n",
    "pub static DAFSA: [u8; 0] = [];\n",
    "pub static PSL_FILE_TIME: i64 = 0;\n",
    "pub static PSL_COMPILE_TIME: i64 = 0;\n",
    "pub static PSL_NSUFFIXES: u32 = 0;\n",
    "pub static PSL_NEXCEPTIONS: u32 = 0;\n",
    "pub static PSL_NWILDCARDS: u32 = 0;\n",
    "pub static PSL_SHA1_CHECKSUM: &str = \"\";\n",
    "pub static PSL_FILENAME: &str = \"\";\n",
);

impl SourceAssembler for FullAssembler {
    fn assemble(&self, job: &AssemblyJob<'_>, stderr: &mut dyn Write) -> Result<()> {
        // The list must load before the output file is created, so a bad
        // input never leaves a half-written artefact behind.
        let set = SuffixSet::load(job.input)?;
        let mut writer = open_output(job.output)?;

        let header = format!(
            "// automatically generated by psl2rs (punycode generated with {})\n",
            self.backend
        );
        write_output(&mut writer, job.output, &header)?;

        let records = intermediate::write_records(filter::ascii_entries(&set))?;
        let automaton = minimizer::generate_source(job.executor, records.path(), stderr)?;
        drop(records);
        write_output(&mut writer, job.output, &automaton)?;

        let digest = checksum::source_checksum(job.executor, job.input);
        let provenance = Provenance::collect(job.input, &set, digest, stderr);
        write_output(&mut writer, job.output, &provenance.render())?;

        finish_output(writer, job.output)
    }
}

impl SourceAssembler for StubAssembler {
    fn assemble(&self, job: &AssemblyJob<'_>, _stderr: &mut dyn Write) -> Result<()> {
        let mut writer = open_output(job.output)?;
        write_output(&mut writer, job.output, STUB_MODULE)?;
        finish_output(writer, job.output)
    }
}

fn open_output(path: &Utf8Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| PrecompileError::OutputOpen {
        path: path.to_owned(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

fn write_output(writer: &mut BufWriter<File>, path: &Utf8Path, text: &str) -> Result<()> {
    writer
        .write_all(text.as_bytes())
        .map_err(|source| PrecompileError::OutputWrite {
            path: path.to_owned(),
            source,
        })
}

fn finish_output(writer: BufWriter<File>, path: &Utf8Path) -> Result<()> {
    writer
        .into_inner()
        .map_err(|err| PrecompileError::OutputClose {
            path: path.to_owned(),
            source: err.into_error(),
        })?;
    Ok(())
}
