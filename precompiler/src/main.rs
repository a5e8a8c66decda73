//! Public Suffix List precompiler CLI entrypoint.
//!
//! This binary turns a `public_suffix_list.dat` into either a Rust source
//! module or a raw binary DAFSA file. It parses arguments, wires up the
//! system executor and the source assembler matching the compiled-in
//! punycode backend, and maps pipeline errors onto the documented exit
//! codes.

use clap::Parser;
use psl2rs::assembler;
use psl2rs::cli::Cli;
use psl2rs::error::Result;
use psl2rs::exec::SystemCommandExecutor;
use psl2rs::output::write_stderr_line;
use psl2rs::pipeline::{self, PipelineContext};
use std::io::Write;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit with status 1; --help and --version print to
            // stdout and exit with status 0.
            let _ = err.print();
            let code = if err.use_stderr() { 1 } else { 0 };
            std::process::exit(code);
        }
    };

    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

/// Runs the pipeline for the parsed arguments.
fn run(cli: &Cli, stderr: &mut dyn Write) -> Result<()> {
    let executor = SystemCommandExecutor;
    let assembler = assembler::select(psl_list::unicode_backend());
    let context = PipelineContext {
        input: &cli.infile,
        output: &cli.outfile,
        binary: cli.binary,
        executor: &executor,
        assembler: assembler.as_ref(),
    };
    pipeline::run(&context, stderr)
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, &err);
            err.exit_code()
        }
    }
}
