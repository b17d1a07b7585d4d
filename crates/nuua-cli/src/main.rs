//! Driver binary: `parse -> compile -> finalize`, wiring `clap` argument
//! parsing around `nuua_core::parse` and `nuua_bytecode::compile`.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{arg, value_parser, ArgMatches, Command};

use nuua_core::journal::Journal;

fn command() -> ArgMatches {
    Command::new("nuua")
        .version("0.1.0")
        .author("Nuua Authors")
        .about("Compiles Nuua source into bytecode for the Nuua VM.")
        .arg(
            arg!(<INPUT> "Path to a source file")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(-o --out <OUTPUT_PATH> "Path to write the disassembly listing to.\n  Defaults to stdout")
                .required(false)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(arg!(--"dump-ast" "Print the parsed AST before compiling").required(false))
        .arg(arg!(--"dump-bytecode" "Print a disassembly listing of the compiled program").required(false))
        .get_matches()
}

fn main() -> ExitCode {
    let matches = command();

    let input = matches
        .get_one::<PathBuf>("INPUT")
        .expect("INPUT is required");

    let source = match fs::read_to_string(input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: could not read {}: {err}", input.display());
            return ExitCode::FAILURE;
        }
    };

    let mut journal = Journal::new();

    let statements = match nuua_core::parse(&source) {
        Ok(statements) => statements,
        Err(err) => {
            journal.error(&err);
            report(&journal);
            return ExitCode::FAILURE;
        }
    };

    if matches.get_flag("dump-ast") {
        println!("{statements:#?}");
    }

    let program = match nuua_bytecode::compile_ast(&statements) {
        Ok(program) => program,
        Err(err) => {
            journal.error(&err);
            report(&journal);
            return ExitCode::FAILURE;
        }
    };

    journal.success(format!("compiled {}", input.display()));

    if matches.get_flag("dump-bytecode") {
        let listing = nuua_bytecode::disassemble::disassemble(&program);
        match matches.get_one::<PathBuf>("out") {
            Some(path) => {
                if let Err(err) = fs::write(path, &listing) {
                    eprintln!("error: could not write {}: {err}", path.display());
                    return ExitCode::FAILURE;
                }
            }
            None => print!("{listing}"),
        }
    }

    report(&journal);
    ExitCode::SUCCESS
}

/// Renders every collected report to stderr. The emitter itself never
/// formats or transports diagnostics — this is the one place in the
/// workspace that does.
fn report(journal: &Journal) {
    for r in journal.reports() {
        eprintln!("{:?}: {}", r.report_type, r.message);
    }
}
