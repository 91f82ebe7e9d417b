use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};

mod logging;
mod runner;

use runner::RunError;

/// avm - typed stack machine
#[derive(Parser)]
#[command(name = "avm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Stack machine over typed numeric operands", long_about = "avm runs programs of stack instructions (push, pop, dump, assert,\nadd, sub, mul, div, mod, print, exit) over int8, int16, int32, float\nand double operands.\n\nWith no input file the program is read from stdin until a line\nstarting with ';;'.\n\nSubcommand names win over FILE: run a program file named 'run' or\n'check' as './run' or 'avm run run'.")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Program file to execute; reads stdin when omitted.
    /// A file named like a subcommand needs a path prefix (`./run`)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Increase log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a program file
    Run {
        /// Path to the program file
        file: String,
    },
    /// Parse a program and verify it has an exit, without executing it
    Check {
        /// File to check
        file: String,
        /// Print the parsed instructions as JSON
        #[arg(long)]
        json: bool,
    },
}

/// One parsed instruction in the `check --json` listing
#[derive(Serialize)]
struct ListingEntry<'a> {
    line: usize,
    #[serde(flatten)]
    instruction: &'a avm_parser::Instruction,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let outcome = match cli.command {
        Some(Commands::Run { file }) => run_command(Some(&file)),
        Some(Commands::Check { file, json }) => check_command(&file, json),
        None => run_command(cli.input.as_deref()),
    };

    if let Err(err) = outcome {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run_command(path: Option<&str>) -> anyhow::Result<()> {
    let source = match path {
        Some(path) => runner::read_file(path)?,
        None => runner::read_stream(io::stdin().lock())?,
    };

    let mut out = runner::run_source(&source, io::stdout().lock())?;
    writeln!(out, "Exiting program...").context("writing to stdout")?;
    Ok(())
}

fn check_command(path: &str, json: bool) -> anyhow::Result<()> {
    let source = runner::read_file(path)?;

    let program = avm_parser::parse_program(&source)
        .map_err(|(line, err)| RunError::Parse { line, source: err })?;

    if !avm_parser::contains_exit(&source) {
        return Err(RunError::NoExitInstruction.into());
    }

    if json {
        let listing: Vec<ListingEntry> = program
            .iter()
            .map(|(line, instruction)| ListingEntry {
                line: *line,
                instruction,
            })
            .collect();
        let text = serde_json::to_string_pretty(&listing).context("serializing instructions")?;
        println!("{}", text);
        return Ok(());
    }

    println!("✓ Syntax OK");
    println!("✓ Exit instruction present");
    println!("\nFile '{}' has {} instructions", path, program.len());
    Ok(())
}
