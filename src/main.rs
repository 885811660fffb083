use std::{env, io, path::PathBuf, time::Instant};

use clap::Parser;
use monkey::{display_error, lexer::lexer::Lexer, parser::parser::parse, repl};
use thiserror::Error;

#[derive(Debug, Error)]
enum CommandError {
    #[error("I/O error")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
    #[error("Detected one or more errors")]
    HasError,
}

/// Parses Monkey source files, or starts a prompt.
#[derive(Debug, Parser)]
#[clap(version)]
struct Cli {
    /// Print how long each file took to parse
    #[clap(long)]
    timings: bool,

    /// Files to parse. Starts an interactive prompt when none are given.
    files: Vec<PathBuf>,
}

fn main() -> Result<(), CommandError> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        let user = env::var("USER")
            .or_else(|_| env::var("USERNAME"))
            .unwrap_or_else(|_| String::from("there"));
        println!("Hello {}! This is the Monkey programming language!", user);
        println!("Feel free to type in commands");

        let stdin = io::stdin();
        repl::start(stdin.lock(), io::stdout())?;
        return Ok(());
    }

    let mut has_error = false;
    for file in &cli.files {
        let source = std::fs::read_to_string(file)?;

        let parse_start = Instant::now();
        let (parser, program) = parse(Lexer::new(
            source.clone(),
            Some(file.display().to_string()),
        ));

        if cli.timings {
            eprintln!("Parsed {} in {:?}", file.display(), parse_start.elapsed());
        }

        if parser.diagnostics().is_empty() {
            println!("{}", program);
            continue;
        }

        has_error = true;
        for error in parser.diagnostics() {
            eprint!("{}", display_error(error, &source));
        }
    }

    if has_error {
        return Err(CommandError::HasError);
    }
    Ok(())
}
