use std::io::{self, BufRead, Write};

use crate::{lexer::lexer::Lexer, parser::parser::parse};

const PROMPT: &str = ">> ";

/// Reads lines from `input` until it is exhausted, echoing each parsed
/// program (or its diagnostics) to `output`.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let (parser, program) = parse(Lexer::new(line, None));
        let errors = parser.errors();

        if errors.is_empty() {
            writeln!(output, "{}", program)?;
        } else {
            print_parser_errors(&mut output, &errors)?;
        }
    }
}

fn print_parser_errors<W: Write>(output: &mut W, errors: &[String]) -> io::Result<()> {
    writeln!(output, "parser errors:")?;
    for error in errors {
        writeln!(output, "\t{}", error)?;
    }
    Ok(())
}
