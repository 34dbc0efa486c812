//! Interactive prompt.

use lispy_eval::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const LANGUAGE_VERSION: &str = "0.0.0.1.0";
const PROMPT: &str = "lispy> ";

/// Read, evaluate and print until end of input.
///
/// Ctrl+C abandons the current line; Ctrl+D leaves the loop.
pub fn run(interp: &Interpreter) -> rustyline::Result<()> {
    print_banner();

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                println!("{}", eval_line(interp, &line));
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn print_banner() {
    println!("Lispy Version {LANGUAGE_VERSION}");
    println!("Press Ctrl+c to Exit");
    println!();
}

/// Evaluate one line as a single S-expression and render the outcome.
pub fn eval_line(interp: &Interpreter, line: &str) -> String {
    match interp.eval_source("<stdin>", line) {
        Ok(value) => value.to_string(),
        Err(err) => err.to_string(),
    }
}
