use std::collections::HashSet;
use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;

use super::Responder;

const WELCOME: &str = "Welcome to technical support.
Please tell us about your problem. Type 'bye' to leave.";
const GOODBYE: &str = "Nice talking to you. Bye...";
const PROMPT: &str = "> ";

/// Answers every input line until `bye` or end of input.
pub fn run(responder: &mut Responder, input: impl BufRead, mut output: impl Write) -> Result<()> {
    writeln!(output, "{WELCOME}")?;
    write!(output, "{PROMPT}")?;
    output.flush()?;
    for line in input.lines() {
        let line = line?;
        if line.trim() == "bye" {
            break;
        }
        let words = split_words(&line);
        debug!("Input words: {words:?}");
        let response = responder.respond(&words);
        if response.ends_with('\n') {
            write!(output, "{response}")?;
        } else {
            writeln!(output, "{response}")?;
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }
    writeln!(output, "{GOODBYE}")?;
    Ok(())
}

fn split_words(line: &str) -> HashSet<String> {
    line.split_whitespace().map(String::from).collect()
}
