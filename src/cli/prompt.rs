use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const MENU_TITLE: &str = "Please select a workflow:";
pub const INVALID_SELECTION: &str = "Please enter a valid number";

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("No workflows available to select from")]
    NoWorkflows,

    #[error("Input closed before a workflow was selected")]
    EndOfInput,

    #[error("Failed to read selection")]
    Io(#[from] io::Error),
}

/// Print the numbered workflow menu, `[index] - name` per line
pub fn print_menu<W: Write>(names: &[String], out: &mut W) -> io::Result<()> {
    writeln!(out, "{MENU_TITLE}")?;
    for (index, name) in names.iter().enumerate() {
        writeln!(out, "[{index}] - {name}")?;
    }
    out.flush()
}

/// Read lines until one parses as the index of a non-empty workflow name.
///
/// Anything else prints a hint and asks again; only I/O failure or end of
/// input ends the loop without a selection.
pub fn select_workflow<R: BufRead, W: Write>(
    names: &[String],
    input: &mut R,
    out: &mut W,
) -> Result<String, SelectionError> {
    if names.is_empty() {
        return Err(SelectionError::NoWorkflows);
    }

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(SelectionError::EndOfInput);
        }

        let selected = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|index| names.get(index))
            .filter(|name| !name.is_empty());

        match selected {
            Some(name) => return Ok(name.clone()),
            None => {
                tracing::debug!(input = line.trim(), "Rejected workflow selection");
                writeln!(out, "{INVALID_SELECTION}")?;
                out.flush()?;
            }
        }
    }
}
