use crate::db::result::QueryResult;
use crate::db::session::Session;
use crate::error::Result;
use crate::interpreter::run_sql;
use std::io::{BufRead, Write};

pub mod table;

pub const PROMPT: &str = "> ";

/// Whether the loop should keep reading after a line.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum LineOutcome {
    Continue,
    Exit,
}

/// Reads statements line by line until EXIT or end of input. Returns the error
/// that ended the session early, if any.
pub fn cli(session: &mut Session, mut input: impl BufRead, output: &mut impl Write) -> Result<()> {
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            session.close()?;
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }
        if execute_line(session, &line, output)? == LineOutcome::Exit {
            return Ok(());
        }
    }
}

/// Runs every statement on the line and prints each outcome. Per-statement
/// errors are printed; a fatal one is returned.
pub fn execute_line(
    session: &mut Session,
    line: &str,
    output: &mut impl Write,
) -> Result<LineOutcome> {
    for result in run_sql(session, line) {
        match result {
            Ok(QueryResult::Rows(result_set)) => {
                writeln!(output, "{}", table::format_table(&result_set))?
            }
            Ok(QueryResult::Message(message)) => writeln!(output, "{}", message)?,
            Ok(QueryResult::Exit) => return Ok(LineOutcome::Exit),
            Err(error) if error.is_fatal() => return Err(error),
            Err(error) => writeln!(output, "Error: {}", error)?,
        }
    }
    Ok(LineOutcome::Continue)
}
