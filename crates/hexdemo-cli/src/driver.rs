//! Feeds input lines to a [`Session`] and writes what the user should see.

use std::io::{self, BufRead, Write};

use tracing::{debug, info_span};

use crate::parse::parse_line;
use crate::render::{ops_table, render_session, reply_text};
use crate::session::{Reply, Session};

const INVALID_UTF8: &str = "line is not valid UTF-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverMode {
    /// Prompt before each line and redraw the stores after every operation.
    Interactive,
    /// Print replies only; failures are prefixed with their line number.
    Script,
}

/// A command line that could not be parsed or executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub commands: usize,
    pub failures: Vec<LineFailure>,
    pub quit: bool,
}

/// Process `input` until it ends or a `quit` command is read.
///
/// Only I/O errors abort the run; bad commands, undecodable lines and store
/// failures are reported and the loop continues.
pub fn run_lines<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    mode: DriverMode,
) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();
    loop {
        if mode == DriverMode::Interactive {
            write!(out, "> ")?;
            out.flush()?;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        summary.lines += 1;
        let number = summary.lines;
        let span = info_span!("line", number);
        let _guard = span.enter();

        let Ok(line) = std::str::from_utf8(&buf) else {
            report_failure(out, mode, &mut summary, INVALID_UTF8.to_string())?;
            continue;
        };
        let command = match parse_line(line.trim_end_matches(['\n', '\r'])) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                report_failure(out, mode, &mut summary, error.to_string())?;
                continue;
            }
        };
        summary.commands += 1;
        debug!(?command, "parsed command");
        match session.execute(&command) {
            Ok(Reply::Quit) => {
                summary.quit = true;
                break;
            }
            Ok(Reply::Show) => write!(out, "{}", render_session(session))?,
            Ok(Reply::Ops) => writeln!(out, "{}", ops_table())?,
            Ok(reply) => {
                if let Some(text) = reply_text(&reply) {
                    writeln!(out, "{text}")?;
                }
                if mode == DriverMode::Interactive && matches!(reply, Reply::Ran { .. }) {
                    write!(out, "{}", render_session(session))?;
                }
            }
            Err(error) => report_failure(out, mode, &mut summary, error.to_string())?,
        }
    }
    Ok(summary)
}

fn report_failure<W: Write>(
    out: &mut W,
    mode: DriverMode,
    summary: &mut RunSummary,
    message: String,
) -> io::Result<()> {
    let line = summary.lines;
    match mode {
        DriverMode::Interactive => writeln!(out, "error: {message}")?,
        DriverMode::Script => writeln!(out, "line {line}: error: {message}")?,
    }
    summary.failures.push(LineFailure { line, message });
    Ok(())
}
