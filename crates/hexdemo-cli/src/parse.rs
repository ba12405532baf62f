//! Line-oriented command language for driving a session.
//!
//! ```text
//! array insert 2        # run an array op, setting the spinner to 2 first
//! list add              # run a list op with the current spinner
//! spin -1
//! hex set B:blue
//! hex edit c #00ff00
//! hex null
//! show
//! ```

use hexdemo_model::{HexColor, HexItem, ModelError};
use hexdemo_store::{ArrayOp, ListOp};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Array { op: ArrayOp, arg: Option<i64> },
    List { op: ListOp, arg: Option<i64> },
    Spin(i64),
    Hex(HexCommand),
    Show,
    Ops,
    Help,
    Quit,
}

/// Edits to the selected item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexCommand {
    /// Replace the selection with a default item.
    New,
    /// Select nothing.
    Null,
    /// Change letter and optionally color of the current selection.
    Edit {
        text: String,
        color: Option<HexColor>,
    },
    /// Replace the selection with a parsed item.
    Set(HexItem),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("{0}")]
    UnknownOperation(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("not an integer: {0}")]
    InvalidNumber(String),
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error(transparent)]
    Item(#[from] ModelError),
}

/// Parse one input line. Blank lines and `#` comment lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let mut words = trimmed.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let command = match head.to_ascii_lowercase().as_str() {
        "array" | "a" => {
            let op = next_word(&mut words, "array operation")?
                .parse::<ArrayOp>()
                .map_err(CommandError::UnknownOperation)?;
            Command::Array {
                op,
                arg: optional_number(&mut words)?,
            }
        }
        "list" | "l" => {
            let op = next_word(&mut words, "list operation")?
                .parse::<ListOp>()
                .map_err(CommandError::UnknownOperation)?;
            Command::List {
                op,
                arg: optional_number(&mut words)?,
            }
        }
        "spin" => {
            let value = next_word(&mut words, "spinner value")?;
            Command::Spin(parse_number(value)?)
        }
        "hex" => Command::Hex(parse_hex(&mut words)?),
        "show" => Command::Show,
        "ops" => Command::Ops,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };
    if let Some(extra) = words.next() {
        return Err(CommandError::UnexpectedArgument(extra.to_string()));
    }
    Ok(Some(command))
}

fn parse_hex<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<HexCommand, CommandError> {
    let action = next_word(words, "hex action (new, null, edit, set)")?;
    match action.to_ascii_lowercase().as_str() {
        "new" => Ok(HexCommand::New),
        "null" | "none" => Ok(HexCommand::Null),
        "edit" => {
            let text = next_word(words, "letter")?.to_string();
            let color = words.next().map(str::parse::<HexColor>).transpose()?;
            Ok(HexCommand::Edit { text, color })
        }
        "set" => {
            let item = next_word(words, "item (e.g. B:blue)")?.parse::<HexItem>()?;
            Ok(HexCommand::Set(item))
        }
        other => Err(CommandError::UnknownCommand(format!("hex {other}"))),
    }
}

fn next_word<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<&'a str, CommandError> {
    words.next().ok_or(CommandError::MissingArgument(what))
}

fn optional_number<'a>(
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Option<i64>, CommandError> {
    words.next().map(parse_number).transpose()
}

fn parse_number(value: &str) -> Result<i64, CommandError> {
    value
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidNumber(value.to_string()))
}

pub const HELP: &str = "\
Commands:
  array <op> [n]     run an array operation (see `ops`); n sets the spinner
  list <op> [n]      run a list operation (see `ops`); n sets the spinner
  spin <n>           set the integer argument (clamped to -1..=100)
  hex new            select a new default item (A, gray)
  hex null           select no item
  hex edit <l> [c]   change the selected item's letter and color
  hex set <l[:c]>    select a specific item, e.g. `hex set B:blue`
  show               print both stores
  ops                list the operations of each store
  help               this text
  quit               leave the session";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# array clear"), Ok(None));
    }

    #[test]
    fn parses_store_operations() {
        assert_eq!(
            parse_line("array insert 3"),
            Ok(Some(Command::Array {
                op: ArrayOp::InsertAt,
                arg: Some(3)
            }))
        );
        assert_eq!(
            parse_line("LIST index-of"),
            Ok(Some(Command::List {
                op: ListOp::IndexOf,
                arg: None
            }))
        );
        assert_eq!(
            parse_line("a remove_shift -1"),
            Ok(Some(Command::Array {
                op: ArrayOp::RemoveAtAndShift,
                arg: Some(-1)
            }))
        );
    }

    #[test]
    fn parses_hex_edits() {
        assert_eq!(
            parse_line("hex edit q #0000ff"),
            Ok(Some(Command::Hex(HexCommand::Edit {
                text: "q".to_string(),
                color: Some(HexColor::rgb(0, 0, 255)),
            })))
        );
        assert_eq!(parse_line("hex null"), Ok(Some(Command::Hex(HexCommand::Null))));
    }

    #[test]
    fn reports_malformed_lines() {
        assert_eq!(
            parse_line("array add"),
            Err(CommandError::UnknownOperation(
                "unknown array operation: add".to_string()
            ))
        );
        assert_eq!(
            parse_line("spin many"),
            Err(CommandError::InvalidNumber("many".to_string()))
        );
        assert_eq!(
            parse_line("list get 1 2"),
            Err(CommandError::UnexpectedArgument("2".to_string()))
        );
        assert_eq!(
            parse_line("list"),
            Err(CommandError::MissingArgument("list operation"))
        );
        assert!(matches!(
            parse_line("hex set 1:red"),
            Err(CommandError::Item(ModelError::InvalidLetter(_)))
        ));
        assert_eq!(
            parse_line("frobnicate"),
            Err(CommandError::UnknownCommand("frobnicate".to_string()))
        );
    }
}
