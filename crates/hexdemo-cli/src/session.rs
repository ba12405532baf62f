//! Interactive session state: both stores plus the user's inputs.
//!
//! The session plays the part of the control panel. It owns the integer
//! argument (the "spinner") and the selected item, feeds them to the chosen
//! store operation, and folds results back into its own state the way the
//! panel would: reads replace the selection, counts and lookups land in the
//! spinner. Store failures are recorded as the status message and returned
//! to the caller; they never end the session.

use hexdemo_model::{HexItem, ModelError};
use hexdemo_store::{
    ArrayOp, ArrayStore, DEFAULT_CAPACITY, HexStore, ListOp, ListStore, Outcome, Slot, StoreError,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::parse::{Command, HexCommand};

pub const SPINNER_MIN: i64 = -1;
pub const SPINNER_MAX: i64 = 100;

/// Which store a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Array,
    List,
}

impl Panel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Array => "array",
            Panel::List => "list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{panel} {op}: {source}")]
    Store {
        panel: &'static str,
        op: &'static str,
        #[source]
        source: StoreError,
    },
    #[error(transparent)]
    Item(#[from] ModelError),
}

/// Startup settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// What a command produced, for the front end to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Ran {
        panel: Panel,
        op: &'static str,
        outcome: Outcome,
    },
    Selected(Option<HexItem>),
    Spinner(i64),
    Show,
    Ops,
    Help,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    array: ArrayStore,
    list: ListStore,
    spinner: i64,
    selected: Option<HexItem>,
    last_error: Option<String>,
}

/// Serializable view of a session, used for `--json` output and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub capacity: usize,
    pub array_count: usize,
    pub array: Vec<Slot>,
    pub list: Vec<Slot>,
    pub spinner: i64,
    pub selected: Option<HexItem>,
    pub last_error: Option<String>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            array: ArrayStore::new(config.capacity),
            list: ListStore::new(),
            spinner: 0,
            selected: Some(HexItem::default()),
            last_error: None,
        }
    }

    pub fn array(&self) -> &ArrayStore {
        &self.array
    }

    pub fn list(&self) -> &ListStore {
        &self.list
    }

    pub fn spinner(&self) -> i64 {
        self.spinner
    }

    pub fn selected(&self) -> Option<HexItem> {
        self.selected
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_spinner(&mut self, value: i64) -> i64 {
        self.spinner = value.clamp(SPINNER_MIN, SPINNER_MAX);
        self.spinner
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            capacity: self.array.capacity(),
            array_count: self.array.count(),
            array: self.array.entries().to_vec(),
            list: self.list.entries().to_vec(),
            spinner: self.spinner,
            selected: self.selected,
            last_error: self.last_error.clone(),
        }
    }

    /// Run one command against the session.
    ///
    /// On failure the store is left as it was and the error message becomes
    /// the session's status line.
    pub fn execute(&mut self, command: &Command) -> Result<Reply, SessionError> {
        let result = self.dispatch(command);
        if let Err(error) = &result {
            info!(%error, "command failed");
            self.last_error = Some(error.to_string());
        }
        result
    }

    fn dispatch(&mut self, command: &Command) -> Result<Reply, SessionError> {
        match command {
            Command::Array { op, arg } => {
                self.prepare(*arg);
                self.run_array(*op)
            }
            Command::List { op, arg } => {
                self.prepare(*arg);
                self.run_list(*op)
            }
            Command::Spin(value) => Ok(Reply::Spinner(self.set_spinner(*value))),
            Command::Hex(action) => self.edit_selection(action),
            Command::Show => Ok(Reply::Show),
            Command::Ops => Ok(Reply::Ops),
            Command::Help => Ok(Reply::Help),
            Command::Quit => Ok(Reply::Quit),
        }
    }

    fn prepare(&mut self, arg: Option<i64>) {
        self.last_error = None;
        if let Some(value) = arg {
            self.set_spinner(value);
        }
    }

    fn run_array(&mut self, op: ArrayOp) -> Result<Reply, SessionError> {
        let outcome = op
            .apply(&mut self.array, self.spinner, self.selected)
            .map_err(|source| SessionError::Store {
                panel: Panel::Array.as_str(),
                op: op.name(),
                source,
            })?;
        self.absorb(outcome);
        Ok(Reply::Ran {
            panel: Panel::Array,
            op: op.name(),
            outcome,
        })
    }

    fn run_list(&mut self, op: ListOp) -> Result<Reply, SessionError> {
        let outcome = op
            .apply(&mut self.list, self.spinner, self.selected)
            .map_err(|source| SessionError::Store {
                panel: Panel::List.as_str(),
                op: op.name(),
                source,
            })?;
        self.absorb(outcome);
        Ok(Reply::Ran {
            panel: Panel::List,
            op: op.name(),
            outcome,
        })
    }

    /// Fold an operation result back into the panel inputs.
    fn absorb(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Item(slot) => self.selected = slot,
            Outcome::Count(count) => {
                self.set_spinner(i64::try_from(count).unwrap_or(SPINNER_MAX));
            }
            Outcome::Index(index) => {
                self.set_spinner(index);
            }
            Outcome::Flag(_) | Outcome::Displaced(_) | Outcome::Done => {}
        }
        debug!(spinner = self.spinner, selected = ?self.selected, "panel updated");
    }

    fn edit_selection(&mut self, action: &HexCommand) -> Result<Reply, SessionError> {
        match action {
            HexCommand::New => self.selected = Some(HexItem::default()),
            HexCommand::Null => self.selected = None,
            HexCommand::Set(item) => self.selected = Some(*item),
            HexCommand::Edit { text, color } => {
                // Editing with nothing selected is a no-op.
                if let Some(current) = self.selected {
                    let mut edited = current;
                    edited.set_letter_from_text(text)?;
                    if let Some(color) = color {
                        edited.set_color(*color);
                    }
                    self.selected = Some(edited);
                }
            }
        }
        Ok(Reply::Selected(self.selected))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
