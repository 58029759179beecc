//! Line command parsing for the interactive shell.
//!
//! # Responsibility
//! - Turn one input line into a typed [`Command`].
//! - Report malformed input without touching task state.
//!
//! # Invariants
//! - Parsing is pure; title validation happens at the task boundary.
//! - Task positions are 1-based indexes into the unfiltered list.

use std::error::Error;
use std::fmt::{Display, Formatter};
use taskboard_core::{TaskFieldParseError, TaskFilter, TaskPriority, TaskStatus};

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        priority: TaskPriority,
        title: String,
        description: Option<String>,
    },
    List(TaskFilter),
    Cycle(usize),
    SetStatus(usize, TaskStatus),
    SetPriority(usize, TaskPriority),
    Rename(usize, String),
    Describe(usize, Option<String>),
    Delete(usize),
    Help,
    Quit,
}

/// Command parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidPosition(String),
    UnknownFilterKey(String),
    Field(TaskFieldParseError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(name) => {
                write!(f, "unknown command `{name}`; type `help` for commands")
            }
            Self::MissingArgument(what) => write!(f, "missing argument: {what}"),
            Self::InvalidPosition(value) => {
                write!(f, "invalid task number `{value}`; expected 1, 2, ...")
            }
            Self::UnknownFilterKey(key) => {
                write!(f, "unknown filter `{key}`; expected status=... or priority=...")
            }
            Self::Field(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskFieldParseError> for CommandError {
    fn from(value: TaskFieldParseError) -> Self {
        Self::Field(value)
    }
}

pub const HELP_TEXT: &str = "\
commands:
  add [low|medium|high] <title> [| description]
  list [status=todo|in-progress|done] [priority=low|medium|high]
  cycle <n>              advance status todo -> in-progress -> done -> todo
  status <n> <status>
  priority <n> <priority>
  rename <n> <title>
  describe <n> [text]    empty text clears the description
  delete <n>
  help
  quit";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = split_word(line);
    let command = match name {
        "add" => parse_add(rest)?,
        "list" | "ls" => Command::List(parse_filter(rest)?),
        "cycle" => Command::Cycle(parse_position(rest)?),
        "status" => {
            let (position, value) = position_and_rest(rest)?;
            let status = required(value, "status")?.parse::<TaskStatus>()?;
            Command::SetStatus(position, status)
        }
        "priority" => {
            let (position, value) = position_and_rest(rest)?;
            let priority = required(value, "priority")?.parse::<TaskPriority>()?;
            Command::SetPriority(position, priority)
        }
        "rename" => {
            let (position, title) = position_and_rest(rest)?;
            Command::Rename(position, title.to_string())
        }
        "describe" => {
            let (position, text) = position_and_rest(rest)?;
            let text = (!text.is_empty()).then(|| text.to_string());
            Command::Describe(position, text)
        }
        "delete" | "rm" => Command::Delete(parse_position(rest)?),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_add(rest: &str) -> Result<Command, CommandError> {
    let (head, description) = match rest.split_once('|') {
        Some((head, description)) => (head.trim(), Some(description.trim().to_string())),
        None => (rest.trim(), None),
    };

    let (first, remainder) = split_word(head);
    let (priority, title) = match first.parse::<TaskPriority>() {
        Ok(priority) if !remainder.is_empty() => (priority, remainder),
        _ => (TaskPriority::default(), head),
    };

    Ok(Command::Add {
        priority,
        title: title.to_string(),
        description,
    })
}

fn parse_filter(rest: &str) -> Result<TaskFilter, CommandError> {
    let mut filter = TaskFilter::all();
    for criterion in rest.split_whitespace() {
        match criterion.split_once('=') {
            Some(("status", value)) => filter.status = Some(value.parse()?),
            Some(("priority", value)) => filter.priority = Some(value.parse()?),
            _ => return Err(CommandError::UnknownFilterKey(criterion.to_string())),
        }
    }
    Ok(filter)
}

fn position_and_rest(rest: &str) -> Result<(usize, &str), CommandError> {
    let (position, remainder) = split_word(rest);
    Ok((parse_position(position)?, remainder))
}

fn parse_position(value: &str) -> Result<usize, CommandError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CommandError::MissingArgument("task number"));
    }
    match value.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(CommandError::InvalidPosition(value.to_string())),
    }
}

fn required<'a>(value: &'a str, what: &'static str) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument(what))
    } else {
        Ok(value)
    }
}

fn split_word(value: &str) -> (&str, &str) {
    let value = value.trim();
    match value.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (value, ""),
    }
}
