use crate::command::Command;
use crate::error::{Result, TaskError};
use crate::model::strategy::SortStrategy;
use crate::repository::codec::FIELD_SEPARATOR;

const FORMAT_HINT: &str = "Please ensure command is in this format: ";

const TODO_USAGE: &str = "todo <Task Name>";
const DEADLINE_USAGE: &str = "deadline <Task Name> /by <Date>";
const EVENT_USAGE: &str = "event <Task Name> /from <Start Date> /to <End Date>";
const MARK_USAGE: &str = "mark <Task Index>";
const UNMARK_USAGE: &str = "unmark <Task Index>";
const DELETE_USAGE: &str = "delete <Task Index>";
const FIND_USAGE: &str = "find <Search Keyword>";
const SORT_USAGE: &str = "sort name\nsort date";

/// Turns one line of user input into a [`Command`].
///
/// The first space separates the keyword from its arguments. Unknown keywords
/// yield [`Command::Invalid`]; a known keyword with malformed arguments is an
/// [`TaskError::InvalidCommand`] carrying the usage of that command.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(' ') {
        Some((keyword, rest)) => (keyword, Some(rest.trim()).filter(|r| !r.is_empty())),
        None => (line, None),
    };

    let command = match keyword {
        "bye" => Command::Exit,
        "list" => Command::List,
        "mark" => Command::Mark(parse_index(rest, MARK_USAGE)?),
        "unmark" => Command::Unmark(parse_index(rest, UNMARK_USAGE)?),
        "delete" => Command::Delete(parse_index(rest, DELETE_USAGE)?),
        "todo" => {
            let name = rest.ok_or_else(|| usage(TODO_USAGE))?;
            Command::AddTodo {
                name: parse_name(name, TODO_USAGE)?,
            }
        }
        "deadline" => {
            let (name, by) = split_pair(rest, " /by ", DEADLINE_USAGE)?;
            Command::AddDeadline {
                name: parse_name(name, DEADLINE_USAGE)?,
                by: by.to_string(),
            }
        }
        "event" => {
            let (name, dates) = split_pair(rest, " /from ", EVENT_USAGE)?;
            let (from, to) = split_pair(Some(dates), " /to ", EVENT_USAGE)?;
            Command::AddEvent {
                name: parse_name(name, EVENT_USAGE)?,
                from: from.to_string(),
                to: to.to_string(),
            }
        }
        "find" => Command::Find(rest.ok_or_else(|| usage(FIND_USAGE))?.to_string()),
        "sort" => {
            let strategy = rest
                .and_then(|r| r.parse::<SortStrategy>().ok())
                .ok_or_else(|| usage(SORT_USAGE))?;
            Command::Sort(strategy)
        }
        _ => Command::Invalid,
    };
    Ok(command)
}

fn usage(format: &str) -> TaskError {
    TaskError::invalid_command(format!("{}{}", FORMAT_HINT, format))
}

fn parse_index(rest: Option<&str>, format: &str) -> Result<usize> {
    match rest {
        Some(digits) if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => {
            digits.parse().map_err(|_| usage(format))
        }
        _ => Err(usage(format)),
    }
}

// Exactly one occurrence of `separator` is allowed, and neither side may be blank.
fn split_pair<'a>(
    rest: Option<&'a str>,
    separator: &str,
    format: &str,
) -> Result<(&'a str, &'a str)> {
    let rest = rest.ok_or_else(|| usage(format))?;
    let parts: Vec<&str> = rest.split(separator).collect();
    match parts.as_slice() {
        [left, right] if !left.trim().is_empty() && !right.trim().is_empty() => {
            Ok((left.trim(), right.trim()))
        }
        _ => Err(usage(format)),
    }
}

fn parse_name(name: &str, format: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(usage(format));
    }
    if name.contains(FIELD_SEPARATOR.trim()) {
        return Err(TaskError::invalid_command(format!(
            "Task name cannot contain '{}'",
            FIELD_SEPARATOR.trim()
        )));
    }
    // One record per line in storage.
    if name.chars().any(char::is_control) {
        return Err(TaskError::invalid_command(
            "Task name cannot contain line breaks or control characters",
        ));
    }
    Ok(name.to_string())
}
