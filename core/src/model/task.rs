use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDateTime;

use crate::error::DateFormatError;
use crate::time::{parse_date_time, to_display_text, to_storage_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline {
        due: NaiveDateTime,
    },
    // `end` is not checked against `start`.
    Event {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl TaskKind {
    pub fn tag(&self) -> &'static str {
        match self {
            TaskKind::Todo => "T",
            TaskKind::Deadline { .. } => "D",
            TaskKind::Event { .. } => "E",
        }
    }
}

/// A single entry of the task list.
///
/// Name and dates are fixed at construction; only the done flag changes.
#[derive(Debug, PartialEq, Eq)]
pub struct Task {
    name: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(name: impl Into<String>) -> Self {
        Self::with_kind(name, TaskKind::Todo)
    }

    pub fn deadline(name: impl Into<String>, due: &str) -> Result<Self, DateFormatError> {
        let due = parse_date_time(due)?;
        Ok(Self::with_kind(name, TaskKind::Deadline { due }))
    }

    pub fn event(name: impl Into<String>, start: &str, end: &str) -> Result<Self, DateFormatError> {
        let start = parse_date_time(start)?;
        let end = parse_date_time(end)?;
        Ok(Self::with_kind(name, TaskKind::Event { start, end }))
    }

    fn with_kind(name: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            name: name.into(),
            done: false,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_not_done(&mut self) {
        self.done = false;
    }

    /// The instant used for chronological ordering: due date for deadlines,
    /// end time for events, nothing for todos.
    pub fn anchor(&self) -> Option<NaiveDateTime> {
        match self.kind {
            TaskKind::Todo => None,
            TaskKind::Deadline { due } => Some(due),
            TaskKind::Event { end, .. } => Some(end),
        }
    }

    pub fn is_name_match(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(&keyword.to_lowercase())
    }

    /// One pipe-delimited storage line, newline included.
    pub fn to_storage_record(&self) -> String {
        let done = if self.done { "1" } else { "0" };
        let mut record = format!("{} | {} | {}", self.kind.tag(), done, self.name);
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { due } => {
                record.push_str(" | ");
                record.push_str(&to_storage_text(due));
            }
            TaskKind::Event { start, end } => {
                record.push_str(" | ");
                record.push_str(&to_storage_text(start));
                record.push_str(" | ");
                record.push_str(&to_storage_text(end));
            }
        }
        record.push('\n');
        record
    }

    pub fn compare_by_name(&self, other: &Task) -> Ordering {
        self.name.cmp(&other.name)
    }

    /// Todos sort before dated tasks and tie with each other; dated tasks
    /// compare by anchor.
    pub fn compare_by_date(&self, other: &Task) -> Ordering {
        match (self.anchor(), other.anchor()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.cmp(&b),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.done { "X" } else { " " };
        write!(f, "[{}][{}] {}", self.kind.tag(), status, self.name)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", to_display_text(due)),
            TaskKind::Event { start, end } => write!(
                f,
                " (from: {}, to: {})",
                to_display_text(start),
                to_display_text(end)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_display_and_record() {
        let mut task = Task::todo("buy milk");
        assert_eq!(task.to_string(), "[T][ ] buy milk");
        assert_eq!(task.to_storage_record(), "T | 0 | buy milk\n");

        task.mark_done();
        assert_eq!(task.to_string(), "[T][X] buy milk");
        assert_eq!(task.to_storage_record(), "T | 1 | buy milk\n");
    }

    #[test]
    fn test_deadline_display_and_record() {
        let task = Task::deadline("submit report", "23-09-2025 2359").unwrap();
        assert_eq!(task.to_string(), "[D][ ] submit report (by: 23 Sep 25 23:59)");
        assert_eq!(
            task.to_storage_record(),
            "D | 0 | submit report | 23-09-2025 2359\n"
        );
    }

    #[test]
    fn test_event_display_and_record() {
        let task = Task::event("Earnings Call", "30-08-2025 0000", "30/08/2025 2359").unwrap();
        assert_eq!(
            task.to_string(),
            "[E][ ] Earnings Call (from: 30 Aug 25 00:00, to: 30 Aug 25 23:59)"
        );
        assert_eq!(
            task.to_storage_record(),
            "E | 0 | Earnings Call | 30-08-2025 0000 | 30-08-2025 2359\n"
        );
    }

    #[test]
    fn test_bad_dates_propagate() {
        assert!(Task::deadline("x", "next week").is_err());
        assert!(Task::event("x", "01-01-2025", "soon").is_err());
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut task = Task::todo("a");
        task.mark_not_done();
        assert!(!task.is_done());
        task.mark_done();
        task.mark_done();
        assert!(task.is_done());
    }

    #[test]
    fn test_compare_by_name_is_case_sensitive() {
        let upper = Task::todo("Zebra");
        let lower = Task::todo("apple");
        assert_eq!(upper.compare_by_name(&lower), Ordering::Less);
    }

    #[test]
    fn test_compare_by_date() {
        let todo = Task::todo("t");
        let other_todo = Task::todo("u");
        let early = Task::deadline("d", "01-01-2025").unwrap();
        let late_event = Task::event("e", "01-01-2020", "02-01-2025").unwrap();

        assert_eq!(todo.compare_by_date(&other_todo), Ordering::Equal);
        assert_eq!(todo.compare_by_date(&early), Ordering::Less);
        assert_eq!(early.compare_by_date(&todo), Ordering::Greater);
        // Events are anchored on their end, the early start is ignored.
        assert_eq!(early.compare_by_date(&late_event), Ordering::Less);
        assert_eq!(late_event.compare_by_date(&early), Ordering::Greater);
    }

    #[test]
    fn test_is_name_match_ignores_case() {
        let task = Task::todo("Read Book");
        assert!(task.is_name_match("book"));
        assert!(task.is_name_match("READ"));
        assert!(!task.is_name_match("film"));
    }
}
