use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::task::{Task, TaskKind};

/// Flat, serializable view of a task for machine-readable listings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskDto {
    pub number: usize,
    pub kind: String,
    pub name: String,
    pub done: bool,
    pub due: Option<NaiveDateTime>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub display: String,
}

impl TaskDto {
    /// `number` is the 1-based position the task is addressed by.
    pub fn from_entity(task: &Task, number: usize) -> Self {
        let (kind, due, start, end) = match *task.kind() {
            TaskKind::Todo => ("todo", None, None, None),
            TaskKind::Deadline { due } => ("deadline", Some(due), None, None),
            TaskKind::Event { start, end } => ("event", None, Some(start), Some(end)),
        };

        Self {
            number,
            kind: kind.to_string(),
            name: task.name().to_string(),
            done: task.is_done(),
            due,
            start,
            end,
            display: task.to_string(),
        }
    }

    pub fn from_tasks(tasks: &[Task]) -> Vec<Self> {
        tasks
            .iter()
            .enumerate()
            .map(|(i, task)| Self::from_entity(task, i + 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tasks_numbers_from_one() {
        let tasks = vec![
            Task::todo("a"),
            Task::event("b", "01-01-2025", "02-01-2025 1200").unwrap(),
        ];
        let dtos = TaskDto::from_tasks(&tasks);

        assert_eq!(dtos[0].number, 1);
        assert_eq!(dtos[0].kind, "todo");
        assert_eq!(dtos[0].due, None);

        assert_eq!(dtos[1].number, 2);
        assert_eq!(dtos[1].kind, "event");
        assert_eq!(dtos[1].end, tasks[1].anchor());
        assert_eq!(dtos[1].display, "[E][ ] b (from: 01 Jan 25 00:00, to: 02 Jan 25 12:00)");
    }
}
