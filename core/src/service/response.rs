//! User-facing wording for command results.

use std::fmt;

use crate::model::task::Task;

pub const EXIT_MESSAGE: &str = "Bye. Hope to see you again soon!";
pub const UNKNOWN_COMMAND_MESSAGE: &str = "No such command!";

pub fn add_task_success(task: impl fmt::Display, task_count: usize) -> String {
    format!(
        "Got it. I've added this task: {}\nNow you have {} tasks in the list.",
        task, task_count
    )
}

pub fn remove_task_success(task: impl fmt::Display, task_count: usize) -> String {
    format!(
        "Noted. I've removed this task: {}\nNow you have {} tasks in the list.",
        task, task_count
    )
}

pub fn mark_task_success(task: impl fmt::Display) -> String {
    format!("Nice! I've marked this task as done:\n{}", task)
}

pub fn unmark_task_success(task: impl fmt::Display) -> String {
    format!("OK, I've marked this task as not done yet:\n{}", task)
}

/// Numbered listing starting at 1, one task per line.
pub fn task_list<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let lines: String = tasks
        .into_iter()
        .enumerate()
        .map(|(i, task)| format!("{}. {}\n", i + 1, task))
        .collect();
    if lines.is_empty() {
        "No tasks found".to_string()
    } else {
        lines
    }
}

pub fn search_result<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    format!("Here are the matching tasks in your list: \n{}", task_list(tasks))
}

pub fn sorted_list<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    format!("Your list have been sorted: \n{}", task_list(tasks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_list_numbering() {
        let tasks = vec![Task::todo("a"), Task::todo("b")];
        assert_eq!(task_list(&tasks), "1. [T][ ] a\n2. [T][ ] b\n");
    }

    #[test]
    fn test_task_list_empty() {
        assert_eq!(task_list(&Vec::<Task>::new()), "No tasks found");
        assert_eq!(
            search_result(Vec::<&Task>::new()),
            "Here are the matching tasks in your list: \nNo tasks found"
        );
    }

    #[test]
    fn test_add_message() {
        let task = Task::todo("buy milk");
        assert_eq!(
            add_task_success(&task, 1),
            "Got it. I've added this task: [T][ ] buy milk\nNow you have 1 tasks in the list."
        );
    }
}
