use crate::error::{Result, TaskError};
use crate::model::strategy::{sort_tasks, SortStrategy};
use crate::model::task::Task;

/// Ordered, in-memory task collection addressed by 1-based task numbers.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_todo(&mut self, name: &str) -> &Task {
        self.push(Task::todo(name))
    }

    pub fn add_deadline(&mut self, name: &str, due: &str) -> Result<&Task> {
        let task = Task::deadline(name, due)?;
        Ok(self.push(task))
    }

    pub fn add_event(&mut self, name: &str, start: &str, end: &str) -> Result<&Task> {
        let task = Task::event(name, start, end)?;
        Ok(self.push(task))
    }

    fn push(&mut self, task: Task) -> &Task {
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn remove(&mut self, index: usize) -> Result<Task> {
        let position = self.position(index)?;
        Ok(self.tasks.remove(position))
    }

    pub fn mark_done(&mut self, index: usize) -> Result<&Task> {
        let position = self.position(index)?;
        self.tasks[position].mark_done();
        Ok(&self.tasks[position])
    }

    pub fn mark_not_done(&mut self, index: usize) -> Result<&Task> {
        let position = self.position(index)?;
        self.tasks[position].mark_not_done();
        Ok(&self.tasks[position])
    }

    // Maps a 1-based task number to a vector position.
    fn position(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.tasks.len() {
            return Err(TaskError::Index {
                index,
                size: self.tasks.len(),
            });
        }
        Ok(index - 1)
    }

    pub fn search_by_name(&self, keyword: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_name_match(keyword)).collect()
    }

    pub fn sort_by_name(&mut self) {
        self.sort(SortStrategy::Name);
    }

    pub fn sort_by_date(&mut self) {
        self.sort(SortStrategy::Date);
    }

    pub fn sort(&mut self, strategy: SortStrategy) {
        sort_tasks(&mut self.tasks, strategy);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}
