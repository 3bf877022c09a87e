use crate::error::Result;
use crate::model::strategy::SortStrategy;
use crate::repository::codec;
use crate::repository::TaskStorage;
use crate::service::response;
use crate::service::task_list::TaskList;

/// One parsed user instruction, consumed by a single execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTodo { name: String },
    AddDeadline { name: String, by: String },
    AddEvent { name: String, from: String, to: String },
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    List,
    Find(String),
    Sort(SortStrategy),
    Exit,
    Invalid,
}

/// What the presentation layer shows after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub message: String,
    pub exit: bool,
}

impl Command {
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Whether executing this command rewrites the storage file.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::AddTodo { .. }
                | Command::AddDeadline { .. }
                | Command::AddEvent { .. }
                | Command::Mark(_)
                | Command::Unmark(_)
                | Command::Delete(_)
                | Command::Sort(_)
        )
    }

    /// Runs the command and returns the message to show. Every domain error,
    /// including a failed save, ends up in the message.
    ///
    /// A mutation is kept in memory even when saving it fails.
    pub fn execute<S: TaskStorage + ?Sized>(&self, tasks: &mut TaskList, storage: &S) -> String {
        match self.run(tasks, storage) {
            Ok(message) => message,
            Err(err) => {
                log::warn!("{:?} failed: {}", self, err);
                err.to_string()
            }
        }
    }

    fn run<S: TaskStorage + ?Sized>(&self, tasks: &mut TaskList, storage: &S) -> Result<String> {
        match self {
            Command::AddTodo { name } => {
                let task = tasks.add_todo(name).to_string();
                save(tasks, storage)?;
                Ok(response::add_task_success(task, tasks.len()))
            }
            Command::AddDeadline { name, by } => {
                let task = tasks.add_deadline(name, by)?.to_string();
                save(tasks, storage)?;
                Ok(response::add_task_success(task, tasks.len()))
            }
            Command::AddEvent { name, from, to } => {
                let task = tasks.add_event(name, from, to)?.to_string();
                save(tasks, storage)?;
                Ok(response::add_task_success(task, tasks.len()))
            }
            Command::Mark(index) => {
                let task = tasks.mark_done(*index)?.to_string();
                save(tasks, storage)?;
                Ok(response::mark_task_success(task))
            }
            Command::Unmark(index) => {
                let task = tasks.mark_not_done(*index)?.to_string();
                save(tasks, storage)?;
                Ok(response::unmark_task_success(task))
            }
            Command::Delete(index) => {
                let task = tasks.remove(*index)?;
                save(tasks, storage)?;
                Ok(response::remove_task_success(&task, tasks.len()))
            }
            Command::List => Ok(response::task_list(tasks.tasks())),
            Command::Find(keyword) => Ok(response::search_result(tasks.search_by_name(keyword))),
            Command::Sort(strategy) => {
                tasks.sort(*strategy);
                save(tasks, storage)?;
                Ok(response::sorted_list(tasks.tasks()))
            }
            Command::Exit => Ok(response::EXIT_MESSAGE.to_string()),
            Command::Invalid => Ok(response::UNKNOWN_COMMAND_MESSAGE.to_string()),
        }
    }
}

// Rewrites the whole file from the in-memory list.
fn save<S: TaskStorage + ?Sized>(tasks: &TaskList, storage: &S) -> Result<()> {
    storage
        .write_all_text(&codec::encode(tasks.tasks()))
        .map_err(|err| {
            log::error!("failed to save {} tasks: {}", tasks.len(), err);
            err
        })?;
    log::debug!("saved {} tasks", tasks.len());
    Ok(())
}
