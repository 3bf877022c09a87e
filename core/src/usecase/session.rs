use crate::command::{Command, Response};
use crate::error::{Result, TaskError};
use crate::input::parse_command;
use crate::model::task::Task;
use crate::repository::codec;
use crate::repository::TaskStorage;
use crate::service::task_list::TaskList;

/// The read-execute-persist step behind every front-end.
///
/// Owns the task list and the storage it is saved to. A front-end feeds it
/// lines and shows the returned [`Response`] until `exit` is set.
pub struct Session<S: TaskStorage> {
    tasks: TaskList,
    storage: S,
    load_error: Option<TaskError>,
}

impl<S: TaskStorage> Session<S> {
    /// Loads the stored tasks. If any line cannot be read back the session
    /// starts empty and the error is kept for [`Session::load_error`].
    pub fn open(storage: S) -> Self {
        let (tasks, load_error) = match load(&storage) {
            Ok(tasks) => {
                log::info!("loaded {} tasks", tasks.len());
                (TaskList::from(tasks), None)
            }
            Err(err) => {
                log::warn!("starting with an empty list: {}", err);
                (TaskList::new(), Some(err))
            }
        };

        Self {
            tasks,
            storage,
            load_error,
        }
    }

    pub fn handle(&mut self, line: &str) -> Response {
        match parse_command(line) {
            Ok(command) => self.dispatch(command),
            Err(err) => {
                log::warn!("rejected input {:?}: {}", line, err);
                Response {
                    message: err.to_string(),
                    exit: false,
                }
            }
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Response {
        log::debug!("executing {:?} (saves: {})", command, command.is_mutating());
        let message = command.execute(&mut self.tasks, &self.storage);
        Response {
            message,
            exit: command.is_exit(),
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn load_error(&self) -> Option<&TaskError> {
        self.load_error.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn load<S: TaskStorage>(storage: &S) -> Result<Vec<Task>> {
    storage.ensure_exists()?;
    let text = storage.read_all_text()?;
    codec::decode(&text)
}
