pub mod command;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use command::{Command, Response};
pub use error::{DateFormatError, RecordFault, TaskError};
pub use input::parse_command;
pub use model::strategy::SortStrategy;
pub use model::task::{Task, TaskKind};
pub use repository::{FileTaskStorage, TaskStorage};
pub use service::dto::TaskDto;
pub use service::task_list::TaskList;
pub use time::{parse_date_time, to_display_text, to_storage_text};
pub use usecase::session::Session;
