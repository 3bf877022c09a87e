pub mod dto;
pub mod response;
pub mod task_list;
