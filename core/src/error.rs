use std::io;

use thiserror::Error;

use crate::time::supported_patterns;

/// Raised when a date string matches none of the accepted patterns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Invalid date string format! Ensure date is in these supported format:\n{}",
    pattern_list()
)]
pub struct DateFormatError {
    pub input: String,
}

fn pattern_list() -> String {
    supported_patterns().collect::<Vec<_>>().join("\n")
}

/// Why a stored line could not be turned back into a task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordFault {
    #[error("expected at least 3 fields")]
    TooFewFields,

    #[error("unknown task type '{0}'")]
    UnknownTag(String),

    #[error("type '{tag}' takes {expected} fields, found {found}")]
    FieldCount {
        tag: String,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Date(#[from] DateFormatError),
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    DateFormat(#[from] DateFormatError),

    /// A 1-based task number outside `1..=size`.
    #[error("Invalid task number")]
    Index { index: usize, size: usize },

    /// Malformed command shape; the payload is the usage hint.
    #[error("Invalid Command: {0}")]
    InvalidCommand(String),

    #[error("Invalid task format in file: {line}\n{fault}")]
    MalformedRecord { line: String, fault: RecordFault },

    #[error("Storage error: {0}")]
    Storage(#[from] io::Error),
}

impl TaskError {
    pub fn invalid_command(hint: impl Into<String>) -> Self {
        TaskError::InvalidCommand(hint.into())
    }

    pub fn malformed(line: &str, fault: impl Into<RecordFault>) -> Self {
        TaskError::MalformedRecord {
            line: line.to_string(),
            fault: fault.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_format_error_lists_patterns() {
        let err = DateFormatError { input: "23.09.2025".to_string() };
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid date string format!"));
        for pattern in supported_patterns() {
            assert!(msg.contains(pattern), "missing {}", pattern);
        }
    }

    #[test]
    fn test_index_error_message() {
        let err = TaskError::Index { index: 5, size: 3 };
        assert_eq!(err.to_string(), "Invalid task number");
    }

    #[test]
    fn test_malformed_record_with_date_fault_keeps_pattern_hint() {
        let err = TaskError::malformed(
            "D | 0 | homework | 23.09.2025 2359",
            DateFormatError { input: "23.09.2025 2359".to_string() },
        );
        let msg = err.to_string();
        assert!(msg.contains("D | 0 | homework | 23.09.2025 2359"));
        assert!(msg.contains("dd-mm-yyyy HHmm"));
    }
}
