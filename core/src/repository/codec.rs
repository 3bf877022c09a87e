use crate::error::{RecordFault, Result, TaskError};
use crate::model::task::Task;

pub const FIELD_SEPARATOR: &str = " | ";

pub fn encode(tasks: &[Task]) -> String {
    tasks.iter().map(Task::to_storage_record).collect()
}

/// Decodes every non-empty line; the first bad line fails the whole decode.
pub fn decode(text: &str) -> Result<Vec<Task>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(decode_record)
        .collect()
}

pub fn decode_record(line: &str) -> Result<Task> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < 3 {
        return Err(TaskError::malformed(line, RecordFault::TooFewFields));
    }

    let tag = fields[0];
    let done = fields[1] == "1";
    let name = fields[2];

    let expected = match tag {
        "T" => 3,
        "D" => 4,
        "E" => 5,
        other => {
            return Err(TaskError::malformed(
                line,
                RecordFault::UnknownTag(other.to_string()),
            ));
        }
    };
    if fields.len() != expected {
        return Err(TaskError::malformed(
            line,
            RecordFault::FieldCount {
                tag: tag.to_string(),
                expected,
                found: fields.len(),
            },
        ));
    }

    let mut task = match tag {
        "D" => Task::deadline(name, fields[3]),
        "E" => Task::event(name, fields[3], fields[4]),
        _ => Ok(Task::todo(name)),
    }
    .map_err(|e| TaskError::malformed(line, e))?;

    if done {
        task.mark_done();
    }
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DateFormatError;

    #[test]
    fn test_decode_todo() {
        let task = decode_record("T | 1 | buy food").unwrap();
        assert_eq!(task.to_string(), "[T][X] buy food");
    }

    #[test]
    fn test_decode_deadline() {
        let task = decode_record("D | 0 | homework | 23-09-2025 2359").unwrap();
        assert_eq!(task, Task::deadline("homework", "23-09-2025 2359").unwrap());
    }

    #[test]
    fn test_decode_event() {
        let task =
            decode_record("E | 0 | Earnings Call | 30-08-2025 0000 | 30-08-2025 2359").unwrap();
        assert_eq!(
            task.to_string(),
            "[E][ ] Earnings Call (from: 30 Aug 25 00:00, to: 30 Aug 25 23:59)"
        );
    }

    #[test]
    fn test_decode_done_flag_only_one_means_done() {
        assert!(!decode_record("T | yes | a").unwrap().is_done());
        assert!(!decode_record("T | 0 | a").unwrap().is_done());
    }

    #[test]
    fn test_decode_unknown_tag() {
        let err = decode_record("I | 1 | buy food").unwrap_err();
        assert!(matches!(
            err,
            TaskError::MalformedRecord { fault: RecordFault::UnknownTag(ref t), .. } if t == "I"
        ));
        assert!(err.to_string().starts_with("Invalid task format in file: I | 1 | buy food"));
    }

    #[test]
    fn test_decode_too_few_fields() {
        let err = decode_record("T | 1").unwrap_err();
        assert!(matches!(
            err,
            TaskError::MalformedRecord { fault: RecordFault::TooFewFields, .. }
        ));
    }

    #[test]
    fn test_decode_missing_date_field() {
        let err = decode_record("E | 0 | trip | 01-01-2025 0000").unwrap_err();
        assert!(matches!(
            err,
            TaskError::MalformedRecord {
                fault: RecordFault::FieldCount { expected: 5, found: 4, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_decode_bad_date_lists_patterns() {
        let err = decode_record("D | 0 | homework | 23.09.2025 2359").unwrap_err();
        match &err {
            TaskError::MalformedRecord { line, fault } => {
                assert_eq!(line, "D | 0 | homework | 23.09.2025 2359");
                assert_eq!(
                    fault,
                    &RecordFault::Date(DateFormatError {
                        input: "23.09.2025 2359".to_string()
                    })
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("dd/mm/yyyy HHmm"));
    }

    #[test]
    fn test_decode_skips_blank_lines() {
        let tasks = decode("T | 0 | a\n\n   \nT | 1 | b\n").unwrap();
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn test_decode_fails_whole_text_on_one_bad_line() {
        assert!(decode("T | 0 | a\nX | 0 | b\n").is_err());
    }

    #[test]
    fn test_round_trip() {
        let mut done = Task::event("trip", "01-01-2025 0000", "02/01/2025").unwrap();
        done.mark_done();
        let tasks = vec![
            Task::todo("buy milk"),
            Task::deadline("submit report", "02 May 25 13:00").unwrap(),
            done,
        ];

        let text = encode(&tasks);
        assert_eq!(
            text,
            "T | 0 | buy milk\n\
             D | 0 | submit report | 02-05-2025 1300\n\
             E | 1 | trip | 01-01-2025 0000 | 02-01-2025 0000\n"
        );
        assert_eq!(decode(&text).unwrap(), tasks);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
        assert!(decode("").unwrap().is_empty());
    }
}
