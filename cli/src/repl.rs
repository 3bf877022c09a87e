use std::io::{self, BufRead, Write};

use anyhow::Result;
use taskbot_core::{Session, TaskStorage};

const SEPARATOR: &str = "____________________________________________________________";

/// Line-oriented prompt loop on stdin/stdout. Stops on `bye` or end of input.
pub fn run<S: TaskStorage>(session: &mut Session<S>, bot_name: &str) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(session, bot_name, stdin.lock(), stdout.lock())
}

fn run_with<S, R, W>(
    session: &mut Session<S>,
    bot_name: &str,
    input: R,
    mut out: W,
) -> Result<()>
where
    S: TaskStorage,
    R: BufRead,
    W: Write,
{
    if let Some(err) = session.load_error() {
        writeln!(out, "{}", err)?;
        writeln!(out, "{}", SEPARATOR)?;
    }

    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Hello! I'm {}", bot_name)?;
    writeln!(out, "What can I do for you?")?;
    writeln!(out, "{}", SEPARATOR)?;

    let mut lines = input.lines();
    loop {
        write!(out, "Enter your command: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            log::debug!("input closed");
            break;
        };
        writeln!(out, "{}", SEPARATOR)?;

        // The bad bytes are already consumed, so the next read starts on a fresh line.
        let line = match line {
            Ok(line) => line,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                log::warn!("skipping unreadable input line: {}", err);
                writeln!(out, "Could not read that line: {}", err)?;
                writeln!(out, "{}", SEPARATOR)?;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let response = session.handle(&line);
        writeln!(out, "{}", response.message.trim_end())?;
        writeln!(out, "{}", SEPARATOR)?;

        if response.exit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Cursor;

    #[derive(Default)]
    struct MemoryStorage {
        content: RefCell<String>,
    }

    impl TaskStorage for MemoryStorage {
        fn ensure_exists(&self) -> io::Result<()> {
            Ok(())
        }

        fn read_all_text(&self) -> io::Result<String> {
            Ok(self.content.borrow().clone())
        }

        fn write_all_text(&self, text: &str) -> io::Result<()> {
            *self.content.borrow_mut() = text.to_string();
            Ok(())
        }
    }

    fn transcript(input: &[u8]) -> (String, String) {
        let mut session = Session::open(MemoryStorage::default());
        let mut out = Vec::new();
        run_with(&mut session, "Bot", Cursor::new(input.to_vec()), &mut out).unwrap();
        let stored = session.storage().content.borrow().clone();
        (String::from_utf8(out).unwrap(), stored)
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_loop() {
        let (out, stored) = transcript(b"todo \xff\xfe\ntodo read\nbye\n");

        assert!(out.contains("Could not read that line"), "{}", out);
        assert!(out.contains("[T][ ] read"), "{}", out);
        assert!(out.contains("Bye. Hope to see you again soon!"), "{}", out);
        assert_eq!(stored, "T | 0 | read\n");
    }

    #[test]
    fn test_stops_on_bye_before_end_of_input() {
        let (out, stored) = transcript(b"bye\ntodo never\n");

        assert!(out.starts_with(SEPARATOR));
        assert!(out.contains("Hello! I'm Bot"));
        assert!(!out.contains("never"), "{}", out);
        assert!(stored.is_empty());
    }

    #[test]
    fn test_end_of_input_ends_loop() {
        let (out, _) = transcript(b"list\n");
        assert!(out.trim_end().ends_with("Enter your command:"), "{}", out);
    }
}
