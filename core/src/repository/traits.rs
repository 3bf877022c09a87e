use std::io;

/// Narrow storage port the session persists through.
///
/// Implementations are bound to one location; callers only deal in text.
pub trait TaskStorage {
    /// Creates the backing file (and any parent directories) if missing.
    fn ensure_exists(&self) -> io::Result<()>;
    fn read_all_text(&self) -> io::Result<String>;
    fn write_all_text(&self, text: &str) -> io::Result<()>;
}
