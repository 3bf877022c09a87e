pub mod codec;
pub mod file;
pub mod traits;

// Re-export
pub use file::FileTaskStorage;
pub use traits::TaskStorage;
