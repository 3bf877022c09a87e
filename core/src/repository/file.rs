use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::repository::traits::TaskStorage;

pub const DEFAULT_FILE_NAME: &str = "tasks.txt";
const DEFAULT_DIR_NAME: &str = ".taskbot";

/// Plain-text task file, one storage record per line.
#[derive(Debug, Clone)]
pub struct FileTaskStorage {
    file_path: PathBuf,
}

impl FileTaskStorage {
    /// Uses `base_dir/tasks.txt`, or `~/.taskbot/tasks.txt` when no directory is given.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        Self::with_file_name(base_dir, DEFAULT_FILE_NAME)
    }

    pub fn with_file_name(base_dir: Option<PathBuf>, file_name: &str) -> Result<Self> {
        let dir = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(DEFAULT_DIR_NAME)
            }
        };
        Ok(Self::at(dir.join(file_name)))
    }

    pub fn at(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl TaskStorage for FileTaskStorage {
    fn ensure_exists(&self) -> io::Result<()> {
        if self.file_path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        File::create(&self.file_path)?;
        log::info!("created task file at {}", self.file_path.display());
        Ok(())
    }

    fn read_all_text(&self) -> io::Result<String> {
        fs::read_to_string(&self.file_path)
    }

    fn write_all_text(&self, text: &str) -> io::Result<()> {
        self.ensure_exists()?;
        fs::write(&self.file_path, text)
    }
}
