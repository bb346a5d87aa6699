use fjall::PersistMode;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "Dbs";
pub const DATABASE_FILE_EXTENSION: &str = "db";

/// Settings shared by every database a session opens.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory holding one `<name>.db` keyspace per database
    pub data_dir: PathBuf,

    /// Durability applied after each committed statement
    pub persist_mode: PersistMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            persist_mode: PersistMode::SyncAll,
        }
    }
}

impl SessionConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_persist_mode(mut self, persist_mode: PersistMode) -> Self {
        self.persist_mode = persist_mode;
        self
    }

    pub fn database_path(&self, name: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", name, DATABASE_FILE_EXTENSION))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
