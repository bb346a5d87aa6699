use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid syntax for {command}: {detail}")]
    InvalidSyntax { command: String, detail: String },

    #[error("Invalid name `{0}`")]
    InvalidName(String),

    #[error("Table {0} does not exist")]
    TableNotFound(String),

    #[error("No database selected")]
    NoDatabaseSelected,

    #[error("Column count {columns} does not match value count {values}")]
    ColumnCountMismatch { columns: usize, values: usize },

    // The only error the command loop does not survive
    #[error("Failed to open database {name}: {source}")]
    OpenDatabase {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] fjall::Error),

    // Snapshot reads surface the tree's own error type
    #[error("Storage error: {0}")]
    Lsm(#[from] fjall::LsmError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::OpenDatabase { .. })
    }
}
