//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Task with ID {0} not found")]
    TaskNotFound(String),

    /// Backing file exists but its contents are not a valid task list.
    #[error("Tasks database is corrupted: {0}")]
    CorruptStore(String),

    /// Read or write I/O failure other than "file absent".
    #[error("Error accessing tasks database: {0}")]
    StorageUnavailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub(crate) fn storage(err: std::io::Error) -> Self {
        Self::StorageUnavailable(err.to_string())
    }

    pub(crate) fn corrupt(err: serde_json::Error) -> Self {
        Self::CorruptStore(err.to_string())
    }
}
