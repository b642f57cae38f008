//! Persistence adapter for the resume aggregate.
//!
//! The aggregate is the only thing ever stored, so the port is three calls:
//! load-or-nothing, save, clear. `FileStore` keeps it as one JSON file;
//! `MemoryStore` keeps it in process.

pub mod file;
pub mod memory;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::resume::ResumeData;

pub use file::FileStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode resume: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Returns the stored aggregate, or `None` when nothing usable is stored.
    /// Unreadable data is treated as absent.
    async fn load(&self) -> Result<Option<ResumeData>, StoreError>;

    async fn save(&self, data: &ResumeData) -> Result<(), StoreError>;

    /// Removes the stored aggregate. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<(), StoreError>;
}
