use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::models::resume::ResumeData;
use crate::store::{ResumeStore, StoreError};

/// Stores the aggregate as pretty-printed JSON at `path`.
///
/// Writes go to a temp file in the same directory which is then renamed over
/// the target, so a crash never leaves a half-written file behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where unreadable data is moved: `<path>.corrupt`.
    pub fn quarantine_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".corrupt");
        PathBuf::from(name)
    }

    async fn quarantine(&self, reason: &serde_json::Error) {
        let target = self.quarantine_path();
        warn!(
            "Stored resume at {} is unreadable ({reason}); moving it to {}",
            self.path.display(),
            target.display()
        );
        if let Err(e) = fs::rename(&self.path, &target).await {
            warn!("Failed to move unreadable resume aside: {e}");
        }
    }
}

#[async_trait]
impl ResumeStore for FileStore {
    async fn load(&self) -> Result<Option<ResumeData>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored resume at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        match serde_json::from_slice::<ResumeData>(&bytes) {
            Ok(data) => {
                info!("Loaded resume from {}", self.path.display());
                Ok(Some(data))
            }
            Err(e) => {
                self.quarantine(&e).await;
                Ok(None)
            }
        }
    }

    async fn save(&self, data: &ResumeData) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(data)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, &json)).await??;
        debug!("Saved resume to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                info!("Cleared stored resume at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent).map_err(|e| StoreError::io(&parent, e))?;

    let mut tmp = NamedTempFile::new_in(&parent).map_err(|e| StoreError::io(&parent, e))?;
    tmp.write_all(bytes)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| StoreError::io(path, e.error))?;
    Ok(())
}
