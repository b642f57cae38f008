use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::resume::ResumeData;
use crate::store::{ResumeStore, StoreError};

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RwLock<Option<ResumeData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(data: ResumeData) -> Self {
        Self {
            slot: RwLock::new(Some(data)),
        }
    }
}

#[async_trait]
impl ResumeStore for MemoryStore {
    async fn load(&self) -> Result<Option<ResumeData>, StoreError> {
        Ok(self.slot.read().await.clone())
    }

    async fn save(&self, data: &ResumeData) -> Result<(), StoreError> {
        *self.slot.write().await = Some(data.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.slot.write().await = None;
        Ok(())
    }
}
