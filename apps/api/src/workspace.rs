//! Process-wide owner of the current resume and the builder session.
//!
//! Every mutation runs under one lock: the edit is computed from the current
//! aggregate, written through to the store, and only then published. A failed
//! write leaves both the published aggregate and the session untouched.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::builder::BuilderSession;
use crate::editor::EditError;
use crate::models::resume::ResumeData;
use crate::store::{ResumeStore, StoreError};

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A consistent copy of the aggregate and the session.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub data: ResumeData,
    pub session: BuilderSession,
}

/// Result of a successful commit. `changed` is false when the edit was a
/// no-op (nothing was written).
#[derive(Debug, Clone)]
pub struct Committed {
    pub data: ResumeData,
    pub session: BuilderSession,
    pub changed: bool,
}

struct Current {
    data: ResumeData,
    session: BuilderSession,
}

pub struct Workspace {
    store: Arc<dyn ResumeStore>,
    current: Mutex<Current>,
}

impl Workspace {
    /// Loads the stored aggregate, or starts from the default one.
    pub async fn open(store: Arc<dyn ResumeStore>) -> Result<Self, StoreError> {
        let data = match store.load().await? {
            Some(data) => data.normalized(),
            None => {
                info!("No stored resume, starting empty");
                ResumeData::default()
            }
        };
        let session = BuilderSession::new(&data);
        Ok(Self {
            store,
            current: Mutex::new(Current { data, session }),
        })
    }

    pub async fn snapshot(&self) -> Snapshot {
        let current = self.current.lock().await;
        Snapshot {
            data: current.data.clone(),
            session: current.session.clone(),
        }
    }

    pub async fn data(&self) -> ResumeData {
        self.current.lock().await.data.clone()
    }

    /// Applies a pure edit to the aggregate.
    pub async fn commit<F>(&self, edit: F) -> Result<Committed, WorkspaceError>
    where
        F: FnOnce(&ResumeData) -> Result<ResumeData, EditError>,
    {
        self.commit_with(|data, _| edit(data)).await
    }

    /// Applies an edit that may also adjust the session (e.g. select the entry
    /// it just added). Session changes are dropped if the edit fails.
    pub async fn commit_with<F>(&self, edit: F) -> Result<Committed, WorkspaceError>
    where
        F: FnOnce(&ResumeData, &mut BuilderSession) -> Result<ResumeData, EditError>,
    {
        let mut current = self.current.lock().await;
        let mut session = current.session.clone();
        let next = edit(&current.data, &mut session)?;

        let changed = next != current.data;
        if changed {
            self.store.save(&next).await?;
        }
        session.selections.reconcile(&next);

        current.data = next;
        current.session = session;
        debug!(changed, "Committed resume edit");
        Ok(Committed {
            data: current.data.clone(),
            session: current.session.clone(),
            changed,
        })
    }

    /// Runs `f` against the session only. Nothing is persisted.
    pub async fn with_session<T, F>(&self, f: F) -> (T, Snapshot)
    where
        F: FnOnce(&ResumeData, &mut BuilderSession) -> T,
    {
        let mut current = self.current.lock().await;
        let Current { data, session } = &mut *current;
        let out = f(data, session);
        (
            out,
            Snapshot {
                data: data.clone(),
                session: session.clone(),
            },
        )
    }

    /// Replaces the whole aggregate and restarts the builder session.
    pub async fn replace(&self, data: ResumeData) -> Result<Snapshot, StoreError> {
        let mut current = self.current.lock().await;
        self.store.save(&data).await?;
        current.session = BuilderSession::new(&data);
        current.data = data;
        info!("Replaced resume");
        Ok(Snapshot {
            data: current.data.clone(),
            session: current.session.clone(),
        })
    }

    /// Clears storage and returns to the default aggregate.
    pub async fn reset(&self) -> Result<Snapshot, StoreError> {
        let mut current = self.current.lock().await;
        self.store.clear().await?;
        current.data = ResumeData::default();
        current.session = BuilderSession::new(&current.data);
        info!("Reset resume to defaults");
        Ok(Snapshot {
            data: current.data.clone(),
            session: current.session.clone(),
        })
    }
}
