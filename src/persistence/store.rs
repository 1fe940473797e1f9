//! Snapshot stores

use crate::error::{BuildError, Result};
use crate::roster::RosterSnapshot;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Where roster snapshots are kept between sessions
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet
    async fn load(&self) -> Result<Option<RosterSnapshot>>;

    async fn save(&self, snapshot: &RosterSnapshot) -> Result<()>;
}

/// Process-local store holding the last saved snapshot as JSON
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RwLock<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw JSON, valid or not
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            saved: RwLock::new(Some(json.into())),
        }
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self) -> Result<Option<RosterSnapshot>> {
        match self.saved.read().await.as_deref() {
            Some(json) => Ok(Some(RosterSnapshot::from_json(json)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, snapshot: &RosterSnapshot) -> Result<()> {
        let json = snapshot.to_json()?;
        *self.saved.write().await = Some(json);
        Ok(())
    }
}

/// Snapshot kept in a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load(&self) -> Result<Option<RosterSnapshot>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => Ok(Some(RosterSnapshot::from_json(&json)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BuildError::from(e)),
        }
    }

    /// Writes beside the target and renames, so readers never see a torn file
    async fn save(&self, snapshot: &RosterSnapshot) -> Result<()> {
        let json = serde_json::to_vec_pretty(snapshot)?;
        let staging = self.staging_path();
        tokio::fs::write(&staging, json).await?;
        tokio::fs::rename(&staging, &self.path).await?;
        Ok(())
    }
}
