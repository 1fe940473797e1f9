//! Load/save policy at the persistence boundary
//!
//! Loading never fails: missing, unreadable or invalid data all produce the
//! default roster. Saving never fails either: errors are logged and dropped.

use super::SnapshotStore;
use crate::config::Rules;
use crate::roster::{Roster, RosterSnapshot};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Load the saved roster, or the default single-character roster
pub async fn load_roster(store: &dyn SnapshotStore, rules: &Rules) -> Roster {
    match store.load().await {
        Ok(Some(snapshot)) => match Roster::restore(snapshot, rules) {
            Ok(roster) => {
                tracing::debug!("Loaded roster with {} characters", roster.len());
                roster
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saved roster rejected, starting fresh");
                Roster::new(rules)
            }
        },
        Ok(None) => {
            tracing::debug!("No saved roster, starting fresh");
            Roster::new(rules)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Roster load failed, starting fresh");
            Roster::new(rules)
        }
    }
}

/// Save the roster; failures are logged only
pub async fn save_roster(store: &dyn SnapshotStore, roster: &Roster) {
    save_snapshot(store, &roster.snapshot()).await;
}

/// Fire-and-forget save on the tokio runtime
///
/// The snapshot is taken before spawning, so later edits don't leak into it.
pub fn spawn_save(store: Arc<dyn SnapshotStore>, roster: &Roster) -> JoinHandle<()> {
    let snapshot = roster.snapshot();
    tokio::spawn(async move {
        save_snapshot(store.as_ref(), &snapshot).await;
    })
}

async fn save_snapshot(store: &dyn SnapshotStore, snapshot: &RosterSnapshot) {
    match store.save(snapshot).await {
        Ok(()) => tracing::debug!("Saved roster with {} characters", snapshot.characters.len()),
        Err(e) => tracing::warn!(error = %e, "Roster save failed"),
    }
}
