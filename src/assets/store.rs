use super::snapshot::ReferenceSnapshot;
use crate::api::models::{DataDragonChampions, DataDragonItems, DataDragonSpells, RunePathInfo};
use crate::error::AppError;
use log::info;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Holds the current snapshot. Replacement swaps the whole `Arc`, so a reader
/// holding an older snapshot keeps a consistent view of it.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Option<Arc<ReferenceSnapshot>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: ReferenceSnapshot) -> Self {
        SnapshotStore {
            current: RwLock::new(Some(Arc::new(snapshot))),
        }
    }

    pub fn current(&self) -> Option<Arc<ReferenceSnapshot>> {
        // A poisoned lock still holds a whole snapshot.
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Swaps in a new snapshot, returning the previous one.
    pub fn replace(&self, snapshot: ReferenceSnapshot) -> Option<Arc<ReferenceSnapshot>> {
        let next = Some(Arc::new(snapshot));
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::replace(&mut *guard, next)
    }
}

/// Loads a snapshot from either a serialized snapshot file or a directory holding the
/// Data Dragon documents (`champion.json`, `item.json`, `summoner.json`,
/// `runesReforged.json`).
pub fn load_snapshot(path: &Path) -> Result<ReferenceSnapshot, AppError> {
    let snapshot = if path.is_dir() {
        ReferenceSnapshot::from_data_dragon(
            read_json::<DataDragonChampions>(&path.join("champion.json"))?,
            read_json::<DataDragonItems>(&path.join("item.json"))?,
            read_json::<DataDragonSpells>(&path.join("summoner.json"))?,
            read_json::<Vec<RunePathInfo>>(&path.join("runesReforged.json"))?,
        )
    } else {
        read_json::<ReferenceSnapshot>(path)?
    };

    info!(
        "loaded snapshot {} ({} champions, {} items, {} spells, {} runes)",
        snapshot.latest_version,
        snapshot.champions.len(),
        snapshot.items.len(),
        snapshot.summoner_spells.len(),
        snapshot.runes.len()
    );
    Ok(snapshot)
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::IoError {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content)
        .map_err(|e| AppError::JsonError(format!("Failed to parse {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versioned(version: &str) -> ReferenceSnapshot {
        ReferenceSnapshot {
            latest_version: version.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_store_has_no_snapshot() {
        assert!(SnapshotStore::new().current().is_none());
    }

    #[test]
    fn replace_is_wholesale_and_old_readers_keep_their_view() {
        let store = SnapshotStore::with_snapshot(versioned("14.9.1"));
        let held = store.current().unwrap();

        let previous = store.replace(versioned("14.10.1")).unwrap();

        assert_eq!(previous.latest_version, "14.9.1");
        assert_eq!(held.latest_version, "14.9.1");
        assert_eq!(store.current().unwrap().latest_version, "14.10.1");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_snapshot(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, AppError::IoError { .. }));
    }
}
