use crate::domain::plant::Plant;
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read state file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write state file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Everything that survives a restart: the collection plus the language
/// preference, written as one JSON document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub plants: Vec<Plant>,
    #[serde(default)]
    pub language: Language,
}

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the last snapshot. A missing file is a normal first run. A file
    /// that no longer parses is set aside as `.bak` so a later run never
    /// re-reads it, and the session starts empty.
    pub fn load(&self) -> Result<Snapshot, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Snapshot::default());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => Ok(snapshot),
            Err(err) => {
                let backup = self.path.with_extension("json.bak");
                warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    error = %err,
                    "state file is corrupt, setting it aside and starting empty"
                );
                if let Err(err) = fs::rename(&self.path, &backup) {
                    warn!(error = %err, "could not move the corrupt state file");
                }
                Ok(Snapshot::default())
            }
        }
    }

    /// Writes the snapshot through a sibling temp file and renames it into
    /// place, so a crash mid-write never truncates the previous state.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        let encoded = serde_json::to_vec_pretty(snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &encoded).map_err(|source| StorageError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plant::WateringInfo;
    use chrono::{TimeZone, Utc};

    fn sample() -> Snapshot {
        Snapshot {
            plants: vec![
                Plant::new("Monstera Deliciosa").with_watering(WateringInfo {
                    frequency_days: 7,
                    description: "Water weekly.".to_string(),
                }),
                {
                    let mut plant = Plant::new("Snake Plant");
                    plant.water(Utc.with_ymd_and_hms(2026, 8, 20, 9, 30, 0).unwrap());
                    plant
                },
            ],
            language: Language::Zh,
        }
    }

    #[test]
    fn round_trip_preserves_order_and_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("state.json"));

        let snapshot = sample();
        store.save(&snapshot).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn missing_file_is_an_empty_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("state.json"));
        assert_eq!(store.load().unwrap(), Snapshot::default());
    }

    #[test]
    fn corrupt_file_is_set_aside_and_the_session_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        let store = Store::new(&path);
        assert_eq!(store.load().unwrap(), Snapshot::default());
        assert!(!path.exists());
        assert!(path.with_extension("json.bak").exists());

        // The next load must not see the corrupt file again.
        assert_eq!(store.load().unwrap(), Snapshot::default());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("nested/deeper/state.json"));
        store.save(&Snapshot::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn watering_field_is_omitted_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("state.json"));
        store
            .save(&Snapshot {
                plants: vec![Plant::new("Fern")],
                language: Language::En,
            })
            .unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(!raw.contains("watering"));
    }
}
