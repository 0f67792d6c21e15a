use crate::error::TfResult;
use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const PLAYERS_KEY: &str = "players";
pub const RESULT_KEY: &str = "result";
const KNOWN_KEYS: [&str; 2] = [PLAYERS_KEY, RESULT_KEY];

/// How long a snapshot stays readable when no TTL is given.
pub fn default_ttl() -> Duration {
    Duration::hours(24)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot<T> {
    pub data: T,
    pub expiry: DateTime<Utc>,
}

impl<T> Snapshot<T> {
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expiry
    }
}

/// One JSON file per key under `dir`, each holding the latest value only.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
    ttl: Duration,
}

impl SnapshotStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self::with_ttl(dir, default_ttl())
    }

    pub fn with_ttl<P: AsRef<Path>>(dir: P, ttl: Duration) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            ttl,
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    pub fn save<T: Serialize>(&self, key: &str, data: &T) -> TfResult<()> {
        fs::create_dir_all(&self.dir)?;
        let snapshot = Snapshot {
            data,
            expiry: Utc::now() + self.ttl,
        };
        fs::write(self.path(key), serde_json::to_string_pretty(&snapshot)?)?;
        debug!(key, expiry = %snapshot.expiry, "Snapshot saved");
        Ok(())
    }

    /// `None` when the key is missing. Expired or unreadable snapshots are
    /// deleted and also read as `None`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> TfResult<Option<T>> {
        let content = match fs::read_to_string(self.path(key)) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let snapshot: Snapshot<T> = match serde_json::from_str(&content) {
            Ok(s) => s,
            Err(e) => {
                warn!(key, error = %e, "Discarding unreadable snapshot");
                self.remove(key)?;
                return Ok(None);
            }
        };

        if snapshot.is_expired() {
            warn!(key, expiry = %snapshot.expiry, "Discarding expired snapshot");
            self.remove(key)?;
            return Ok(None);
        }

        Ok(Some(snapshot.data))
    }

    pub fn remove(&self, key: &str) -> TfResult<()> {
        match fs::remove_file(self.path(key)) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    /// Sweeps the known keys. Returns how many snapshots were removed.
    pub fn cleanup_expired(&self) -> TfResult<usize> {
        let mut removed = 0;
        for key in KNOWN_KEYS {
            let Ok(content) = fs::read_to_string(self.path(key)) else {
                continue;
            };
            let stale = serde_json::from_str::<Snapshot<serde_json::Value>>(&content)
                .map(|s| s.is_expired())
                .unwrap_or(true);
            if stale {
                self.remove(key)?;
                removed += 1;
            }
        }
        if removed > 0 {
            warn!(removed, "Expired snapshots cleaned up");
        }
        Ok(removed)
    }
}
