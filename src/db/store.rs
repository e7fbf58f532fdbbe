// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local key-value store with typed JSON records.
//!
//! Provides:
//! - A directory backend (one `<key>.json` file per record)
//! - An in-memory backend for tests
//! - Typed `load`/`save` plus `load_or`, which applies the fallback policy:
//!   a missing, unparseable, or `null` record yields the supplied default
//!   and the reason is logged.

use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Key-value store handle.
#[derive(Clone, Debug)]
pub struct Store {
    backend: Backend,
}

#[derive(Clone, Debug)]
enum Backend {
    Directory(PathBuf),
    Memory(Arc<Mutex<HashMap<String, String>>>),
}

impl Store {
    /// Open a directory-backed store, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| StoreError::Io {
            key: dir.display().to_string(),
            source: e,
        })?;
        tracing::info!(path = %dir.display(), "Opened local store");
        Ok(Self {
            backend: Backend::Directory(dir),
        })
    }

    /// Create an empty in-memory store (tests, ephemeral sessions).
    ///
    /// Clones share the same underlying map.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(Mutex::new(HashMap::new()))),
        }
    }

    fn record_path(dir: &Path, key: &str) -> PathBuf {
        dir.join(format!("{key}.json"))
    }

    // ─── Raw Access ──────────────────────────────────────────────

    /// Read the stored text for `key`, `None` if nothing is stored.
    pub fn read_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        match &self.backend {
            Backend::Directory(dir) => match fs::read_to_string(Self::record_path(dir, key)) {
                Ok(text) => Ok(Some(text)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(StoreError::Io {
                    key: key.to_string(),
                    source: e,
                }),
            },
            Backend::Memory(map) => {
                let map = map.lock().map_err(|_| StoreError::Poisoned)?;
                Ok(map.get(key).cloned())
            }
        }
    }

    /// Overwrite the stored text for `key`.
    pub fn write_raw(&self, key: &str, text: &str) -> Result<(), StoreError> {
        match &self.backend {
            Backend::Directory(dir) => {
                // Replace via rename; readers never see a partial record.
                let path = Self::record_path(dir, key);
                let tmp = path.with_extension("json.tmp");
                fs::write(&tmp, text)
                    .and_then(|_| fs::rename(&tmp, &path))
                    .map_err(|e| {
                        if let Err(cleanup) = fs::remove_file(&tmp) {
                            if cleanup.kind() != ErrorKind::NotFound {
                                tracing::warn!(key, error = %cleanup, "Failed to remove temporary record");
                            }
                        }
                        StoreError::Io {
                            key: key.to_string(),
                            source: e,
                        }
                    })
            }
            Backend::Memory(map) => {
                let mut map = map.lock().map_err(|_| StoreError::Poisoned)?;
                map.insert(key.to_string(), text.to_string());
                Ok(())
            }
        }
    }

    // ─── Typed Access ────────────────────────────────────────────

    /// Parse the record at `key`.
    ///
    /// `Ok(None)` when the key is missing or holds JSON `null`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(text) = self.read_raw(key)? else {
            return Ok(None);
        };
        let value: Option<T> = serde_json::from_str(&text).map_err(|e| StoreError::Parse {
            key: key.to_string(),
            source: e,
        })?;
        Ok(value)
    }

    /// Parse the record at `key`, falling back to `default` on any failure.
    pub fn load_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                tracing::debug!(key, "No stored record, using default");
                default
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Unreadable stored record, using default");
                default
            }
        }
    }

    /// Serialize `value` and overwrite the record at `key`.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let text = serde_json::to_string(value).map_err(|e| StoreError::Serialize {
            key: key.to_string(),
            source: e,
        })?;
        self.write_raw(key, &text)
    }
}

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error for record {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse record {key}: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize record {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("In-memory store lock poisoned")]
    Poisoned,
}
