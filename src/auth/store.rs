//! Persistence boundary for the session token.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

/// Well-known key the session token is stored under.
pub const CSRF_TOKEN_KEY: &str = "csrf-key";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable client-side key/value storage for the session token.
///
/// Only writes are in scope here; reading and clearing the token belong to
/// the parts of the application that consume it.
pub trait TokenStore: Send + Sync {
    /// Write `value` under `key`, overwriting any existing value.
    /// Last write wins; overwriting is not an error.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store: one file per key under a dedicated directory,
/// surviving restarts.
pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl TokenStore for FileTokenStore {
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.entry_path(key), value)?;
        debug!(key, "session token stored");
        Ok(())
    }
}
