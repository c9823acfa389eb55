//! File-backed [`Storage`] so a login survives between CLI invocations.
//!
//! The file is a flat JSON object holding the same `admin_token` and
//! `admin_user` keys the browser keeps in `localStorage`. Every write
//! rewrites the whole file; removing the last key deletes it.

#[cfg(test)]
#[path = "session_file_test.rs"]
mod session_file_test;

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use portal::error::StorageError;
use portal::storage::Storage;

/// Environment variable naming the session file.
pub const SESSION_FILE_ENV: &str = "INSPER_SESSION_FILE";

const DEFAULT_FILE_NAME: &str = "session.json";

/// `$HOME/.config/insper-admin/session.json`, or the working directory when
/// `HOME` is not set.
#[must_use]
pub fn default_session_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".config").join("insper-admin").join(DEFAULT_FILE_NAME),
        None => PathBuf::from(".insper-admin-session.json"),
    }
}

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Load `path`. A missing file is an empty session; a file that is not a
    /// JSON object of strings is ignored with a warning and overwritten on
    /// the next write.
    ///
    /// # Errors
    ///
    /// Returns the I/O error when the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable session file");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StorageError> {
        if self.entries.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
                Err(err) => Err(StorageError::Write(err.to_string())),
            };
        }

        let text = serde_json::to_string_pretty(&self.entries).map_err(|err| StorageError::Write(err.to_string()))?;
        write_private(&self.path, text.as_bytes()).map_err(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "session file write failed");
            StorageError::Write(err.to_string())
        })
    }
}

/// Write `bytes` to `path`, creating parent directories. On Unix the file is
/// readable by the owner only since it holds a bearer token.
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.flush()
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self.entries.insert(key.to_owned(), value.to_owned());
        if let Err(err) = self.persist() {
            match previous {
                Some(previous) => self.entries.insert(key.to_owned(), previous),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(err) = self.persist() {
            self.entries.insert(key.to_owned(), previous);
            return Err(err);
        }
        Ok(())
    }
}
