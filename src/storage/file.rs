//! JSON file storage for the ticket board
//!
//! The whole board lives in a single JSON array on disk. Reads parse the
//! entire document; writes replace it atomically by serializing to a
//! temporary file in the same directory and renaming it over the target, so
//! a concurrent reader never observes a half-written document.

use crate::core::Ticket;
use crate::error::{Result, WorkManagerError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed store holding the full ticket collection
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file does not have to exist yet; it is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the backing file exists on disk
    #[must_use]
    pub fn board_exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the full ticket collection.
    ///
    /// A missing file means "no tickets yet" and yields an empty collection;
    /// an unparsable file is a [`WorkManagerError::CorruptStore`].
    pub fn load_board(&self) -> Result<Vec<Ticket>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "board file absent, starting empty");
                return Ok(Vec::new());
            },
            Err(err) => return Err(err.into()),
        };

        serde_json::from_str(&raw).map_err(|source| WorkManagerError::CorruptStore {
            path: self.path.clone(),
            source,
        })
    }

    /// Persists the full ticket collection, replacing the previous document.
    ///
    /// Writes to `<file>.tmp` first and renames over the target, so on any
    /// failure the previous on-disk state stays intact.
    pub fn save_board(&self, tickets: &[Ticket]) -> Result<()> {
        let json = serde_json::to_string_pretty(tickets)
            .map_err(|source| self.persistence(io::Error::other(source)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| self.persistence(source))?;
            }
        }

        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|source| self.persistence(source))?;
        fs::rename(&tmp, &self.path).map_err(|source| {
            // Keep the target untouched; only the temp file is stale.
            let _ = fs::remove_file(&tmp);
            self.persistence(source)
        })?;

        debug!(path = %self.path.display(), count = tickets.len(), "board saved");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map_or_else(
            || std::ffi::OsString::from("board.json"),
            std::ffi::OsStr::to_os_string,
        );
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn persistence(&self, source: io::Error) -> WorkManagerError {
        WorkManagerError::Persistence {
            path: self.path.clone(),
            source,
        }
    }
}
