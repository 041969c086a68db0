// crates/phonebook-core/src/loader/mod.rs

//! # Persistence
//!
//! Handles the physical layer (files, compression) and delegates to the
//! per-format readers and writers:
//!
//! - `.txt` (and anything unrecognized): the line format, one entry per line
//! - `.bin`: a bincode snapshot, gzipped when 'compact' is enabled
//! - `.json`: a JSON array of entries (requires 'json')

use crate::book::PhoneBook;
use crate::error::Result;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod common_io;
mod lines;
mod snapshot;

#[cfg(feature = "json")]
mod json;

use common_io::CompressionMode;

pub const DEFAULT_FILE_NAME: &str = "PhoneBook.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    Lines,
    Json,
    Snapshot,
}

impl StorageFormat {
    /// Picks the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => StorageFormat::Json,
            Some(ext) if ext.eq_ignore_ascii_case("bin") => StorageFormat::Snapshot,
            _ => StorageFormat::Lines,
        }
    }
}

impl PhoneBook {
    /// `PhoneBook.txt` inside `dir`.
    pub fn default_path_in(dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(DEFAULT_FILE_NAME)
    }

    /// Loads a book from `path`, choosing the format by extension.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let book = match StorageFormat::from_path(path) {
            StorageFormat::Lines => {
                let stream = common_io::open_stream(path, CompressionMode::None)?;
                let mut book = PhoneBook::new();
                book.read_lines(BufReader::new(stream))?;
                book
            }
            StorageFormat::Snapshot => {
                let stream = common_io::open_stream(path, CompressionMode::for_snapshots())?;
                PhoneBook::read_snapshot(stream)?
            }
            #[cfg(feature = "json")]
            StorageFormat::Json => {
                let stream = common_io::open_stream(path, CompressionMode::None)?;
                PhoneBook::read_json(stream)?
            }
            #[cfg(not(feature = "json"))]
            StorageFormat::Json => return Err(json_disabled()),
        };
        info!(path = %path.display(), entries = book.len(), "phone book loaded");
        Ok(book)
    }

    /// Writes the book to `path`, choosing the format by extension. The
    /// file is replaced.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match StorageFormat::from_path(path) {
            StorageFormat::Lines => {
                common_io::write_with(path, CompressionMode::None, |w| self.write_lines(w))?
            }
            StorageFormat::Snapshot => {
                common_io::write_with(path, CompressionMode::for_snapshots(), |w| {
                    self.write_snapshot(w)
                })?
            }
            #[cfg(feature = "json")]
            StorageFormat::Json => {
                common_io::write_with(path, CompressionMode::None, |w| self.write_json(w))?
            }
            #[cfg(not(feature = "json"))]
            StorageFormat::Json => return Err(json_disabled()),
        }
        info!(path = %path.display(), entries = self.len(), "phone book saved");
        Ok(())
    }
}

#[cfg(not(feature = "json"))]
fn json_disabled() -> crate::error::PhoneBookError {
    crate::error::PhoneBookError::InvalidData("JSON support requires the 'json' feature".into())
}
