//! TOML file backed summary store.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{PersistenceError, SummaryPersistence};
use crate::model::SummaryKey;

/// Stores flags as a flat TOML table of `"SummaryExpanded.{title}|{author}" = bool`.
///
/// Every save is a read-modify-write under an exclusive file lock, so
/// concurrent writers of different keys do not clobber each other.
#[derive(Debug, Clone)]
pub struct FileSummaryStore {
    path: PathBuf,
}

impl FileSummaryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/bookseries/summary_state.toml`, or the current directory
    /// when the platform has no data dir.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("bookseries").join("summary_state.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn parse(&self, content: &str) -> Result<BTreeMap<String, bool>, PersistenceError> {
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        toml::from_str(content).map_err(|e| PersistenceError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn read_locked(&self, file: &mut File) -> Result<BTreeMap<String, bool>, PersistenceError> {
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| self.io_error(e))?;
        self.parse(&content)
    }
}

impl SummaryPersistence for FileSummaryStore {
    fn load_summary_expanded(&self, title: &str, author: &str) -> Result<bool, PersistenceError> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(self.io_error(e)),
        };
        FileExt::lock_shared(&file).map_err(|e| self.io_error(e))?;
        let table = self.read_locked(&mut file);
        let _ = FileExt::unlock(&file);

        let key = SummaryKey::new(title, author);
        Ok(table?.get(key.as_str()).copied().unwrap_or(false))
    }

    fn save_summary_expanded(
        &self,
        expanded: bool,
        title: &str,
        author: &str,
    ) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        FileExt::lock_exclusive(&file).map_err(|e| self.io_error(e))?;

        let result = (|| -> Result<(), PersistenceError> {
            let mut table = self.read_locked(&mut file)?;
            table.insert(SummaryKey::new(title, author).to_string(), expanded);
            let content = toml::to_string(&table)?;

            file.set_len(0).map_err(|e| self.io_error(e))?;
            file.seek(SeekFrom::Start(0))
                .map_err(|e| self.io_error(e))?;
            file.write_all(content.as_bytes())
                .map_err(|e| self.io_error(e))?;
            file.flush().map_err(|e| self.io_error(e))
        })();

        let _ = FileExt::unlock(&file);
        result
    }
}
