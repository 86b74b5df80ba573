//! File probing
//!
//! Existence and size checks for each configured spreadsheet. A failed check
//! becomes part of the record, never an error.

use crate::config::FileEntry;
use crate::logger;
use std::io;
use std::path::{Path, PathBuf};

/// File system queries used by the checker
pub trait FileProbe {
    fn exists(&self, path: &Path) -> bool;
    fn size(&self, path: &Path) -> io::Result<u64>;
}

/// Probe backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProbe;

impl FileProbe for OsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn size(&self, path: &Path) -> io::Result<u64> {
        std::fs::metadata(path).map(|m| m.len())
    }
}

/// Outcome of the size query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeStatus {
    Known(u64),
    /// The file exists but its size could not be read
    Unknown,
    /// The file does not exist; no size query was made
    Absent,
}

/// Result of checking one configured file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub path: PathBuf,
    pub exists: bool,
    pub size: SizeStatus,
}

impl FileRecord {
    pub const fn size_bytes(&self) -> Option<u64> {
        match self.size {
            SizeStatus::Known(n) => Some(n),
            SizeStatus::Unknown | SizeStatus::Absent => None,
        }
    }
}

/// Check one entry
pub fn probe_file<P: FileProbe + ?Sized>(probe: &P, entry: &FileEntry) -> FileRecord {
    let exists = probe.exists(&entry.path);
    let size = if exists {
        match probe.size(&entry.path) {
            Ok(n) => SizeStatus::Known(n),
            Err(e) => {
                logger::log_warning(&format!(
                    "Could not read size of '{}': {e}",
                    entry.path.display()
                ));
                SizeStatus::Unknown
            }
        }
    } else {
        SizeStatus::Absent
    };

    FileRecord {
        name: entry.name.clone(),
        path: entry.path.clone(),
        exists,
        size,
    }
}

/// Check every entry, in order
pub fn check_files<P: FileProbe + ?Sized>(probe: &P, entries: &[FileEntry]) -> Vec<FileRecord> {
    entries.iter().map(|entry| probe_file(probe, entry)).collect()
}
