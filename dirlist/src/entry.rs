use std::borrow::Cow;
use std::ffi::OsString;
use std::fs::Metadata;
use std::path::{Path, PathBuf};

use crate::date::Timestamp;
use crate::error::{Error, Result};
use crate::mode;

/// A name returned by one directory listing, plus where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub path: PathBuf,
}

impl Entry {
    pub fn new(dir: &Path, name: OsString) -> Entry {
        let path = dir.join(&name);
        Entry { name, path }
    }

    pub fn is_hidden(&self) -> bool {
        self.name.as_encoded_bytes().first() == Some(&b'.')
    }

    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// Stats the entry, following symlinks the way `stat(2)` does.
    pub fn metadata(&self) -> Result<EntryMetadata> {
        std::fs::metadata(&self.path)
            .map(|m| EntryMetadata::from(&m))
            .map_err(|err| Error::Metadata(self.name.clone(), err))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    pub mode: u32,
    pub nlink: u64,
    pub size: u64,
    pub modified: Timestamp,
}

impl EntryMetadata {
    pub fn mode_string(&self) -> String {
        mode::file_mode(self.mode)
    }
}

impl From<&Metadata> for EntryMetadata {
    fn from(metadata: &Metadata) -> Self {
        let modified = metadata
            .modified()
            .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
        EntryMetadata {
            mode: raw_mode(metadata),
            nlink: link_count(metadata),
            size: metadata.len(),
            modified: Timestamp::from(modified),
        }
    }
}

#[cfg(unix)]
fn raw_mode(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    metadata.mode()
}

// No st_mode here: rebuild something plausible from the file type and the
// read-only flag.
#[cfg(not(unix))]
fn raw_mode(metadata: &Metadata) -> u32 {
    let file_type = metadata.file_type();
    let kind = if file_type.is_dir() {
        mode::S_IFDIR
    } else if file_type.is_symlink() {
        mode::S_IFLNK
    } else {
        mode::S_IFREG
    };
    let perms = match (metadata.permissions().readonly(), file_type.is_dir()) {
        (false, true) => 0o777,
        (true, true) => 0o555,
        (false, false) => 0o666,
        (true, false) => 0o444,
    };
    kind | perms
}

#[cfg(unix)]
fn link_count(metadata: &Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    metadata.nlink()
}

#[cfg(not(unix))]
fn link_count(_metadata: &Metadata) -> u64 {
    1
}
