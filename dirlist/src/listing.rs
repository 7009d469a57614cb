use std::io::Write;
use std::path::Path;

use crate::entry::{Entry, EntryMetadata};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub show_hidden: bool,
    pub long_format: bool,
}

/// Reads every entry of `path`, drops hidden ones unless `show_hidden` is
/// set and sorts the rest by the raw bytes of their names.
///
/// The whole directory is read before returning, so a failure part way
/// through yields an error and no entries.
pub fn read_entries(path: &Path, show_hidden: bool) -> Result<Vec<Entry>> {
    let read_dir =
        std::fs::read_dir(path).map_err(|err| Error::ReadDir(path.to_path_buf(), err))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|err| Error::ReadDir(path.to_path_buf(), err))?;
        entries.push(Entry::new(path, dir_entry.file_name()));
    }

    if !show_hidden {
        entries.retain(|entry| !entry.is_hidden());
    }
    sort_entries(&mut entries);
    Ok(entries)
}

pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| a.name.as_encoded_bytes().cmp(b.name.as_encoded_bytes()));
}

/// `mode nlink size timestamp name`, with the link count right aligned to 2
/// columns and the size to 8.
pub fn format_long_line(name: &str, metadata: &EntryMetadata) -> String {
    format!(
        "{} {:>2} {:>8} {} {}",
        metadata.mode_string(),
        metadata.nlink,
        metadata.size,
        metadata.modified,
        name
    )
}

pub fn write_short<W: Write>(entries: &[Entry], out: &mut W) -> Result<()> {
    let names: Vec<_> = entries.iter().map(|e| e.display_name()).collect();
    writeln!(out, "{}", names.join("  "))?;
    Ok(())
}

/// Writes one line per entry to `out`. Entries that cannot be stat'ed are
/// reported on `err` and skipped; the remaining entries are still written.
///
/// Returns how many entries failed.
pub fn write_long<W: Write, E: Write>(
    entries: &[Entry],
    out: &mut W,
    err: &mut E,
) -> Result<usize> {
    let mut failures = 0;
    for entry in entries {
        match entry.metadata() {
            Ok(metadata) => {
                writeln!(out, "{}", format_long_line(&entry.display_name(), &metadata))?
            }
            Err(e) => {
                failures += 1;
                writeln!(err, "{e}")?;
            }
        }
    }
    Ok(failures)
}

/// Lists `path` to `out`, sending per-entry problems to `err`.
///
/// A directory that cannot be read is returned as [`Error::ReadDir`] before
/// anything is written.
pub fn list<W: Write, E: Write>(
    path: &Path,
    options: ListOptions,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let entries = read_entries(path, options.show_hidden)?;
    if options.long_format {
        write_long(&entries, out, err)?;
    } else {
        write_short(&entries, out)?;
    }
    Ok(())
}
