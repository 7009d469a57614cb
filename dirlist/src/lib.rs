//! Directory listing primitives.
//!
//! [`listing::list`] reads a directory, drops hidden entries unless asked
//! not to, sorts the rest by name and writes either a single line of names
//! or one `ls -l` style line per entry.

pub mod date;
pub mod entry;
pub mod error;
pub mod listing;
pub mod mode;

pub use entry::{Entry, EntryMetadata};
pub use error::{Error, Result};
pub use listing::{list, ListOptions};
