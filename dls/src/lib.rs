extern crate clap;
extern crate dirlist;

#[macro_use]
pub mod utils;
pub mod cli;
pub mod error;

use std::io::Write;

use crate::cli::Options;
use crate::error::Result;

/// Lists `options.directory` on stdout. Entries that cannot be stat'ed in
/// long mode are reported on stderr without failing the run.
pub fn run(options: &Options) -> Result<()> {
    debug_eprintln!("Listing {:?} with {:?}", options.directory, options.list);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = std::io::BufWriter::new(stdout.lock());
    let mut err = stderr.lock();

    dirlist::list(&options.directory, options.list, &mut out, &mut err)?;
    out.flush()?;
    Ok(())
}
