use std::path::PathBuf;

use dirlist::ListOptions;

use crate::error::{Error, Result};

pub fn app<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new("dls")
        .version(clap::crate_version!())
        .author(clap::crate_authors!())
        .about("List the contents of a directory")
        .arg(clap::Arg::from_usage("-a --all 'Show hidden entries (names starting with .)'"))
        .arg(clap::Arg::from_usage("-l --long 'Long format: mode, links, size, modification time'"))
        .arg(clap::Arg::from_usage("-d --debug 'Enable debug output'"))
        .arg(
            clap::Arg::from_usage("[DIRECTORY] 'Directory to list'")
                .default_value("."),
        )
}

pub fn parse_flags<'a>() -> clap::ArgMatches<'a> {
    app().get_matches()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub directory: PathBuf,
    pub list: ListOptions,
    pub debug: bool,
}

impl Options {
    pub fn from_matches(matches: &clap::ArgMatches) -> Result<Options> {
        let directory = matches
            .value_of_os("DIRECTORY")
            .ok_or_else(|| Error::CliInputError("Directory is required.".to_string()))?;
        Ok(Options {
            directory: PathBuf::from(directory),
            list: ListOptions {
                show_hidden: matches.is_present("all"),
                long_format: matches.is_present("long"),
            },
            debug: matches.is_present("debug"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(args: &[&str]) -> Options {
        let matches = app().get_matches_from(std::iter::once("dls").chain(args.iter().copied()));
        Options::from_matches(&matches).unwrap()
    }

    #[test]
    fn test_defaults() {
        let opts = options(&[]);
        assert_eq!(opts.directory, PathBuf::from("."));
        assert_eq!(opts.list, ListOptions::default());
        assert!(!opts.debug);
    }

    #[test]
    fn test_long_and_short_flags() {
        let opts = options(&["--all", "--long", "/tmp"]);
        assert!(opts.list.show_hidden);
        assert!(opts.list.long_format);
        assert_eq!(opts.directory, PathBuf::from("/tmp"));

        assert_eq!(options(&["-a", "-l"]).list, opts.list);
    }

    #[test]
    fn test_combined_short_flags() {
        let opts = options(&["-la", "some/dir"]);
        assert!(opts.list.show_hidden);
        assert!(opts.list.long_format);
        assert_eq!(opts.directory, PathBuf::from("some/dir"));
    }
}
