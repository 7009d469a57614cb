use std::ffi::OsString;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The directory could not be opened or read. Nothing is listed.
    ReadDir(PathBuf, std::io::Error),
    /// A single entry could not be stat'ed. The listing carries on.
    Metadata(OsString, std::io::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::ReadDir(ref path, ref err) => {
                write!(f, "cannot access '{}': {err}", path.display())
            }
            Error::Metadata(ref name, ref err) => write!(
                f,
                "Error reading metadata for {}: {err}",
                name.to_string_lossy()
            ),
            Error::Io(ref err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::ReadDir(_, ref err) => Some(err),
            Error::Metadata(_, ref err) => Some(err),
            Error::Io(ref err) => Some(err),
        }
    }
}

impl std::convert::From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::Io(error)
    }
}
