use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    ListError(dirlist::Error),
    IoError(std::io::Error),
    CliInputError(String),
}

impl Error {
    /// The directory itself could not be read. Reported, but not a failed run.
    pub fn is_unreadable_directory(&self) -> bool {
        matches!(self, Error::ListError(dirlist::Error::ReadDir(..)))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ListError(err) => write!(f, "{}", err),
            Error::IoError(err) => write!(f, "IO error: {}", err),
            Error::CliInputError(msg) => write!(f, "CLI input error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ListError(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl std::convert::From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::IoError(error)
    }
}

impl std::convert::From<dirlist::Error> for Error {
    fn from(error: dirlist::Error) -> Error {
        Error::ListError(error)
    }
}
