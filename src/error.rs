use std::fmt;
use std::io;
use std::result;

pub type Result<T> = result::Result<T, Error>;

/// An error that can occur anywhere in this tool.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Fetch(Box<ureq::Error>),
    Other(String),
}

impl Error {
    /// Attach the 1-based number of the offending input line.
    pub fn on_line(self, number: usize) -> Error {
        Error::Other(format!("error on line {}: {}", number, self))
    }

    /// Returns true if and only if this error was caused by a broken pipe.
    ///
    /// When stdout is closed early (e.g., piping into `head`), the run is
    /// not an error and the process should exit successfully.
    pub fn is_broken_pipe(&self) -> bool {
        match *self {
            Error::Io(ref err) => err.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Io(ref err) => err.fmt(f),
            Error::Fetch(ref err) => err.fmt(f),
            Error::Other(ref msg) => msg.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Io(ref err) => Some(err),
            Error::Fetch(ref err) => Some(err),
            Error::Other(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Error {
        Error::Fetch(Box::new(err))
    }
}
