//! Error type of the crate
//!
//! Recognizers never fail: a rejected input is a plain `false`. Errors only
//! come from configuration and from reading a corpus.

use std::{
    error::Error as StdError,
    fmt::{self, Display, Formatter},
    io,
    path::PathBuf,
};

/// An enum of all error kinds.
#[derive(Debug)]
pub enum Error {
    /// No grammar variant has this name
    UnknownGrammar(String),
    /// Grammar extras overlap structural symbols
    InvalidGrammar(&'static str),
    /// The declarative pattern did not compile
    Pattern(regex::Error),
    /// A corpus line is not `<email>,<valid|invalid>`
    MalformedRecord(String),
    /// The corpus file does not exist
    CorpusNotFound(PathBuf),
    /// IO error while reading a corpus
    Io(io::Error),
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Error::UnknownGrammar(name) => write!(fmt, "unknown grammar variant `{name}`"),
            Error::InvalidGrammar(reason) => write!(fmt, "invalid grammar: {reason}"),
            Error::Pattern(err) => write!(fmt, "invalid pattern: {err}"),
            Error::MalformedRecord(line) => write!(fmt, "malformed corpus record `{line}`"),
            Error::CorpusNotFound(path) => {
                write!(fmt, "corpus file `{}` not found", path.display())
            }
            Error::Io(err) => err.fmt(fmt),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Pattern(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Error {
        Error::Pattern(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::UnknownGrammar("strict".into()).to_string(),
            "unknown grammar variant `strict`"
        );
        assert_eq!(
            Error::CorpusNotFound(PathBuf::from("missing.txt")).to_string(),
            "corpus file `missing.txt` not found"
        );
    }

    #[test]
    fn source() {
        let err = Error::from(io::Error::new(io::ErrorKind::Other, "boom"));
        assert!(err.source().is_some());
        assert!(Error::InvalidGrammar("x").source().is_none());
    }
}
