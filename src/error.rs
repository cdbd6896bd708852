use std::io;
use std::path::PathBuf;

use struson::reader::ReaderError;
use thiserror::Error;

use crate::document::ValueKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    File,
    Parse,
    Lookup,
    Conversion,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed JSON{}: {source}", in_path(.path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: ReaderError,
    },
    /// `resolved` is the longest prefix of `key` that exists.
    #[error("no value at key path '{key}' (resolved up to '{resolved}')")]
    Lookup { key: String, resolved: String },
    #[error("value at '{key}' is {found}, cannot read it as {expected}")]
    Conversion {
        key: String,
        expected: &'static str,
        found: ValueKind,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::File { .. } => ErrorKind::File,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::Lookup { .. } => ErrorKind::Lookup,
            Error::Conversion { .. } => ErrorKind::Conversion,
        }
    }
}

fn in_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" in {}", path.display()),
        None => String::new(),
    }
}
