//! Read-only access to a JSON file through typed key-path lookups.
//!
//! ```no_run
//! use jsonfile::Document;
//!
//! let doc = Document::open("config.json")?;
//! let name: String = doc.read("service.name")?;
//! let retries = doc.read_or("service.retries", 3u32)?;
//! # Ok::<(), jsonfile::Error>(())
//! ```
mod convert;
mod document;
mod error;
mod options;
mod parser;
mod path;

pub use convert::FromValue;
pub use document::{Document, Value, ValueKind};
pub use error::{Error, ErrorKind, Result};
pub use options::{DEFAULT_MAX_NESTING_DEPTH, DEFAULT_SEPARATOR, ReaderOptions};
