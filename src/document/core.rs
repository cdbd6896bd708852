use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    error::{Error, Result},
    options::ReaderOptions,
    parser,
};

use super::Value;

/// A parsed JSON document.
///
/// A `Document` only exists fully parsed: every constructor either returns
/// the complete tree or an error. It is read-only afterwards and cannot be
/// duplicated; pass it by reference or move it.
///
/// ```compile_fail
/// let doc = jsonfile::Document::from_reader(&b"{}"[..]).unwrap();
/// let copy = doc.clone();
/// ```
#[derive(Debug)]
pub struct Document {
    pub(super) root: Value,
    pub(super) options: ReaderOptions,
    source: Option<PathBuf>,
}

impl Document {
    /// Reads and parses the JSON file at `path`.
    ///
    /// ```no_run
    /// let doc = jsonfile::Document::open("settings.json")?;
    /// let port: u16 = doc.read("server.port")?;
    /// # Ok::<(), jsonfile::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, ReaderOptions::default())
    }

    pub fn open_with(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|source| {
            debug!(path = %path.display(), error = %source, "cannot read JSON file");
            Error::File {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::build(contents.as_slice(), options, Some(path.to_path_buf()))
    }

    /// Parses a document from any reader. The resulting document has no
    /// [`source`](Self::source).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with(reader, ReaderOptions::default())
    }

    pub fn from_reader_with<R: Read>(reader: R, options: ReaderOptions) -> Result<Self> {
        Self::build(reader, options, None)
    }

    fn build<R: Read>(reader: R, options: ReaderOptions, source: Option<PathBuf>) -> Result<Self> {
        let root = match parser::parse(reader, &options) {
            Ok(root) => root,
            Err(err) => {
                debug!(source = ?source, error = %err, "malformed JSON document");
                return Err(Error::Parse { path: source, source: err });
            }
        };
        debug!(source = ?source, kind = %root.kind(), "loaded JSON document");
        Ok(Self {
            root,
            options,
            source,
        })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// The file this document was opened from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
