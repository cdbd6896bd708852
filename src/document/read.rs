use crate::{
    convert::FromValue,
    error::{Error, Result},
    path::Resolved,
};

use super::{Document, Value};

impl Document {
    /// Reads the value at `key` as `T`.
    ///
    /// Fails with [`Error::Lookup`] when nothing is at `key` and with
    /// [`Error::Conversion`] when the node is not a `T`.
    ///
    /// ```
    /// let doc = jsonfile::Document::from_reader(&br#"{"a": {"b": 42}}"#[..])?;
    /// assert_eq!(doc.read::<i32>("a.b")?, 42);
    /// # Ok::<(), jsonfile::Error>(())
    /// ```
    pub fn read<T: FromValue>(&self, key: &str) -> Result<T> {
        convert(key, self.get(key)?)
    }

    /// Like [`read`](Self::read), but returns `default` when `key` is absent.
    pub fn read_or<T: FromValue>(&self, key: &str, default: T) -> Result<T> {
        Ok(self.read_optional(key)?.unwrap_or(default))
    }

    /// Like [`read`](Self::read), but returns `None` when `key` is absent.
    pub fn read_optional<T: FromValue>(&self, key: &str) -> Result<Option<T>> {
        match self.key_path(key).resolve(&self.root) {
            Resolved::Found(value) => convert(key, value).map(Some),
            Resolved::Missing { .. } => Ok(None),
        }
    }
}

fn convert<T: FromValue>(key: &str, value: &Value) -> Result<T> {
    T::from_value(value).ok_or_else(|| Error::Conversion {
        key: key.to_string(),
        expected: T::expected(),
        found: value.kind(),
    })
}
