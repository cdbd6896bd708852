use tracing::trace;

use crate::{
    error::{Error, Result},
    path::{KeyPath, Resolved},
};

use super::{Document, Value};

impl Document {
    /// Borrows the node at `key`. The empty key is the root.
    pub fn get(&self, key: &str) -> Result<&Value> {
        match self.key_path(key).resolve(&self.root) {
            Resolved::Found(value) => Ok(value),
            Resolved::Missing { resolved } => {
                trace!(key, resolved, "key path not found");
                Err(Error::Lookup {
                    key: key.to_string(),
                    resolved: resolved.to_string(),
                })
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        matches!(
            self.key_path(key).resolve(&self.root),
            Resolved::Found(_)
        )
    }

    pub(crate) fn key_path<'a>(&self, key: &'a str) -> KeyPath<'a> {
        KeyPath::new(key, self.options.separator)
    }
}
