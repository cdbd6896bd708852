use crate::document::Value;

/// A key path split into segments. The empty path is the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeyPath<'a> {
    raw: &'a str,
    separator: char,
}

/// Outcome of walking a key path through a tree.
#[derive(Debug, PartialEq)]
pub(crate) enum Resolved<'a, 'v> {
    Found(&'v Value),
    /// `resolved` is the longest prefix of the path that exists.
    Missing { resolved: &'a str },
}

impl<'a> KeyPath<'a> {
    pub(crate) fn new(raw: &'a str, separator: char) -> Self {
        Self { raw, separator }
    }

    pub(crate) fn segments(&self) -> impl Iterator<Item = &'a str> {
        let (raw, separator) = (self.raw, self.separator);
        // "".split(sep) yields one empty segment, the root has none
        let split = (!raw.is_empty()).then(move || raw.split(separator));
        split.into_iter().flatten()
    }

    pub(crate) fn resolve<'v>(&self, root: &'v Value) -> Resolved<'a, 'v> {
        let raw = self.raw;
        let mut node = root;
        let mut consumed = 0;
        for (i, segment) in self.segments().enumerate() {
            match step(node, segment) {
                Some(child) => node = child,
                None => {
                    return Resolved::Missing {
                        resolved: &raw[..consumed],
                    };
                }
            }
            if i > 0 {
                consumed += self.separator.len_utf8();
            }
            consumed += segment.len();
        }
        Resolved::Found(node)
    }
}

fn step<'v>(node: &'v Value, segment: &str) -> Option<&'v Value> {
    match node {
        Value::Object(_) => node.field(segment),
        Value::Array(_) => segment
            .parse::<usize>()
            .ok()
            .and_then(|index| node.element(index)),
        _ => None,
    }
}
