use std::fmt;

/// A node of the parsed JSON tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Object members in document order. Duplicate names are kept.
    Object(Vec<(String, Value)>),
    Array(Vec<Value>),
    String(String),
    /// The number literal exactly as it appeared in the document.
    Number(String),
    Boolean(bool),
    Null,
}

/// The JSON type of a [`Value`], used in conversion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Object => "an object",
            ValueKind::Array => "an array",
            ValueKind::String => "a string",
            ValueKind::Number => "a number",
            ValueKind::Boolean => "a boolean",
            ValueKind::Null => "null",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
        }
    }

    /// Looks up an object member by name. The first member wins when a
    /// name occurs more than once.
    pub fn field(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(members) => members.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn element(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let members: &[(String, Value)] = match self {
            Value::Object(members) => members,
            _ => &[],
        };
        members.iter().map(|(k, _)| k.as_str())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(members: &[(&str, Value)]) -> Value {
        Value::Object(
            members
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_field_first_duplicate_wins() {
        let v = object(&[
            ("a", Value::Number("1".to_string())),
            ("a", Value::Number("2".to_string())),
        ]);
        assert_eq!(v.field("a"), Some(&Value::Number("1".to_string())));
    }

    #[test]
    fn test_field_on_non_object() {
        assert_eq!(Value::Null.field("a"), None);
        assert_eq!(Value::Array(vec![Value::Null]).field("0"), None);
    }

    #[test]
    fn test_element() {
        let v = Value::Array(vec![Value::Boolean(true), Value::Null]);
        assert_eq!(v.element(0), Some(&Value::Boolean(true)));
        assert_eq!(v.element(2), None);
        assert_eq!(Value::String("x".to_string()).element(0), None);
    }

    #[test]
    fn test_keys_in_document_order() {
        let v = object(&[("b", Value::Null), ("a", Value::Null)]);
        assert_eq!(v.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(Value::Null.keys().count(), 0);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Value::Number("1".to_string()).kind().to_string(), "a number");
        assert_eq!(Value::Null.kind().to_string(), "null");
    }
}
