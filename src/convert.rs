use crate::document::Value;

/// Conversion from a tree node into a Rust type, used by
/// [`Document::read`](crate::Document::read).
///
/// Scalars convert through their text: a quoted `"8080"` reads as an
/// integer and a number or boolean reads as its literal `String`. Objects,
/// arrays and `null` only convert to [`Value`] and `Option<T>`.
pub trait FromValue: Sized {
    /// Returns `None` when the node cannot be represented as `Self`.
    fn from_value(value: &Value) -> Option<Self>;

    /// The type name used in conversion errors.
    fn expected() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// The text of a scalar node, as it appeared in the document.
fn scalar_text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        Value::Number(literal) => Some(literal.as_str()),
        Value::Boolean(true) => Some("true"),
        Value::Boolean(false) => Some("false"),
        _ => None,
    }
}

/// Text that may be parsed as a number: numbers and strings, not booleans.
fn numeric_text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.trim()),
        Value::Number(literal) => Some(literal.as_str()),
        _ => None,
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        scalar_text(value).map(str::to_owned)
    }

    fn expected() -> &'static str {
        "string"
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(b) => Some(*b),
            Value::String(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    fn expected() -> &'static str {
        "bool"
    }
}

macro_rules! integer_from_value {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &Value) -> Option<Self> {
                    numeric_text(value)?.parse().ok()
                }

                fn expected() -> &'static str {
                    stringify!($t)
                }
            }
        )*
    };
}

integer_from_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_from_value {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &Value) -> Option<Self> {
                    numeric_text(value)?
                        .parse::<$t>()
                        .ok()
                        .filter(|number| number.is_finite())
                }

                fn expected() -> &'static str {
                    stringify!($t)
                }
            }
        )*
    };
}

float_from_value!(f32, f64);

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }

    fn expected() -> &'static str {
        "any value"
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            return Some(None);
        }
        T::from_value(value).map(Some)
    }

    fn expected() -> &'static str {
        T::expected()
    }
}
