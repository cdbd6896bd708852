mod core;
mod nav;
mod read;
mod value;

pub use self::core::Document;
pub use value::{Value, ValueKind};
