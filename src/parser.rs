use std::io::Read;

use struson::reader::{JsonReader, JsonStreamReader, ReaderError, ValueType};

use crate::{document::Value, options::ReaderOptions};

pub(crate) struct Parser<R: Read> {
    reader: JsonStreamReader<R>,
}

/// Parses exactly one JSON value from `json`, followed only by whitespace.
pub(crate) fn parse<R: Read>(json: R, options: &ReaderOptions) -> Result<Value, ReaderError> {
    let parser = Parser::new(json, options);
    parser.parse()
}

impl<R: Read> Parser<R> {
    fn new(json: R, options: &ReaderOptions) -> Self {
        Self {
            reader: JsonStreamReader::new_custom(json, options.reader_settings()),
        }
    }

    fn parse(mut self) -> Result<Value, ReaderError> {
        let value = self.parse_item()?;
        self.reader.consume_trailing_whitespace()?;
        Ok(value)
    }

    fn parse_item(&mut self) -> Result<Value, ReaderError> {
        let value = match self.reader.peek()? {
            ValueType::Array => {
                self.reader.begin_array()?;
                let mut items = Vec::new();
                while self.reader.has_next()? {
                    items.push(self.parse_item()?);
                }
                self.reader.end_array()?;
                Value::Array(items)
            }
            ValueType::Object => {
                self.reader.begin_object()?;
                let mut members = Vec::new();
                while self.reader.has_next()? {
                    let key = self.reader.next_name_owned()?;
                    members.push((key, self.parse_item()?));
                }
                self.reader.end_object()?;
                Value::Object(members)
            }
            ValueType::String => Value::String(self.reader.next_string()?),
            // keep the literal so wide integers survive until read time
            ValueType::Number => Value::Number(self.reader.next_number_as_string()?),
            ValueType::Boolean => Value::Boolean(self.reader.next_bool()?),
            ValueType::Null => {
                self.reader.next_null()?;
                Value::Null
            }
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(json: &str) -> Result<Value, ReaderError> {
        parse(json.as_bytes(), &ReaderOptions::default())
    }

    #[test]
    fn test_single_number_keeps_literal() {
        assert_eq!(parse_str("42").unwrap(), Value::Number("42".to_string()));
        assert_eq!(
            parse_str("18446744073709551615").unwrap(),
            Value::Number("18446744073709551615".to_string())
        );
    }

    #[test]
    fn test_scalars() {
        assert_eq!(parse_str("true").unwrap(), Value::Boolean(true));
        assert_eq!(parse_str("null").unwrap(), Value::Null);
        assert_eq!(
            parse_str(r#""hi\n""#).unwrap(),
            Value::String("hi\n".to_string())
        );
    }

    #[test]
    fn test_nested() {
        let v = parse_str(r#"{"a": {"b": [1, "x", null]}}"#).unwrap();
        assert_eq!(
            v,
            Value::Object(vec![(
                "a".to_string(),
                Value::Object(vec![(
                    "b".to_string(),
                    Value::Array(vec![
                        Value::Number("1".to_string()),
                        Value::String("x".to_string()),
                        Value::Null,
                    ])
                )])
            )])
        );
    }

    #[test]
    fn test_duplicate_keys_kept_in_order() {
        let v = parse_str(r#"{"a": 1, "a": 2}"#).unwrap();
        let Value::Object(members) = v else {
            panic!("expected object");
        };
        assert_eq!(members.len(), 2);
        assert_eq!(members[1].1, Value::Number("2".to_string()));
    }

    #[test]
    fn test_trailing_whitespace_allowed() {
        assert!(parse_str("{}\n  \n").is_ok());
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert!(parse_str("{} x").is_err());
        assert!(parse_str("1 2").is_err());
    }

    #[test]
    fn test_malformed_rejected() {
        assert!(parse_str("").is_err());
        assert!(parse_str(r#"{"a":}"#).is_err());
        assert!(parse_str("[1, 2").is_err());
        assert!(parse_str("{'a': 1}").is_err());
    }

    #[test]
    fn test_nesting_limit() {
        let options = ReaderOptions::default().with_max_nesting_depth(Some(2));
        assert!(parse("[[1]]".as_bytes(), &options).is_ok());
        assert!(parse("[[[1]]]".as_bytes(), &options).is_err());
    }

    #[test]
    fn test_comments_only_when_allowed() {
        let json = "// settings\n{\"a\": 1}";
        assert!(parse_str(json).is_err());
        let options = ReaderOptions::default().with_comments(true);
        assert!(parse(json.as_bytes(), &options).is_ok());
    }
}
