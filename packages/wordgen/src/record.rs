use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Fields every record must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "word",
    "meaning",
    "rephrasedMeaning",
    "synonyms",
    "antonyms",
    "exampleSentence",
];

/// A vocabulary entry as returned by the provider.
///
/// The parsed object is kept verbatim and serializes back to the same JSON,
/// so extra keys and key order survive the round trip to the client. Only
/// presence of the required fields is checked, not their types; the
/// accessors return `None` (or an empty list) for wrongly-typed values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WordRecord(Map<String, Value>);

impl WordRecord {
    /// Accept a parsed value if all required fields are present and truthy.
    ///
    /// Fields are checked in [`REQUIRED_FIELDS`] order and the first failure
    /// is reported. A non-object value fails on the first field.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let Value::Object(map) = value else {
            return Err(ValidationError::MissingField(REQUIRED_FIELDS[0]));
        };

        for field in REQUIRED_FIELDS {
            if !map.get(field).is_some_and(is_truthy) {
                return Err(ValidationError::MissingField(field));
            }
        }

        Ok(Self(map))
    }

    pub fn word(&self) -> Option<&str> {
        self.str_field("word")
    }

    pub fn meaning(&self) -> Option<&str> {
        self.str_field("meaning")
    }

    pub fn rephrased_meaning(&self) -> Option<&str> {
        self.str_field("rephrasedMeaning")
    }

    pub fn synonyms(&self) -> Vec<&str> {
        self.str_list("synonyms")
    }

    pub fn antonyms(&self) -> Vec<&str> {
        self.str_list("antonyms")
    }

    pub fn example_sentence(&self) -> Option<&str> {
        self.str_field("exampleSentence")
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    fn str_list(&self, key: &str) -> Vec<&str> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// JavaScript truthiness: `null`, `false`, `0` and `""` are falsy; arrays and
/// objects are truthy even when empty.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
