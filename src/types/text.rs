//! Lenient deserializers for upstream values that are specified as text but
//! occasionally arrive as JSON numbers.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum TextValue {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl From<TextValue> for String {
    fn from(value: TextValue) -> Self {
        match value {
            TextValue::Text(s) => s,
            TextValue::Integer(i) => i.to_string(),
            TextValue::Unsigned(u) => u.to_string(),
            TextValue::Float(f) => f.to_string(),
        }
    }
}

pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    TextValue::deserialize(deserializer).map(String::from)
}

pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<TextValue>::deserialize(deserializer).map(|value| value.map(String::from))
}
