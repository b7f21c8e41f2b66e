use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Insertion-ordered map used for resolution, document, dereferencing and content metadata.
pub type Metadata = Map<String, Value>;

pub const ERROR: &str = "error";
pub const ERROR_MESSAGE: &str = "errorMessage";
pub const CONTENT_TYPE: &str = "contentType";

/// Copies every entry of `source` into `target`, overwriting entries with the same key.
pub fn merge(target: &mut Metadata, source: &Metadata) {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
}

/// Reads a string entry, ignoring entries of any other JSON type.
pub fn get_str<'a>(metadata: &'a Metadata, key: &str) -> Option<&'a str> {
    metadata.get(key).and_then(Value::as_str)
}

/// Sets a string entry, or removes it when `value` is `None`.
pub fn set_str(metadata: &mut Metadata, key: &str, value: Option<&str>) {
    match value {
        Some(value) => {
            metadata.insert(key.to_string(), Value::String(value.to_string()));
        }
        None => {
            metadata.remove(key);
        }
    }
}

/// Reads a metadata map, taking `null` as an empty map.
pub fn deserialize_nullable<'de, D>(deserializer: D) -> Result<Metadata, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Metadata>::deserialize(deserializer)?.unwrap_or_default())
}
