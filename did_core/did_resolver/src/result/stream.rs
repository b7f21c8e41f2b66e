//! Text surface of a byte stream for JSON transport.
//!
//! Bytes that start with a complete JSON value are emitted as that text verbatim, anything
//! else as lowercase hex. Only the leading value is checked, whatever follows it is ignored. Reading tries hex first and falls back to the raw UTF-8 bytes. The
//! detection is a best-effort transport convenience: a JSON number made only of hex digits
//! (`"1234"`) is written as text but read back as hex, and consumers already depend on this
//! exact behavior.

use serde::{de::IgnoredAny, Deserialize, Deserializer, Serializer};

pub fn is_json(bytes: &[u8]) -> bool {
    matches!(
        serde_json::Deserializer::from_slice(bytes)
            .into_iter::<IgnoredAny>()
            .next(),
        Some(Ok(_))
    )
}

pub fn encode(bytes: &[u8]) -> String {
    if is_json(bytes) {
        if let Ok(text) = std::str::from_utf8(bytes) {
            return text.to_string();
        }
    }
    hex::encode(bytes)
}

pub fn decode(text: &str) -> Vec<u8> {
    match hex::decode(text) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::trace!("stream::decode >> not hex ({}), taking UTF-8 bytes", err);
            text.as_bytes().to_vec()
        }
    }
}

pub fn empty() -> Option<Vec<u8>> {
    Some(Vec::new())
}

pub fn serialize<S>(stream: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match stream {
        Some(bytes) => serializer.serialize_str(&encode(bytes)),
        None => serializer.serialize_none(),
    }
}

/// A `null` stream is read as an empty one, matching what the `build` constructors do.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(Some(text.as_deref().map(decode).unwrap_or_default()))
}
