use std::io::Read;

use display_as_json::Display;
use serde::{Deserialize, Serialize};

use super::stream;
use crate::{
    error::DidResolverError,
    shared_types::{
        error_code::ErrorCode,
        metadata::{self, Metadata},
    },
    traits::{
        dereferenceable::dereferencing_error::DidDereferencingError,
        result::{DidResult, StreamResult},
    },
};

/// Result of dereferencing a DID URL. The content may be a whole DID document, part of one,
/// or any other resource the URL points to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Display)]
#[serde(rename_all = "camelCase")]
pub struct DereferenceResult {
    #[serde(default, deserialize_with = "metadata::deserialize_nullable")]
    dereferencing_metadata: Metadata,
    #[serde(default = "stream::empty", with = "stream")]
    content_stream: Option<Vec<u8>>,
    #[serde(default, deserialize_with = "metadata::deserialize_nullable")]
    content_metadata: Metadata,
}

impl Default for DereferenceResult {
    fn default() -> Self {
        Self::build(Metadata::new(), None, Metadata::new())
    }
}

impl DereferenceResult {
    /// A `None` stream is stored as an empty one.
    pub fn build(
        dereferencing_metadata: Metadata,
        content_stream: Option<Vec<u8>>,
        content_metadata: Metadata,
    ) -> Self {
        Self {
            dereferencing_metadata,
            content_stream: Some(content_stream.unwrap_or_default()),
            content_metadata,
        }
    }

    pub fn make_error_result(
        error: Option<ErrorCode>,
        error_message: Option<&str>,
        dereferencing_metadata: Option<&Metadata>,
        content_type: Option<&str>,
    ) -> Self {
        let mut result = Self::default();
        if let Some(dereferencing_metadata) = dereferencing_metadata {
            metadata::merge(&mut result.dereferencing_metadata, dereferencing_metadata);
        }
        let error = error.unwrap_or(ErrorCode::InternalError);
        result.set_error(Some(error.as_str()));
        if let Some(error_message) = error_message {
            result.set_error_message(Some(error_message));
        }
        result.set_content_type(content_type);
        result.set_content_stream(Some(Vec::new()));
        log::debug!("Created error dereference result: {}", result);
        result
    }

    pub fn make_error_result_from(err: &DidDereferencingError, content_type: Option<&str>) -> Self {
        if let Some(result) = err.dereference_result() {
            if result.content_type() == content_type {
                return result.clone();
            }
        }
        Self::make_error_result(
            err.error().cloned(),
            Some(err.message()),
            Some(err.dereferencing_metadata()),
            content_type,
        )
    }

    pub fn from_json(json: &str) -> Result<Self, DidResolverError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, DidResolverError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn dereferencing_metadata(&self) -> &Metadata {
        &self.dereferencing_metadata
    }

    pub fn dereferencing_metadata_mut(&mut self) -> &mut Metadata {
        &mut self.dereferencing_metadata
    }

    pub fn set_dereferencing_metadata(&mut self, dereferencing_metadata: Metadata) {
        self.dereferencing_metadata = dereferencing_metadata;
    }

    pub fn content_metadata(&self) -> &Metadata {
        &self.content_metadata
    }

    pub fn content_metadata_mut(&mut self) -> &mut Metadata {
        &mut self.content_metadata
    }

    pub fn set_content_metadata(&mut self, content_metadata: Metadata) {
        self.content_metadata = content_metadata;
    }

    pub fn content_stream_as_string(&self) -> Option<String> {
        self.content_stream.as_deref().map(stream::encode)
    }

    pub fn set_content_stream_as_string(&mut self, content_stream: Option<&str>) {
        self.content_stream = content_stream.map(stream::decode);
    }
}

impl DidResult for DereferenceResult {
    fn function_metadata(&self) -> &Metadata {
        &self.dereferencing_metadata
    }

    fn function_metadata_mut(&mut self) -> &mut Metadata {
        &mut self.dereferencing_metadata
    }

    fn function_content_metadata(&self) -> &Metadata {
        &self.content_metadata
    }

    fn function_content_metadata_mut(&mut self) -> &mut Metadata {
        &mut self.content_metadata
    }

    fn is_complete(&self) -> bool {
        self.content_type().is_some() && self.content_stream.is_some()
    }
}

impl StreamResult for DereferenceResult {
    fn content_stream(&self) -> Option<&[u8]> {
        self.content_stream.as_deref()
    }

    fn set_content_stream(&mut self, stream: Option<Vec<u8>>) {
        self.content_stream = stream;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_service_endpoint_content_serializes_as_hex() {
        let mut result = DereferenceResult::build(
            Metadata::new(),
            Some(b"https://example.com/endpoint".to_vec()),
            Metadata::new(),
        );
        result.set_content_type(Some("text/uri-list"));

        let json = result.to_json().unwrap();

        assert_eq!(
            json,
            format!(
                r#"{{"dereferencingMetadata":{{"contentType":"text/uri-list"}},"contentStream":"{}","contentMetadata":{{}}}}"#,
                hex::encode("https://example.com/endpoint")
            )
        );
        assert_eq!(DereferenceResult::from_json(&json).unwrap(), result);
    }

    #[test]
    fn test_make_error_result() {
        let mut meta = Metadata::new();
        meta.insert("didUrl".to_string(), json!("did:example:123#missing"));

        let result = DereferenceResult::make_error_result(
            Some(ErrorCode::NotFound),
            Some("fragment not found"),
            Some(&meta),
            Some("application/did+ld+json"),
        );

        assert_eq!(result.error(), Some("notFound"));
        assert_eq!(result.error_message(), Some("fragment not found"));
        assert_eq!(result.content_type(), Some("application/did+ld+json"));
        assert_eq!(result.content_stream(), Some(&[][..]));
        assert_eq!(result.dereferencing_metadata()["didUrl"], json!("did:example:123#missing"));
    }

    #[test]
    fn test_make_error_result_from_without_code() {
        let err = DidDereferencingError::from_message("unexpected");

        let result = DereferenceResult::make_error_result_from(&err, None);

        assert_eq!(result.error(), Some("internalError"));
        assert_eq!(result.content_type(), None);
        assert!(!result.is_complete());
    }

    #[test]
    fn test_is_complete_with_null_stream() {
        let mut result = DereferenceResult::default();
        result.set_content_type(Some("application/did+json"));
        assert!(result.is_complete());
        result.set_content_stream(None);
        assert!(!result.is_complete());
    }
}
