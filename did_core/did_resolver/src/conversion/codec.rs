use std::collections::HashMap;

use serde_json::Value;

use crate::{
    error::DidResolverError,
    shared_types::{
        did_document::{DidDocument, DID_CORE_CONTEXT},
        error_code::ErrorCode,
        media_type::MediaType,
    },
};

/// Encodes a DID document into one content type and decodes it back.
pub trait RepresentationCodec: Send + Sync {
    fn media_type(&self) -> &str;

    fn produce(&self, did_document: &DidDocument) -> Result<Vec<u8>, DidResolverError>;

    fn consume(&self, stream: &[u8]) -> Result<DidDocument, DidResolverError>;
}

/// `application/did+ld+json`. The DID core context is added when the document has none.
#[derive(Debug, Clone, Copy, Default)]
pub struct DidLdJsonCodec;

impl RepresentationCodec for DidLdJsonCodec {
    fn media_type(&self) -> &str {
        MediaType::DidLdJson.as_str()
    }

    fn produce(&self, did_document: &DidDocument) -> Result<Vec<u8>, DidResolverError> {
        if did_document.context().is_some() {
            return Ok(serde_json::to_vec(did_document)?);
        }
        let mut did_document = did_document.clone();
        did_document.set_context(Some(Value::String(DID_CORE_CONTEXT.to_string())));
        Ok(serde_json::to_vec(&did_document)?)
    }

    fn consume(&self, stream: &[u8]) -> Result<DidDocument, DidResolverError> {
        let did_document: DidDocument = serde_json::from_slice(stream)?;
        if did_document.context().is_none() {
            log::warn!(
                "DidLdJsonCodec::consume >> document {} has no @context",
                did_document.id()
            );
        }
        Ok(did_document)
    }
}

/// `application/did+json`. Plain JSON, any `@context` is left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct DidJsonCodec;

impl RepresentationCodec for DidJsonCodec {
    fn media_type(&self) -> &str {
        MediaType::DidJson.as_str()
    }

    fn produce(&self, did_document: &DidDocument) -> Result<Vec<u8>, DidResolverError> {
        if did_document.context().is_none() {
            return Ok(serde_json::to_vec(did_document)?);
        }
        let mut did_document = did_document.clone();
        did_document.set_context(None);
        Ok(serde_json::to_vec(&did_document)?)
    }

    fn consume(&self, stream: &[u8]) -> Result<DidDocument, DidResolverError> {
        Ok(serde_json::from_slice(stream)?)
    }
}

/// `application/did+cbor`. DAG-CBOR encoding of the JSON data model.
#[derive(Debug, Clone, Copy, Default)]
pub struct DidCborCodec;

impl RepresentationCodec for DidCborCodec {
    fn media_type(&self) -> &str {
        MediaType::DidCbor.as_str()
    }

    fn produce(&self, did_document: &DidDocument) -> Result<Vec<u8>, DidResolverError> {
        // flattened members serialize as a map of unknown length, go through Value first
        let value = serde_json::to_value(did_document)?;
        serde_ipld_dagcbor::to_vec(&value)
            .map_err(|err| DidResolverError::CborEncodingError(err.to_string()))
    }

    fn consume(&self, stream: &[u8]) -> Result<DidDocument, DidResolverError> {
        let value: Value = serde_ipld_dagcbor::from_slice(stream)
            .map_err(|err| DidResolverError::CborDecodingError(err.to_string()))?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Codecs keyed by content type.
pub struct CodecRegistry {
    codecs: HashMap<String, Box<dyn RepresentationCodec>>,
    unsupported_error: ErrorCode,
}

impl CodecRegistry {
    /// A registry without any codec.
    pub fn new() -> Self {
        CodecRegistry {
            codecs: HashMap::new(),
            unsupported_error: ErrorCode::RepresentationNotSupported,
        }
    }

    pub fn register_codec<T>(mut self, codec: T) -> Self
    where
        T: RepresentationCodec + 'static,
    {
        self.codecs
            .insert(codec.media_type().to_string(), Box::new(codec));
        self
    }

    pub fn unregister_codec(mut self, media_type: &str) -> Self {
        self.codecs.remove(media_type);
        self
    }

    /// Error code reported when a conversion asks for a content type without a codec.
    pub fn with_unsupported_error(mut self, unsupported_error: ErrorCode) -> Self {
        self.unsupported_error = unsupported_error;
        self
    }

    pub fn unsupported_error(&self) -> &ErrorCode {
        &self.unsupported_error
    }

    pub fn get(&self, media_type: &str) -> Option<&dyn RepresentationCodec> {
        self.codecs.get(media_type).map(Box::as_ref)
    }

    pub fn supports(&self, media_type: &str) -> bool {
        self.codecs.contains_key(media_type)
    }

    pub fn media_types(&self) -> impl Iterator<Item = &str> {
        self.codecs.keys().map(String::as_str)
    }
}

/// JSON-LD, JSON and CBOR codecs.
impl Default for CodecRegistry {
    fn default() -> Self {
        CodecRegistry::new()
            .register_codec(DidLdJsonCodec)
            .register_codec(DidJsonCodec)
            .register_codec(DidCborCodec)
    }
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut media_types: Vec<&str> = self.media_types().collect();
        media_types.sort_unstable();
        f.debug_struct("CodecRegistry")
            .field("codecs", &media_types)
            .field("unsupported_error", &self.unsupported_error)
            .finish()
    }
}
