use std::io::Read;

use display_as_json::Display;
use serde::{Deserialize, Serialize};

use super::{
    dereference::DereferenceResult, resolve_data_model::ResolveDataModelResult, stream,
};
use crate::{
    conversion::{self, codec::CodecRegistry},
    error::DidResolverError,
    shared_types::{
        error_code::ErrorCode,
        metadata::{self, Metadata},
    },
    traits::{
        resolvable::resolution_error::DidResolutionError,
        result::{DidResult, StreamResult},
    },
};

/// Result of `resolveRepresentation`: the DID document encoded as a byte stream in the
/// content type recorded under `contentType` in the resolution metadata.
#[derive(Serialize, Deserialize, Clone, Debug, Display)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRepresentationResult {
    #[serde(default, deserialize_with = "metadata::deserialize_nullable")]
    did_resolution_metadata: Metadata,
    #[serde(default = "stream::empty", with = "stream")]
    did_document_stream: Option<Vec<u8>>,
    #[serde(default, deserialize_with = "metadata::deserialize_nullable")]
    did_document_metadata: Metadata,
    #[serde(skip)]
    resolve_data_model_result: Option<Box<ResolveDataModelResult>>,
}

/// The attached data model counterpart is not compared.
impl PartialEq for ResolveRepresentationResult {
    fn eq(&self, other: &Self) -> bool {
        self.did_resolution_metadata == other.did_resolution_metadata
            && self.did_document_stream == other.did_document_stream
            && self.did_document_metadata == other.did_document_metadata
    }
}

impl Default for ResolveRepresentationResult {
    fn default() -> Self {
        Self::build(Metadata::new(), None, Metadata::new())
    }
}

impl ResolveRepresentationResult {
    /// A `None` stream is stored as an empty one.
    pub fn build(
        did_resolution_metadata: Metadata,
        did_document_stream: Option<Vec<u8>>,
        did_document_metadata: Metadata,
    ) -> Self {
        Self {
            did_resolution_metadata,
            did_document_stream: Some(did_document_stream.unwrap_or_default()),
            did_document_metadata,
            resolve_data_model_result: None,
        }
    }

    /// Builds an error result on top of already collected resolution metadata. The error code
    /// defaults to `internalError` and the stream is always empty.
    pub fn make_error_result(
        error: Option<ErrorCode>,
        error_message: Option<&str>,
        did_resolution_metadata: Option<&Metadata>,
        content_type: Option<&str>,
    ) -> Self {
        let mut result = Self::default();
        if let Some(did_resolution_metadata) = did_resolution_metadata {
            metadata::merge(&mut result.did_resolution_metadata, did_resolution_metadata);
        }
        let error = error.unwrap_or(ErrorCode::InternalError);
        result.set_error(Some(error.as_str()));
        if let Some(error_message) = error_message {
            result.set_error_message(Some(error_message));
        }
        result.set_content_type(content_type);
        result.set_did_document_stream(Some(Vec::new()));
        log::debug!("Created error resolve result: {}", result);
        result
    }

    /// Reuses the result already attached to `err` when it is in the requested content type,
    /// otherwise builds one from the error code, message and metadata of `err`.
    pub fn make_error_result_from(err: &DidResolutionError, content_type: Option<&str>) -> Self {
        if let Some(result) = err.resolve_representation_result() {
            if result.content_type() == content_type {
                return result.clone();
            }
        }
        Self::make_error_result(
            err.error().cloned(),
            Some(err.message()),
            Some(err.did_resolution_metadata()),
            content_type,
        )
    }

    pub fn from_json(json: &str) -> Result<Self, DidResolverError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, DidResolverError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn did_resolution_metadata(&self) -> &Metadata {
        &self.did_resolution_metadata
    }

    pub fn did_resolution_metadata_mut(&mut self) -> &mut Metadata {
        &mut self.did_resolution_metadata
    }

    pub fn set_did_resolution_metadata(&mut self, did_resolution_metadata: Metadata) {
        self.did_resolution_metadata = did_resolution_metadata;
    }

    pub fn did_document_metadata(&self) -> &Metadata {
        &self.did_document_metadata
    }

    pub fn did_document_metadata_mut(&mut self) -> &mut Metadata {
        &mut self.did_document_metadata
    }

    pub fn set_did_document_metadata(&mut self, did_document_metadata: Metadata) {
        self.did_document_metadata = did_document_metadata;
    }

    pub fn did_document_stream(&self) -> Option<&[u8]> {
        self.did_document_stream.as_deref()
    }

    pub fn set_did_document_stream(&mut self, did_document_stream: Option<Vec<u8>>) {
        self.did_document_stream = did_document_stream;
    }

    /// JSON text when the stream parses as JSON, lowercase hex otherwise.
    pub fn did_document_stream_as_string(&self) -> Option<String> {
        self.did_document_stream.as_deref().map(stream::encode)
    }

    /// Hex is tried first, anything else is taken as UTF-8 text.
    pub fn set_did_document_stream_as_string(&mut self, did_document_stream: Option<&str>) {
        self.did_document_stream = did_document_stream.map(stream::decode);
    }

    /// The data model result this representation was converted from or into, if any.
    pub fn resolve_data_model_result(&self) -> Option<&ResolveDataModelResult> {
        self.resolve_data_model_result.as_deref()
    }

    pub fn set_resolve_data_model_result(
        &mut self,
        resolve_data_model_result: Option<ResolveDataModelResult>,
    ) {
        self.resolve_data_model_result = resolve_data_model_result.map(Box::new);
    }

    pub fn to_resolve_data_model_result(
        &self,
        codecs: &CodecRegistry,
    ) -> Result<ResolveDataModelResult, DidResolutionError> {
        conversion::convert_to_resolve_data_model_result(self, codecs)
    }

    pub fn to_dereference_result(&self) -> DereferenceResult {
        let mut dereference_result = DereferenceResult::default();
        metadata::merge(
            dereference_result.dereferencing_metadata_mut(),
            &self.did_resolution_metadata,
        );
        dereference_result.set_content_stream(self.did_document_stream.clone());
        metadata::merge(
            dereference_result.content_metadata_mut(),
            &self.did_document_metadata,
        );
        dereference_result
    }

    /// Re-derives the document of the attached data model result from this stream, so both
    /// views agree after the stream was edited. No-op without an attached data model result.
    pub fn update_conversion(&mut self, codecs: &CodecRegistry) -> Result<(), DidResolutionError> {
        if self.resolve_data_model_result.is_none() {
            return Ok(());
        }
        let converted = conversion::convert_to_resolve_data_model_result(self, codecs)?;
        if let Some(resolve_data_model_result) = self.resolve_data_model_result.as_mut() {
            resolve_data_model_result.set_did_document(converted.did_document().cloned());
        }
        Ok(())
    }
}

impl DidResult for ResolveRepresentationResult {
    fn function_metadata(&self) -> &Metadata {
        &self.did_resolution_metadata
    }

    fn function_metadata_mut(&mut self) -> &mut Metadata {
        &mut self.did_resolution_metadata
    }

    fn function_content_metadata(&self) -> &Metadata {
        &self.did_document_metadata
    }

    fn function_content_metadata_mut(&mut self) -> &mut Metadata {
        &mut self.did_document_metadata
    }

    fn is_complete(&self) -> bool {
        self.content_type().is_some() && self.did_document_stream.is_some()
    }
}

impl StreamResult for ResolveRepresentationResult {
    fn content_stream(&self) -> Option<&[u8]> {
        self.did_document_stream()
    }

    fn set_content_stream(&mut self, stream: Option<Vec<u8>>) {
        self.set_did_document_stream(stream);
    }
}
