use std::io::Read;

use display_as_json::Display;
use serde::{Deserialize, Serialize};

use super::resolve_representation::ResolveRepresentationResult;
use crate::{
    conversion::{self, codec::CodecRegistry},
    error::DidResolverError,
    shared_types::{
        did_document::DidDocument,
        error_code::ErrorCode,
        metadata::{self, Metadata},
    },
    traits::{resolvable::resolution_error::DidResolutionError, result::DidResult},
};

/// Result of `resolve`: the DID document in its structured form. The document is absent only
/// in error results.
#[derive(Serialize, Deserialize, Clone, Debug, Default, Display)]
#[serde(rename_all = "camelCase")]
pub struct ResolveDataModelResult {
    #[serde(default, deserialize_with = "metadata::deserialize_nullable")]
    did_resolution_metadata: Metadata,
    #[serde(default)]
    did_document: Option<DidDocument>,
    #[serde(default, deserialize_with = "metadata::deserialize_nullable")]
    did_document_metadata: Metadata,
    #[serde(skip)]
    resolve_representation_result: Option<Box<ResolveRepresentationResult>>,
}

/// The attached representation counterpart is not compared.
impl PartialEq for ResolveDataModelResult {
    fn eq(&self, other: &Self) -> bool {
        self.did_resolution_metadata == other.did_resolution_metadata
            && self.did_document == other.did_document
            && self.did_document_metadata == other.did_document_metadata
    }
}

impl ResolveDataModelResult {
    pub fn build(
        did_resolution_metadata: Metadata,
        did_document: Option<DidDocument>,
        did_document_metadata: Metadata,
    ) -> Self {
        Self {
            did_resolution_metadata,
            did_document,
            did_document_metadata,
            resolve_representation_result: None,
        }
    }

    pub fn make_error_result(
        error: Option<ErrorCode>,
        error_message: Option<&str>,
        did_resolution_metadata: Option<&Metadata>,
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
        log::debug!("Created error resolve result: {}", result);
        result
    }

    pub fn make_error_result_from(err: &DidResolutionError) -> Self {
        Self::make_error_result(
            err.error().cloned(),
            Some(err.message()),
            Some(err.did_resolution_metadata()),
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

    pub fn did_document(&self) -> Option<&DidDocument> {
        self.did_document.as_ref()
    }

    pub fn set_did_document(&mut self, did_document: Option<DidDocument>) {
        self.did_document = did_document;
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

    /// The representation result this data model was converted from or into, if any.
    pub fn resolve_representation_result(&self) -> Option<&ResolveRepresentationResult> {
        self.resolve_representation_result.as_deref()
    }

    pub fn set_resolve_representation_result(
        &mut self,
        resolve_representation_result: Option<ResolveRepresentationResult>,
    ) {
        self.resolve_representation_result = resolve_representation_result.map(Box::new);
    }

    pub fn to_resolve_representation_result(
        &self,
        content_type: &str,
        codecs: &CodecRegistry,
    ) -> Result<ResolveRepresentationResult, DidResolutionError> {
        conversion::convert_to_resolve_representation_result(self, content_type, codecs)
    }

    /// Re-encodes the stream of the attached representation result from this document, in
    /// the content type that representation already has. No-op without an attached
    /// representation result.
    pub fn update_conversion(&mut self, codecs: &CodecRegistry) -> Result<(), DidResolutionError> {
        let Some(content_type) = self
            .resolve_representation_result
            .as_deref()
            .map(|result| result.content_type().map(str::to_string))
        else {
            return Ok(());
        };
        let content_type = content_type.ok_or_else(|| {
            DidResolutionError::new(
                ErrorCode::InternalError,
                "attached representation result has no content type",
            )
        })?;
        let converted =
            conversion::convert_to_resolve_representation_result(self, &content_type, codecs)?;
        if let Some(resolve_representation_result) = self.resolve_representation_result.as_mut() {
            resolve_representation_result
                .set_did_document_stream(converted.did_document_stream().map(<[u8]>::to_vec));
        }
        Ok(())
    }
}

impl DidResult for ResolveDataModelResult {
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

    /// A data model result carries no content type.
    fn is_complete(&self) -> bool {
        self.content_type().is_none() && self.did_document.is_some()
    }
}
