use std::io::Read;

use display_as_json::Display;
use serde::{Deserialize, Serialize};

use crate::{
    error::DidResolverError,
    shared_types::{
        did_document::DidDocument,
        metadata::{self, Metadata},
    },
};

/// Older, flat resolution result shape, kept for callers that still expect it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, Display)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    #[serde(default)]
    redirect: Option<String>,
    #[serde(default)]
    did_document: Option<DidDocument>,
    #[serde(default, deserialize_with = "metadata::deserialize_nullable")]
    resolver_metadata: Metadata,
    #[serde(default, deserialize_with = "metadata::deserialize_nullable")]
    method_metadata: Metadata,
}

impl ResolutionResult {
    pub const MIME_TYPE: &'static str = "application/json";

    pub fn build(
        redirect: Option<String>,
        did_document: Option<DidDocument>,
        resolver_metadata: Metadata,
        method_metadata: Metadata,
    ) -> Self {
        Self {
            redirect,
            did_document,
            resolver_metadata,
            method_metadata,
        }
    }

    pub fn from_did_document_with_metadata(
        did_document: DidDocument,
        resolver_metadata: Metadata,
        method_metadata: Metadata,
    ) -> Self {
        Self::build(None, Some(did_document), resolver_metadata, method_metadata)
    }

    pub fn from_did_document(did_document: DidDocument) -> Self {
        Self::build(None, Some(did_document), Metadata::new(), Metadata::new())
    }

    pub fn from_json(json: &str) -> Result<Self, DidResolverError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, DidResolverError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json(&self) -> Result<String, DidResolverError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn redirect(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    pub fn set_redirect(&mut self, redirect: Option<String>) {
        self.redirect = redirect;
    }

    pub fn did_document(&self) -> Option<&DidDocument> {
        self.did_document.as_ref()
    }

    pub fn set_did_document(&mut self, did_document: Option<DidDocument>) {
        self.did_document = did_document;
    }

    pub fn resolver_metadata(&self) -> &Metadata {
        &self.resolver_metadata
    }

    pub fn set_resolver_metadata(&mut self, resolver_metadata: Metadata) {
        self.resolver_metadata = resolver_metadata;
    }

    pub fn method_metadata(&self) -> &Metadata {
        &self.method_metadata
    }

    pub fn set_method_metadata(&mut self, method_metadata: Metadata) {
        self.method_metadata = method_metadata;
    }
}

