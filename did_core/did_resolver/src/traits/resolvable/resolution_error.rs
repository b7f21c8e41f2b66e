use thiserror::Error;

use crate::{
    error::DidResolverError,
    result::resolve_representation::ResolveRepresentationResult,
    shared_types::{error_code::ErrorCode, metadata::Metadata},
};

/// Failure raised by a resolver. Carries whatever resolution metadata was collected before
/// the failure and, optionally, an error result the resolver already encoded.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct DidResolutionError {
    error: Option<ErrorCode>,
    message: String,
    did_resolution_metadata: Metadata,
    resolve_representation_result: Option<Box<ResolveRepresentationResult>>,
}

impl DidResolutionError {
    pub fn new(error: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: Some(error),
            message: message.into(),
            did_resolution_metadata: Metadata::new(),
            resolve_representation_result: None,
        }
    }

    /// A failure without an error code; error results built from it report `internalError`.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            error: None,
            message: message.into(),
            did_resolution_metadata: Metadata::new(),
            resolve_representation_result: None,
        }
    }

    pub fn with_did_resolution_metadata(mut self, did_resolution_metadata: Metadata) -> Self {
        self.did_resolution_metadata = did_resolution_metadata;
        self
    }

    pub fn with_resolve_representation_result(
        mut self,
        resolve_representation_result: ResolveRepresentationResult,
    ) -> Self {
        self.resolve_representation_result = Some(Box::new(resolve_representation_result));
        self
    }

    pub fn error(&self) -> Option<&ErrorCode> {
        self.error.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn did_resolution_metadata(&self) -> &Metadata {
        &self.did_resolution_metadata
    }

    pub fn resolve_representation_result(&self) -> Option<&ResolveRepresentationResult> {
        self.resolve_representation_result.as_deref()
    }
}

impl From<DidResolverError> for DidResolutionError {
    fn from(error: DidResolverError) -> Self {
        let code = match error {
            DidResolverError::UnsupportedContentType(_) => ErrorCode::RepresentationNotSupported,
            _ => ErrorCode::InternalError,
        };
        DidResolutionError::new(code, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::shared_types::media_type::MediaType;

    #[test]
    fn test_from_unsupported_content_type() {
        let err: DidResolutionError = MediaType::from_str("text/turtle").unwrap_err().into();
        assert_eq!(err.error(), Some(&ErrorCode::RepresentationNotSupported));
        assert_eq!(err.to_string(), "Unsupported content type: text/turtle");
    }

    #[test]
    fn test_from_other_errors_is_internal_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DidResolutionError = DidResolverError::from(json_err).into();
        assert_eq!(err.error(), Some(&ErrorCode::InternalError));
        assert!(err.message().starts_with("JSON error:"));
    }
}
