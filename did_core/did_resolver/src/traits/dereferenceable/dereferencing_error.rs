use thiserror::Error;

use crate::{
    result::dereference::DereferenceResult,
    shared_types::{error_code::ErrorCode, metadata::Metadata},
};

#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct DidDereferencingError {
    error: Option<ErrorCode>,
    message: String,
    dereferencing_metadata: Metadata,
    dereference_result: Option<Box<DereferenceResult>>,
}

impl DidDereferencingError {
    pub fn new(error: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: Some(error),
            message: message.into(),
            dereferencing_metadata: Metadata::new(),
            dereference_result: None,
        }
    }

    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            error: None,
            message: message.into(),
            dereferencing_metadata: Metadata::new(),
            dereference_result: None,
        }
    }

    pub fn with_dereferencing_metadata(mut self, dereferencing_metadata: Metadata) -> Self {
        self.dereferencing_metadata = dereferencing_metadata;
        self
    }

    pub fn with_dereference_result(mut self, dereference_result: DereferenceResult) -> Self {
        self.dereference_result = Some(Box::new(dereference_result));
        self
    }

    pub fn error(&self) -> Option<&ErrorCode> {
        self.error.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn dereferencing_metadata(&self) -> &Metadata {
        &self.dereferencing_metadata
    }

    pub fn dereference_result(&self) -> Option<&DereferenceResult> {
        self.dereference_result.as_deref()
    }
}
