use serde::Serialize;

use crate::{
    error::DidResolverError,
    shared_types::metadata::{self, Metadata, CONTENT_TYPE, ERROR, ERROR_MESSAGE},
};

/// Behavior shared by every result kind: access to the function metadata (resolution or
/// dereferencing), the content metadata (document or content), and the `error`,
/// `errorMessage` and `contentType` entries kept inside the function metadata.
pub trait DidResult {
    fn function_metadata(&self) -> &Metadata;

    fn function_metadata_mut(&mut self) -> &mut Metadata;

    fn function_content_metadata(&self) -> &Metadata;

    fn function_content_metadata_mut(&mut self) -> &mut Metadata;

    fn is_complete(&self) -> bool;

    fn error(&self) -> Option<&str> {
        metadata::get_str(self.function_metadata(), ERROR)
    }

    fn set_error(&mut self, error: Option<&str>) {
        metadata::set_str(self.function_metadata_mut(), ERROR, error);
    }

    fn error_message(&self) -> Option<&str> {
        metadata::get_str(self.function_metadata(), ERROR_MESSAGE)
    }

    fn set_error_message(&mut self, error_message: Option<&str>) {
        metadata::set_str(self.function_metadata_mut(), ERROR_MESSAGE, error_message);
    }

    fn is_error_result(&self) -> bool {
        self.error().is_some()
    }

    fn content_type(&self) -> Option<&str> {
        metadata::get_str(self.function_metadata(), CONTENT_TYPE)
    }

    /// `None` removes the entry instead of storing `null`.
    fn set_content_type(&mut self, content_type: Option<&str>) {
        metadata::set_str(self.function_metadata_mut(), CONTENT_TYPE, content_type);
    }

    fn to_map(&self) -> Result<Metadata, DidResolverError>
    where
        Self: Serialize + Sized,
    {
        Ok(serde_json::from_value(serde_json::to_value(self)?)?)
    }

    fn to_json(&self) -> Result<String, DidResolverError>
    where
        Self: Serialize + Sized,
    {
        Ok(serde_json::to_string(self)?)
    }
}

/// A result whose payload is a byte stream in a specific content type.
pub trait StreamResult: DidResult {
    fn content_stream(&self) -> Option<&[u8]>;

    fn set_content_stream(&mut self, stream: Option<Vec<u8>>);
}
