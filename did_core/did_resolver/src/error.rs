use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DidResolverError {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("CBOR encoding error: {0}")]
    CborEncodingError(String),
    #[error("CBOR decoding error: {0}")]
    CborDecodingError(String),
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),
}
