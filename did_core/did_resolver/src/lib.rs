pub mod conversion;
pub mod error;
pub mod result;
pub mod shared_types;
pub mod traits;

pub use conversion::codec::CodecRegistry;
pub use error::DidResolverError;
pub use result::{
    dereference::DereferenceResult, resolution::ResolutionResult,
    resolve_data_model::ResolveDataModelResult,
    resolve_representation::ResolveRepresentationResult,
};
pub use shared_types::{
    did_document::DidDocument, error_code::ErrorCode, media_type::MediaType, metadata::Metadata,
};
pub use traits::result::{DidResult, StreamResult};
