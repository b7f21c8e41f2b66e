pub mod resolution_error;
pub mod resolution_options;

use async_trait::async_trait;

use self::{resolution_error::DidResolutionError, resolution_options::DidResolutionOptions};
use crate::{
    conversion::{self, codec::CodecRegistry},
    result::{
        resolve_data_model::ResolveDataModelResult,
        resolve_representation::ResolveRepresentationResult,
    },
};

/// Contract of a DID method driver.
#[async_trait]
pub trait DidResolvable: Send + Sync {
    async fn resolve(
        &self,
        did: &str,
        options: &DidResolutionOptions,
    ) -> Result<ResolveDataModelResult, DidResolutionError>;

    /// Resolves and encodes the document in the content type requested by `options`.
    async fn resolve_representation(
        &self,
        did: &str,
        options: &DidResolutionOptions,
        codecs: &CodecRegistry,
    ) -> Result<ResolveRepresentationResult, DidResolutionError> {
        let resolve_data_model_result = self.resolve(did, options).await?;
        conversion::convert_to_resolve_representation_result(
            &resolve_data_model_result,
            options.accept_or_default(),
            codecs,
        )
    }
}

/// Resolves `did` into a representation result. Never fails: a driver or conversion failure
/// is turned into an error result in the requested content type.
pub async fn resolve_to_representation<R>(
    resolver: &R,
    did: &str,
    options: &DidResolutionOptions,
    codecs: &CodecRegistry,
) -> ResolveRepresentationResult
where
    R: DidResolvable + ?Sized,
{
    match resolver.resolve_representation(did, options, codecs).await {
        Ok(result) => result,
        Err(err) => {
            log::debug!("resolve_to_representation >> resolving {} failed: {}", did, err);
            ResolveRepresentationResult::make_error_result_from(
                &err,
                Some(options.accept_or_default()),
            )
        }
    }
}
