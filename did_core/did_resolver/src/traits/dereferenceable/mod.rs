pub mod dereferencing_error;
pub mod dereferencing_options;

use async_trait::async_trait;

use self::{
    dereferencing_error::DidDereferencingError, dereferencing_options::DidDereferencingOptions,
};
use crate::result::dereference::DereferenceResult;

#[async_trait]
pub trait DidDereferenceable: Send + Sync {
    async fn dereference(
        &self,
        did_url: &str,
        options: &DidDereferencingOptions,
    ) -> Result<DereferenceResult, DidDereferencingError>;
}

/// Dereferences `did_url`, turning a failure into an error result in the requested content
/// type.
pub async fn dereference_or_error<D>(
    dereferencer: &D,
    did_url: &str,
    options: &DidDereferencingOptions,
) -> DereferenceResult
where
    D: DidDereferenceable + ?Sized,
{
    match dereferencer.dereference(did_url, options).await {
        Ok(result) => result,
        Err(err) => {
            log::debug!("dereference_or_error >> dereferencing {} failed: {}", did_url, err);
            DereferenceResult::make_error_result_from(&err, options.accept())
        }
    }
}
