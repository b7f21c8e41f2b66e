pub mod codec;

use self::codec::CodecRegistry;
use crate::{
    result::{
        resolve_data_model::ResolveDataModelResult,
        resolve_representation::ResolveRepresentationResult,
    },
    shared_types::{
        error_code::ErrorCode,
        metadata::{Metadata, CONTENT_TYPE},
    },
    traits::{resolvable::resolution_error::DidResolutionError, result::DidResult},
};

fn unsupported(
    codecs: &CodecRegistry,
    content_type: &str,
    did_resolution_metadata: &Metadata,
) -> DidResolutionError {
    DidResolutionError::new(
        codecs.unsupported_error().clone(),
        format!("No representation codec for content type {content_type}"),
    )
    .with_did_resolution_metadata(did_resolution_metadata.clone())
}

/// Encodes the document of `resolve_data_model_result` as `content_type`. Both metadata maps
/// are copied and `contentType` is recorded. A result without a document, i.e. an error
/// result, gets an empty stream.
pub fn convert_to_resolve_representation_result(
    resolve_data_model_result: &ResolveDataModelResult,
    content_type: &str,
    codecs: &CodecRegistry,
) -> Result<ResolveRepresentationResult, DidResolutionError> {
    let did_resolution_metadata = resolve_data_model_result.did_resolution_metadata();
    let codec = codecs
        .get(content_type)
        .ok_or_else(|| unsupported(codecs, content_type, did_resolution_metadata))?;

    let did_document_stream = match resolve_data_model_result.did_document() {
        Some(did_document) => codec.produce(did_document).map_err(|err| {
            log::warn!(
                "convert_to_resolve_representation_result >> cannot produce {}: {}",
                content_type,
                err
            );
            DidResolutionError::new(
                ErrorCode::InternalError,
                format!("Cannot produce {content_type} representation: {err}"),
            )
            .with_did_resolution_metadata(did_resolution_metadata.clone())
        })?,
        None => Vec::new(),
    };
    log::trace!(
        "convert_to_resolve_representation_result >> produced {} bytes of {}",
        did_document_stream.len(),
        content_type
    );

    let mut resolve_representation_result = ResolveRepresentationResult::build(
        did_resolution_metadata.clone(),
        Some(did_document_stream),
        resolve_data_model_result.did_document_metadata().clone(),
    );
    resolve_representation_result.set_content_type(Some(content_type));

    let mut source = resolve_data_model_result.clone();
    source.set_resolve_representation_result(None);
    resolve_representation_result.set_resolve_data_model_result(Some(source));

    Ok(resolve_representation_result)
}

/// Decodes the stream of `resolve_representation_result` with the codec of its recorded
/// content type. `contentType` is dropped from the copied resolution metadata, since a data
/// model result carries none. An empty stream yields no document.
pub fn convert_to_resolve_data_model_result(
    resolve_representation_result: &ResolveRepresentationResult,
    codecs: &CodecRegistry,
) -> Result<ResolveDataModelResult, DidResolutionError> {
    let did_resolution_metadata = resolve_representation_result.did_resolution_metadata();
    let content_type = resolve_representation_result.content_type().unwrap_or_default();
    let codec = codecs
        .get(content_type)
        .ok_or_else(|| unsupported(codecs, content_type, did_resolution_metadata))?;

    let did_document = match resolve_representation_result.did_document_stream() {
        Some(stream) if !stream.is_empty() => Some(codec.consume(stream).map_err(|err| {
            log::warn!(
                "convert_to_resolve_data_model_result >> cannot consume {}: {}",
                content_type,
                err
            );
            DidResolutionError::new(
                ErrorCode::InternalError,
                format!("Cannot consume {content_type} representation: {err}"),
            )
            .with_did_resolution_metadata(did_resolution_metadata.clone())
        })?),
        _ => None,
    };

    let mut data_model_resolution_metadata = did_resolution_metadata.clone();
    data_model_resolution_metadata.remove(CONTENT_TYPE);

    let mut resolve_data_model_result = ResolveDataModelResult::build(
        data_model_resolution_metadata,
        did_document,
        resolve_representation_result.did_document_metadata().clone(),
    );

    let mut source = resolve_representation_result.clone();
    source.set_resolve_data_model_result(None);
    resolve_data_model_result.set_resolve_representation_result(Some(source));

    Ok(resolve_data_model_result)
}
