use did_resolver::{
    conversion::{convert_to_resolve_data_model_result, convert_to_resolve_representation_result},
    CodecRegistry, DidDocument, DidResult, Metadata, ResolveDataModelResult, ResolveRepresentationResult,
};
use pretty_assertions::assert_eq;
use serde_json::json;

const DID_DOC_JSON: &str = r##"
{
  "@context": [
    "https://www.w3.org/ns/did/v1",
    "https://w3id.org/security/suites/ed25519-2020/v1"
  ],
  "id": "did:example:123456789abcdefghi",
  "verificationMethod": [
    {
      "id": "did:example:123456789abcdefghi#keys-1",
      "type": "Ed25519VerificationKey2020",
      "controller": "did:example:123456789abcdefghi",
      "publicKeyMultibase": "zH3C2AVvLMv6gmMNam3uVAjZpfkcJCwDwnZn6z3wXmqPV"
    }
  ],
  "authentication": [
    "did:example:123456789abcdefghi#keys-1"
  ],
  "service": [
    {
      "id": "did:example:123456789abcdefghi#linked-domain",
      "type": "LinkedDomains",
      "serviceEndpoint": "https://bar.example.com"
    }
  ]
}
"##;

fn resolve_data_model_result() -> ResolveDataModelResult {
    let did_document: DidDocument = serde_json::from_str(DID_DOC_JSON).unwrap();
    let mut did_document_metadata = Metadata::new();
    did_document_metadata.insert("versionId".to_string(), json!("3"));
    ResolveDataModelResult::build(Metadata::new(), Some(did_document), did_document_metadata)
}

fn round_trip(content_type: &str) {
    let codecs = CodecRegistry::default();
    let source = resolve_data_model_result();

    let representation = source
        .to_resolve_representation_result(content_type, &codecs)
        .unwrap();
    assert_eq!(representation.content_type(), Some(content_type));
    assert!(representation.is_complete());

    let back = representation.to_resolve_data_model_result(&codecs).unwrap();
    assert_eq!(back.did_document(), source.did_document());
    assert_eq!(back.did_document_metadata(), source.did_document_metadata());
    assert_eq!(back.content_type(), None);
    assert!(back.is_complete());
}

#[test]
fn test_round_trip_ld_json() {
    round_trip("application/did+ld+json");
}

#[test]
fn test_round_trip_cbor() {
    round_trip("application/did+cbor");
}

#[test]
fn test_json_representation_drops_context() {
    let codecs = CodecRegistry::default();
    let representation = convert_to_resolve_representation_result(
        &resolve_data_model_result(),
        "application/did+json",
        &codecs,
    )
    .unwrap();

    let back = convert_to_resolve_data_model_result(&representation, &codecs).unwrap();

    let did_document = back.did_document().unwrap();
    assert_eq!(did_document.context(), None);
    assert_eq!(did_document.id(), "did:example:123456789abcdefghi");
    assert_eq!(did_document.service().len(), 1);
}

#[test]
fn test_representation_edit_is_propagated_to_data_model() {
    let codecs = CodecRegistry::default();
    let mut representation = resolve_data_model_result()
        .to_resolve_representation_result("application/did+ld+json", &codecs)
        .unwrap();

    representation.set_did_document_stream(Some(
        br#"{"@context":"https://www.w3.org/ns/did/v1","id":"did:example:updated"}"#.to_vec(),
    ));
    representation.update_conversion(&codecs).unwrap();

    let data_model = representation.resolve_data_model_result().unwrap();
    assert_eq!(data_model.did_document().unwrap().id(), "did:example:updated");
}

#[test]
fn test_data_model_edit_is_propagated_to_representation() {
    let codecs = CodecRegistry::default();
    let mut representation = ResolveRepresentationResult::build(
        Metadata::new(),
        Some(br#"{"id":"did:example:123"}"#.to_vec()),
        Metadata::new(),
    );
    representation.set_content_type(Some("application/did+json"));

    let mut data_model = representation.to_resolve_data_model_result(&codecs).unwrap();
    data_model.set_did_document(Some(DidDocument::new("did:example:456")));
    data_model.update_conversion(&codecs).unwrap();

    let attached = data_model.resolve_representation_result().unwrap();
    assert_eq!(attached.did_document_stream(), Some(&br#"{"id":"did:example:456"}"#[..]));
    assert_eq!(attached.content_type(), Some("application/did+json"));
}

#[test]
fn test_update_conversion_without_counterpart_is_noop() {
    let codecs = CodecRegistry::default();
    let mut representation = ResolveRepresentationResult::default();
    representation.update_conversion(&codecs).unwrap();
    assert_eq!(representation, ResolveRepresentationResult::default());

    let mut data_model = ResolveDataModelResult::default();
    data_model.update_conversion(&codecs).unwrap();
    assert_eq!(data_model, ResolveDataModelResult::default());
}

#[test]
fn test_converted_results_equal_their_json_round_trip() {
    let codecs = CodecRegistry::default();
    let representation = resolve_data_model_result()
        .to_resolve_representation_result("application/did+json", &codecs)
        .unwrap();
    assert!(representation.resolve_data_model_result().is_some());

    let round_tripped =
        ResolveRepresentationResult::from_json(&representation.to_json().unwrap()).unwrap();
    assert_eq!(round_tripped.resolve_data_model_result(), None);
    assert_eq!(round_tripped, representation);

    let data_model = representation.to_resolve_data_model_result(&codecs).unwrap();
    assert!(data_model.resolve_representation_result().is_some());

    let round_tripped =
        ResolveDataModelResult::from_json(&data_model.to_json().unwrap()).unwrap();
    assert_eq!(round_tripped, data_model);
}
