use did_resolver::{
    DidResult, ErrorCode, Metadata, ResolveRepresentationResult, StreamResult,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn metadata(value: serde_json::Value) -> Metadata {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_json_round_trip_of_json_stream() {
    let result = ResolveRepresentationResult::build(
        metadata(json!({ "contentType": "application/did+ld+json", "duration": 42 })),
        Some(br#"{"@context":"https://www.w3.org/ns/did/v1","id":"did:example:123"}"#.to_vec()),
        metadata(json!({ "created": "2024-01-01T00:00:00Z", "deactivated": false })),
    );

    let json = result.to_json().unwrap();
    assert_eq!(
        json,
        r#"{"didResolutionMetadata":{"contentType":"application/did+ld+json","duration":42},"didDocumentStream":"{\"@context\":\"https://www.w3.org/ns/did/v1\",\"id\":\"did:example:123\"}","didDocumentMetadata":{"created":"2024-01-01T00:00:00Z","deactivated":false}}"#
    );
    assert_eq!(ResolveRepresentationResult::from_json(&json).unwrap(), result);
}

#[test]
fn test_json_round_trip_of_binary_stream() {
    let stream = vec![0xa2, 0x62, 0x69, 0x64, 0x6f, 0x00, 0xff, 0x10];
    let mut result = ResolveRepresentationResult::build(Metadata::new(), Some(stream), Metadata::new());
    result.set_content_type(Some("application/did+cbor"));

    let json = result.to_json().unwrap();
    assert!(json.contains(r#""didDocumentStream":"a26269646f00ff10""#));
    assert_eq!(ResolveRepresentationResult::from_json(&json).unwrap(), result);
}

#[test]
fn test_json_round_trip_of_missing_stream() {
    let result = ResolveRepresentationResult::build(
        metadata(json!({ "error": "notFound" })),
        None,
        Metadata::new(),
    );

    let round_tripped =
        ResolveRepresentationResult::from_json(&result.to_json().unwrap()).unwrap();

    assert_eq!(round_tripped, result);
    assert_eq!(round_tripped.did_document_stream(), Some(&[][..]));
}

#[test]
fn test_from_reader() {
    let json = r#"{"didResolutionMetadata":{"contentType":"application/did+json"},"didDocumentStream":"{\"id\":\"did:example:123\"}","didDocumentMetadata":{}}"#;

    let result = ResolveRepresentationResult::from_reader(json.as_bytes()).unwrap();

    assert_eq!(result.did_document_stream(), Some(&br#"{"id":"did:example:123"}"#[..]));
    assert!(result.is_complete());
}

#[test]
fn test_malformed_json_is_reported() {
    assert!(ResolveRepresentationResult::from_json("{\"didResolutionMetadata\":").is_err());
}

#[test]
fn test_to_map_keeps_field_order() {
    let result = ResolveRepresentationResult::make_error_result(
        Some(ErrorCode::InvalidDid),
        Some("not a DID"),
        None,
        Some("application/did+json"),
    );

    let map = result.to_map().unwrap();

    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["didResolutionMetadata", "didDocumentStream", "didDocumentMetadata"]
    );
    assert_eq!(
        map["didResolutionMetadata"],
        json!({ "error": "invalidDid", "errorMessage": "not a DID", "contentType": "application/did+json" })
    );
}

#[test]
fn test_display_is_json() {
    let result = ResolveRepresentationResult::default();
    assert_eq!(result.to_string(), result.to_json().unwrap());
}

#[test]
fn test_stream_result_view() {
    fn clear_stream(result: &mut impl StreamResult) {
        result.set_content_stream(None);
    }

    let mut representation = ResolveRepresentationResult::build(
        Metadata::new(),
        Some(b"xyz".to_vec()),
        Metadata::new(),
    );
    let mut dereference = representation.to_dereference_result();
    assert_eq!(dereference.content_stream(), Some(&b"xyz"[..]));

    clear_stream(&mut representation);
    clear_stream(&mut dereference);

    assert_eq!(representation.did_document_stream(), None);
    assert_eq!(dereference.content_stream(), None);
}

#[test]
fn test_stream_starting_with_json_is_emitted_as_text() {
    let stream = b"{\"id\":\"did:example:123\"}\n{\"id\":\"did:example:456\"}".to_vec();
    let result = ResolveRepresentationResult::build(Metadata::new(), Some(stream), Metadata::new());

    assert_eq!(
        result.did_document_stream_as_string().as_deref(),
        Some("{\"id\":\"did:example:123\"}\n{\"id\":\"did:example:456\"}")
    );
}
