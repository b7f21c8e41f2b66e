use display_as_json::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::metadata::Metadata;

pub const DID_CORE_CONTEXT: &str = "https://www.w3.org/ns/did/v1";

/// Structured view of a DID document. Only `id` is required; members this crate does not
/// interpret are kept verbatim in insertion order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, Display)]
#[serde(rename_all = "camelCase")]
pub struct DidDocument {
    #[serde(rename = "@context", skip_serializing_if = "Option::is_none")]
    context: Option<Value>,
    id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    verification_method: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    service: Vec<Value>,
    #[serde(flatten)]
    extra: Metadata,
}

impl DidDocument {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn builder(id: impl Into<String>) -> DidDocumentBuilder {
        DidDocumentBuilder::new(id)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn context(&self) -> Option<&Value> {
        self.context.as_ref()
    }

    pub fn set_context(&mut self, context: Option<Value>) {
        self.context = context;
    }

    pub fn verification_method(&self) -> &[Value] {
        self.verification_method.as_ref()
    }

    pub fn add_verification_method(&mut self, verification_method: Value) {
        self.verification_method.push(verification_method);
    }

    pub fn service(&self) -> &[Value] {
        self.service.as_ref()
    }

    pub fn add_service(&mut self, service: Value) {
        self.service.push(service);
    }

    pub fn extra_field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    pub fn set_extra_field(&mut self, key: String, value: Value) {
        self.extra.insert(key, value);
    }
}

#[derive(Default, Debug)]
pub struct DidDocumentBuilder {
    context: Option<Value>,
    id: String,
    verification_method: Vec<Value>,
    service: Vec<Value>,
    extra: Metadata,
}

impl DidDocumentBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }

    pub fn add_verification_method(mut self, verification_method: Value) -> Self {
        self.verification_method.push(verification_method);
        self
    }

    pub fn add_service(mut self, service: Value) -> Self {
        self.service.push(service);
        self
    }

    pub fn add_extra_field(mut self, key: String, value: Value) -> Self {
        self.extra.insert(key, value);
        self
    }

    pub fn build(self) -> DidDocument {
        DidDocument {
            context: self.context,
            id: self.id,
            verification_method: self.verification_method,
            service: self.service,
            extra: self.extra,
        }
    }
}
