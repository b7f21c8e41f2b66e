use crate::shared_types::{media_type::MediaType, metadata::Metadata};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DidResolutionOptions {
    accept: Option<String>,
    extra: Metadata,
}

impl DidResolutionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    pub fn set_extra(mut self, extra: Metadata) -> Self {
        self.extra = extra;
        self
    }

    pub fn accept(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    /// The requested content type, `application/did+ld+json` when none was given.
    pub fn accept_or_default(&self) -> &str {
        self.accept().unwrap_or(MediaType::DidLdJson.as_str())
    }

    pub fn extra(&self) -> &Metadata {
        &self.extra
    }
}
