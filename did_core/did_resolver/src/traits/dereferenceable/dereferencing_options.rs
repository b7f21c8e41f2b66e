use crate::shared_types::metadata::Metadata;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DidDereferencingOptions {
    accept: Option<String>,
    extra: Metadata,
}

impl DidDereferencingOptions {
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

    pub fn extra(&self) -> &Metadata {
        &self.extra
    }
}
