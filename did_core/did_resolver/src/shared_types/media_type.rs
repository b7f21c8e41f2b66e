use std::{fmt::Display, str::FromStr};

use crate::error::DidResolverError;

/// Content types with a built-in representation codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaType {
    #[default]
    DidLdJson,
    DidJson,
    DidCbor,
}

impl MediaType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MediaType::DidLdJson => "application/did+ld+json",
            MediaType::DidJson => "application/did+json",
            MediaType::DidCbor => "application/did+cbor",
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = DidResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "application/did+ld+json" => Ok(MediaType::DidLdJson),
            "application/did+json" => Ok(MediaType::DidJson),
            "application/did+cbor" => Ok(MediaType::DidCbor),
            other => Err(DidResolverError::UnsupportedContentType(other.to_string())),
        }
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> Self {
        media_type.as_str().to_string()
    }
}
