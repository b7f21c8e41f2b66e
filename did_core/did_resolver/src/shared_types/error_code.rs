use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error codes registered in the DID Specification Registries, plus an escape hatch for
/// method-specific codes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidDid,
    InvalidDidUrl,
    InvalidOptions,
    NotFound,
    RepresentationNotSupported,
    MethodNotSupported,
    InternalError,
    InvalidPublicKey,
    InvalidPublicKeyLength,
    InvalidPublicKeyType,
    UnsupportedPublicKeyType,
    NotAllowedVerificationMethodType,
    NotAllowedKeyType,
    NotAllowedMethod,
    NotAllowedCertificate,
    NotAllowedLocalDuplicateKey,
    NotAllowedLocalDerivedKey,
    NotAllowedGlobalDuplicateKey,
    Other(String),
}

impl ErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::InvalidDid => "invalidDid",
            ErrorCode::InvalidDidUrl => "invalidDidUrl",
            ErrorCode::InvalidOptions => "invalidOptions",
            ErrorCode::NotFound => "notFound",
            ErrorCode::RepresentationNotSupported => "representationNotSupported",
            ErrorCode::MethodNotSupported => "methodNotSupported",
            ErrorCode::InternalError => "internalError",
            ErrorCode::InvalidPublicKey => "invalidPublicKey",
            ErrorCode::InvalidPublicKeyLength => "invalidPublicKeyLength",
            ErrorCode::InvalidPublicKeyType => "invalidPublicKeyType",
            ErrorCode::UnsupportedPublicKeyType => "unsupportedPublicKeyType",
            ErrorCode::NotAllowedVerificationMethodType => "notAllowedVerificationMethodType",
            ErrorCode::NotAllowedKeyType => "notAllowedKeyType",
            ErrorCode::NotAllowedMethod => "notAllowedMethod",
            ErrorCode::NotAllowedCertificate => "notAllowedCertificate",
            ErrorCode::NotAllowedLocalDuplicateKey => "notAllowedLocalDuplicateKey",
            ErrorCode::NotAllowedLocalDerivedKey => "notAllowedLocalDerivedKey",
            ErrorCode::NotAllowedGlobalDuplicateKey => "notAllowedGlobalDuplicateKey",
            ErrorCode::Other(code) => code,
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = match s {
            "invalidDid" => ErrorCode::InvalidDid,
            "invalidDidUrl" => ErrorCode::InvalidDidUrl,
            "invalidOptions" => ErrorCode::InvalidOptions,
            "notFound" => ErrorCode::NotFound,
            "representationNotSupported" => ErrorCode::RepresentationNotSupported,
            "methodNotSupported" => ErrorCode::MethodNotSupported,
            "internalError" => ErrorCode::InternalError,
            "invalidPublicKey" => ErrorCode::InvalidPublicKey,
            "invalidPublicKeyLength" => ErrorCode::InvalidPublicKeyLength,
            "invalidPublicKeyType" => ErrorCode::InvalidPublicKeyType,
            "unsupportedPublicKeyType" => ErrorCode::UnsupportedPublicKeyType,
            "notAllowedVerificationMethodType" => ErrorCode::NotAllowedVerificationMethodType,
            "notAllowedKeyType" => ErrorCode::NotAllowedKeyType,
            "notAllowedMethod" => ErrorCode::NotAllowedMethod,
            "notAllowedCertificate" => ErrorCode::NotAllowedCertificate,
            "notAllowedLocalDuplicateKey" => ErrorCode::NotAllowedLocalDuplicateKey,
            "notAllowedLocalDerivedKey" => ErrorCode::NotAllowedLocalDerivedKey,
            "notAllowedGlobalDuplicateKey" => ErrorCode::NotAllowedGlobalDuplicateKey,
            other => ErrorCode::Other(other.to_string()),
        };
        Ok(code)
    }
}

impl From<&str> for ErrorCode {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(code) => code,
            Err(never) => match never {},
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ErrorCode::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip_through_strings() {
        for code in [
            ErrorCode::InvalidDid,
            ErrorCode::NotFound,
            ErrorCode::RepresentationNotSupported,
            ErrorCode::MethodNotSupported,
            ErrorCode::InternalError,
            ErrorCode::NotAllowedGlobalDuplicateKey,
        ] {
            assert_eq!(ErrorCode::from(code.as_str()), code);
        }
    }

    #[test]
    fn test_unknown_code_is_kept_verbatim() {
        let code = ErrorCode::from("deactivatedByController");
        assert_eq!(code, ErrorCode::Other("deactivatedByController".to_string()));
        assert_eq!(code.to_string(), "deactivatedByController");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ErrorCode::InternalError).unwrap();
        assert_eq!(json, "\"internalError\"");
        let code: ErrorCode = serde_json::from_str("\"notFound\"").unwrap();
        assert_eq!(code, ErrorCode::NotFound);
    }
}
