pub mod did_document;
pub mod error_code;
pub mod media_type;
pub mod metadata;
