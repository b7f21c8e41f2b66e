pub mod dereference;
pub mod resolution;
pub mod resolve_data_model;
pub mod resolve_representation;
pub mod stream;
