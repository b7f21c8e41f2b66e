pub mod dereferenceable;
pub mod resolvable;
pub mod result;
