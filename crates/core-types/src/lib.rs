pub mod enums;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::AgeBracket;
pub use structs::{Transaction, month_end};
