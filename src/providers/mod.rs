//! Provider descriptions: which upstream serves which categories, and how.
//!
//! Layout:
//! - `table.rs`: `Provider`, `ResponseShape` and the immutable `ProviderTable`
//! - `catalog.rs`: the built-in table and its category lists

pub mod catalog;
pub mod table;

pub use catalog::default_table;
pub use table::{
    DEFAULT_TIMEOUT, NOT_SAFE_CLASS, Provider, ProviderTable, ResponseShape, SAFE_CLASS,
    class_key,
};
