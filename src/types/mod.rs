pub mod files;
pub mod payloads;
pub mod responses;
