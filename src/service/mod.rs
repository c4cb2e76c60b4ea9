pub mod commands;
pub mod file_store;
pub mod mock_fs;
pub mod resolver;

pub use file_store::FileStore;
pub use resolver::{Resolution, ResolvedImage, Resolver};
