pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod providers;
pub mod router;
pub mod service;
pub mod types;

pub use error::RelayError;
pub use providers::{Provider, ProviderTable, ResponseShape};
pub use service::{Resolution, ResolvedImage, Resolver};
