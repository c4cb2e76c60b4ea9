pub mod provider_api;

pub use provider_api::ProviderApi;
