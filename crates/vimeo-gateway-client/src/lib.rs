//! HTTP client for the Vimeo REST API.
//!
//! [`VideoProvider`] is the seam the API layer depends on; [`VimeoClient`] is
//! the production implementation. Provider payloads are decoded into the raw
//! types in [`types`] and normalized into the core models before they leave
//! this crate.

pub mod error;
pub mod provider;
pub mod types;
pub mod vimeo;

pub use error::{ProviderError, ProviderResult};
pub use provider::VideoProvider;
pub use vimeo::VimeoClient;
