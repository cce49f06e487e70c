//! Vimeo Gateway API Library
//!
//! HTTP handlers, error rendering and application setup. The binary in
//! `main.rs` only loads configuration and hands over to [`setup`].

mod api_doc;
pub mod constants;
pub mod error;
mod handlers;
pub mod setup;
pub mod state;
mod telemetry;
mod utils;

pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
