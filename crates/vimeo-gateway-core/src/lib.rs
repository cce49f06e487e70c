//! Vimeo Gateway Core Library
//!
//! This crate provides the domain models, error taxonomy, and configuration
//! shared by the provider client and the HTTP API.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
