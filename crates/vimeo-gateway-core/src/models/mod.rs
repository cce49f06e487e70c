//! Data models for the application
//!
//! Every model is built per request from a live provider response and never persisted.

mod video;

pub use video::*;
