//! API constants
//!
//! Video routes are served under a fixed version prefix.

/// Versioned prefix for video routes
pub const API_PREFIX: &str = "/v1";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 25;
/// Largest page size Vimeo accepts for `/me/videos`
pub const MAX_PER_PAGE: u32 = 100;

/// Multipart field carrying the uploaded video
pub const UPLOAD_FIELD: &str = "file";
