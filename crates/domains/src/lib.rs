//! watermark/crates/domains/src/lib.rs
//!
//! The central domain logic and interface definitions for the Watermark
//! CMS client.

pub mod error;
pub mod models;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;
