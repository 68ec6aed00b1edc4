//! watermark/crates/gateway-adapters/src/lib.rs
//!
//! Outbound HTTP adapters: the `reqwest`-backed implementations of the
//! `CmsGateway` and `MediaProbe` ports.

pub mod probe;
pub mod rest;

pub use probe::HttpMediaProbe;
pub use rest::RestCmsGateway;
