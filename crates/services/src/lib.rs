//! watermark/crates/services/src/lib.rs
//!
//! Application services: the validate-then-submit workflows, the cached
//! catalog, and tag handling. Everything network-shaped goes through the
//! `domains` ports, so every service here is testable against mocks.

pub mod catalog;
pub mod messages;
pub mod tags;
pub mod validator;

pub use catalog::Catalog;
pub use messages::MessageService;
pub use tags::{parse_tag_input, TagService};
pub use validator::{DraftValidator, MediaRules};
