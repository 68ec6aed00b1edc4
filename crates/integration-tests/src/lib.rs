//! Cross-crate integration tests for the Watermark client; see `tests/`.
