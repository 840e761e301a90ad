//! Cross-crate integration tests for the Confluence workspace live in `tests/`.
