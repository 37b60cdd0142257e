//! Shared helpers for integration tests.

pub mod fixtures;
pub mod model_helpers;
