//! Pipeline tests
//!
//! End-to-end behaviour of each stage over fixture metadata:
//! - Extraction of classes, members and function files
//! - Inheritance expansion
//! - Cross-reference linking
//! - Namespace index
//! - Page generation on disk

pub mod tests_extraction;
pub mod tests_generate;
pub mod tests_inheritance;
pub mod tests_linking;
