//! Foundation helpers shared by every other module.
//!
//! - [`names`] - Namespace separators, qualified-name normalisation and the
//!   output file naming rule
//!
//! This module has NO dependencies on other phpdocmd modules.

pub mod names;

pub use names::{
    FILE_SEPARATOR, NAMESPACE_SEPARATOR, file_name_for, normalize_name, qualify, segments,
};
