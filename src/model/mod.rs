//! Definition model for API metadata.
//!
//! ```text
//! Registry<ClassDefinition>
//! └── ClassDefinition (class / interface / trait)
//!     ├── methods:    IndexMap<name, Method>    (own + inherited)
//!     ├── properties: IndexMap<name, Property>  (own + inherited non-private)
//!     └── constants:  IndexMap<name, Constant>  (own only)
//!
//! Registry<FunctionFile>
//! └── FunctionFile (one source file)
//!     └── functions:  IndexMap<name, Function>
//! ```
//!
//! Every member carries `defined_by`, the qualified name of the entity that
//! declared it, which survives inheritance unchanged.

mod definition;
mod member;

pub use definition::{ClassDefinition, ClassKind, Definition, FunctionFile};
pub use member::{
    Argument, Constant, Function, Member, Method, Property, ReturnInfo, Visibility,
    arguments_to_string,
};

/// Placeholder type used when neither a declaration nor a docblock says more.
pub const MIXED: &str = "mixed";
