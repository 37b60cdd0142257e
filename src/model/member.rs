//! Member records: methods, properties, constants and free functions.

use std::fmt;

// ============================================================================
// VISIBILITY
// ============================================================================

/// Declared visibility of a class member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Parse the metadata's `visibility` attribute. Unknown or missing values
    /// fall back to public, which is what PHP assumes for undeclared members.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "protected" => Self::Protected,
            "private" => Self::Private,
            _ => Self::Public,
        }
    }

    /// Keyword as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }

    /// Private members never cross an inheritance boundary.
    pub fn is_inheritable(&self) -> bool {
        !matches!(self, Self::Private)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ARGUMENTS AND RETURN VALUES
// ============================================================================

/// One argument of a method or function, after `@param` overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Argument {
    /// Variable name including the `$`.
    pub name: String,
    /// Type expression; empty when neither declared nor documented.
    pub type_name: String,
    /// `@param` description, if any.
    pub description: Option<String>,
    /// Default value expression, if any.
    pub default: Option<String>,
}

impl Argument {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            description: None,
            default: None,
        }
    }

    /// `"type $name"`, or just `"$name"` for an untyped argument.
    pub fn display(&self) -> String {
        if self.type_name.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.type_name, self.name)
        }
    }
}

/// Join arguments as they appear inside a signature's parentheses.
pub fn arguments_to_string(arguments: &[Argument]) -> String {
    arguments
        .iter()
        .map(Argument::display)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolved return information for a method or function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnInfo {
    /// Return type; `mixed` when nothing is known.
    pub type_name: String,
    /// `@return` description, if any.
    pub description: Option<String>,
}

impl Default for ReturnInfo {
    fn default() -> Self {
        Self {
            type_name: super::MIXED.to_string(),
            description: None,
        }
    }
}

// ============================================================================
// CLASS MEMBERS
// ============================================================================

/// A method declared on (or inherited by) a class-like definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
    pub is_deprecated: bool,
    pub returns: ReturnInfo,
    pub arguments: Vec<Argument>,
    /// `ReturnType Class::method(Type $arg)`.
    pub signature: String,
    /// Summary and long description separated by a blank line.
    pub description: String,
    /// `@see` references, as written.
    pub see: Vec<String>,
    /// Qualified name of the declaring class.
    pub defined_by: String,
}

/// A property declared on (or inherited by) a class-like definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    /// Variable name including the `$`.
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_deprecated: bool,
    pub type_name: String,
    pub default: Option<String>,
    /// `visibility type $name[ = default]`.
    pub signature: String,
    pub description: String,
    pub defined_by: String,
}

/// A class constant. Constants are never inherited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constant {
    pub name: String,
    pub value: String,
    /// `const NAME = value`.
    pub signature: String,
    pub description: String,
    pub is_deprecated: bool,
    pub defined_by: String,
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// A free function declared in a source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub is_deprecated: bool,
    pub returns: ReturnInfo,
    pub arguments: Vec<Argument>,
    /// `ReturnType name(Type $arg)`.
    pub signature: String,
    pub description: String,
    /// Path of the declaring source file.
    pub defined_by: String,
}

/// Common view over every member kind, used by the renderer.
pub trait Member {
    fn name(&self) -> &str;
    fn signature(&self) -> &str;
    fn description(&self) -> &str;
    fn defined_by(&self) -> &str;
    fn is_deprecated(&self) -> bool;

    /// Constants and functions have no declared visibility.
    fn visibility(&self) -> Visibility {
        Visibility::Public
    }
}

macro_rules! impl_member {
    (@accessors) => {
        fn name(&self) -> &str {
            &self.name
        }
        fn signature(&self) -> &str {
            &self.signature
        }
        fn description(&self) -> &str {
            &self.description
        }
        fn defined_by(&self) -> &str {
            &self.defined_by
        }
        fn is_deprecated(&self) -> bool {
            self.is_deprecated
        }
    };
    (with visibility: $($ty:ty),* $(,)?) => {
        $(
            impl Member for $ty {
                impl_member!(@accessors);

                fn visibility(&self) -> Visibility {
                    self.visibility
                }
            }
        )*
    };
    ($($ty:ty),* $(,)?) => {
        $(
            impl Member for $ty {
                impl_member!(@accessors);
            }
        )*
    };
}

impl_member!(Constant, Function);
impl_member!(with visibility: Method, Property);
