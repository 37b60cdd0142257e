//! Cross-references from type expressions to generated documents.

use crate::base::names;
use crate::model::{ClassDefinition, Definition};
use crate::registry::Registry;

/// Placeholder replaced by the flattened definition name.
pub const CLASS_PLACEHOLDER: &str = "%c";

/// Separator between a class and a member in `@see` references.
pub const MEMBER_SEPARATOR: &str = "::";

/// Template turning a definition name into a link target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkTemplate(String);

impl Default for LinkTemplate {
    fn default() -> Self {
        Self(format!("{CLASS_PLACEHOLDER}{}", names::DOCUMENT_EXTENSION))
    }
}

impl LinkTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `App\Model\User` with `%c.md` gives `App-Model-User.md`.
    pub fn link_for(&self, name: &str) -> String {
        self.link_for_stem(&names::flatten(names::normalize_name(name)))
    }

    /// Substitute an already flattened document stem.
    pub fn link_for_stem(&self, stem: &str) -> String {
        self.0.replace(CLASS_PLACEHOLDER, stem)
    }
}

/// Resolves type references against one registry.
pub struct Linker<'a, D: Definition> {
    registry: &'a Registry<D>,
    template: &'a LinkTemplate,
}

impl<'a, D: Definition> Linker<'a, D> {
    pub fn new(registry: &'a Registry<D>, template: &'a LinkTemplate) -> Self {
        Self { registry, template }
    }

    /// Render a `|`-separated type expression, linking every alternative
    /// that names a registered definition.
    ///
    /// Unknown alternatives are emitted trimmed of whitespace and the
    /// leading separator. With `label`, every link shows that text instead
    /// of the alternative's own name.
    pub fn resolve(&self, type_ref: &str, label: Option<&str>) -> String {
        type_ref
            .split('|')
            .map(|alternative| self.resolve_one(alternative, label))
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Link target for a registered name.
    pub fn link(&self, name: &str) -> Option<String> {
        let name = names::normalize_name(name);
        self.registry
            .contains(name)
            .then(|| self.template.link_for(name))
    }

    fn resolve_one(&self, alternative: &str, label: Option<&str>) -> String {
        let name = names::normalize_name(alternative);
        match self.link(name) {
            Some(target) => format!("[{}]({})", label.unwrap_or(name), target),
            None => name.to_string(),
        }
    }
}

impl Linker<'_, ClassDefinition> {
    /// Render one `@see` reference.
    ///
    /// `Class::member()`, `Class::$property` and `Class::CONSTANT` link to
    /// the class page when the class is documented, labelled with the short
    /// class name and the member. A bare `member()` or `::member` refers to
    /// `context`. Anything else resolves like a type expression.
    pub fn resolve_see(&self, reference: &str, context: Option<&str>) -> String {
        let reference = reference.trim();
        let (class_part, member_part) = match reference.split_once(MEMBER_SEPARATOR) {
            Some((class, member)) => (class, member),
            None if reference.ends_with("()") => ("", reference),
            None => return self.resolve(reference, None),
        };

        let class_name = match names::normalize_name(class_part) {
            "" => context.map(names::normalize_name).unwrap_or(""),
            name => name,
        };
        let member_part = member_part.trim();

        let Some(class) = self.registry.get(class_name) else {
            return format!("{}{MEMBER_SEPARATOR}{member_part}", names::normalize_name(class_part))
                .trim_start_matches(MEMBER_SEPARATOR)
                .to_string();
        };

        let label = match member_label(class, member_part) {
            Some(member) => format!("{}{MEMBER_SEPARATOR}{member}", class.short_name),
            None => {
                tracing::trace!("@see {} names no member of {}", reference, class.name);
                format!("{}{MEMBER_SEPARATOR}{member_part}", class.short_name)
            }
        };
        format!("[{label}]({})", self.template.link_for(&class.name))
    }
}

/// Display form of a member reference, when `class` has such a member.
fn member_label(class: &ClassDefinition, member: &str) -> Option<String> {
    let bare = member.trim_end_matches("()");

    if class.methods.contains_key(bare) {
        return Some(format!("{bare}()"));
    }
    let variable = if bare.starts_with('$') {
        bare.to_string()
    } else {
        format!("${bare}")
    };
    if class.properties.contains_key(&variable) {
        return Some(variable);
    }
    class.constants.contains_key(bare).then(|| bare.to_string())
}
