//! Inheritance expansion over the class registry.
//!
//! Every class-like definition receives the methods and non-private
//! properties of its ancestors that it does not declare itself. Members keep
//! the `defined_by` of the class that originally declared them.
//!
//! Ancestors are walked depth-first in declaration order: `extends` first,
//! then `implements`. A closer ancestor always wins over a more distant one.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::model::{ClassDefinition, Method, Property};
use crate::registry::Registry;

/// Counts of what one [`expand`] call added.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpansionStats {
    /// Definitions that received at least one member.
    pub classes_expanded: usize,
    pub methods_added: usize,
    pub properties_added: usize,
}

impl ExpansionStats {
    /// True when nothing was added.
    pub fn is_empty(&self) -> bool {
        self.methods_added == 0 && self.properties_added == 0
    }
}

/// Members collected from the ancestors of one definition.
#[derive(Default)]
struct Inherited {
    methods: IndexMap<String, Method>,
    properties: IndexMap<String, Property>,
}

/// Copy inherited members into every definition of `registry`.
///
/// Existing entries are never overwritten, so running this twice adds
/// nothing the second time. Unknown ancestors are skipped; cycles in the
/// declared hierarchy terminate.
pub fn expand(registry: &mut Registry<ClassDefinition>) -> ExpansionStats {
    let mut stats = ExpansionStats::default();
    let names: Vec<String> = registry.names().map(str::to_string).collect();

    for name in names {
        let mut visited = HashSet::new();
        visited.insert(name.clone());

        let Some(class) = registry.get(&name) else {
            continue;
        };
        let inherited = collect_inherited(registry, class, &mut visited);

        let Some(class) = registry.get_mut(&name) else {
            continue;
        };
        let before = (class.methods.len(), class.properties.len());

        for (member, method) in inherited.methods {
            class.methods.entry(member).or_insert(method);
        }
        for (member, property) in inherited.properties {
            class.properties.entry(member).or_insert(property);
        }

        let methods_added = class.methods.len() - before.0;
        let properties_added = class.properties.len() - before.1;
        if methods_added + properties_added > 0 {
            tracing::trace!(
                "{} inherits {} methods, {} properties",
                name,
                methods_added,
                properties_added
            );
            stats.classes_expanded += 1;
            stats.methods_added += methods_added;
            stats.properties_added += properties_added;
        }
    }

    tracing::debug!(
        "Inheritance expanded {} definitions (+{} methods, +{} properties)",
        stats.classes_expanded,
        stats.methods_added,
        stats.properties_added
    );
    stats
}

/// Gather the members `class` would receive from its ancestors.
///
/// Entries already pending come from a closer ancestor and are kept. A name
/// an ancestor declares itself hides the same name further up its chain.
fn collect_inherited(
    registry: &Registry<ClassDefinition>,
    class: &ClassDefinition,
    visited: &mut HashSet<String>,
) -> Inherited {
    let mut inherited = Inherited::default();

    for ancestor_name in class.ancestors() {
        if !visited.insert(ancestor_name.to_string()) {
            continue;
        }
        let Some(ancestor) = registry.get(ancestor_name) else {
            tracing::trace!(
                "{}: ancestor {} is not documented; skipped",
                class.name,
                ancestor_name
            );
            continue;
        };

        for (member, method) in &ancestor.methods {
            inherited
                .methods
                .entry(member.clone())
                .or_insert_with(|| method.clone());
        }
        for (member, property) in &ancestor.properties {
            if !property.visibility.is_inheritable() {
                continue;
            }
            inherited
                .properties
                .entry(member.clone())
                .or_insert_with(|| property.clone());
        }

        let farther = collect_inherited(registry, ancestor, visited);
        for (member, method) in farther.methods {
            if !ancestor.methods.contains_key(&member) {
                inherited.methods.entry(member).or_insert(method);
            }
        }
        for (member, property) in farther.properties {
            if !ancestor.properties.contains_key(&member) {
                inherited.properties.entry(member).or_insert(property);
            }
        }
    }

    inherited
}
