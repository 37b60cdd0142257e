//! Component-level pages: one per method, property and constant.
//!
//! A component page is named after its class, its kind and its own name,
//! with the `$` of property names dropped: `Zoo\Dog::eat()` is written to
//! `Zoo-Dog-method-eat.md`.

use super::MarkdownRenderer;
use super::page::Page;
use crate::base::names;
use crate::index::NamespaceTree;
use crate::link::Linker;
use crate::model::{ClassDefinition, Member};

/// What a component page documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Method,
    Property,
    Constant,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::Property => "property",
            Self::Constant => "constant",
        }
    }

    /// How the member is written after `Class::`.
    fn display_name(&self, name: &str) -> String {
        match self {
            Self::Method => format!("{name}()"),
            Self::Property | Self::Constant => name.to_string(),
        }
    }
}

/// Document stem of a component page, without extension.
pub fn component_stem(class: &str, kind: ComponentKind, member: &str) -> String {
    format!(
        "{}-{}-{}",
        names::flatten(names::normalize_name(class)),
        kind.as_str(),
        member.trim_start_matches('$')
    )
}

/// One rendered component page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentPage {
    pub kind: ComponentKind,
    /// Member name as declared.
    pub member: String,
    pub file_name: String,
    pub content: String,
}

impl MarkdownRenderer<'_> {
    fn component_link(&self, class: &ClassDefinition, kind: ComponentKind, member: &str) -> String {
        self.template.link_for_stem(&component_stem(&class.name, kind, member))
    }

    /// Summary page for a class at component level: the class header and a
    /// linked list of its visible members.
    pub fn render_class_summary(&self, class: &ClassDefinition) -> String {
        let linker = self.class_linker();
        let mut page = Page::new();

        self.render_class_header(&mut page, &linker, class);

        use ComponentKind::{Constant, Method, Property};
        let sections = [
            (
                "Constants",
                self.member_lines(class, Constant, self.visible(class.constants.values()), true),
            ),
            (
                "Properties",
                self.member_lines(class, Property, self.visible(class.own_properties()), true),
            ),
            (
                "Inherited properties",
                self.member_lines(
                    class,
                    Property,
                    self.visible(class.inherited_properties()),
                    true,
                ),
            ),
            ("Methods", self.member_lines(class, Method, self.visible(class.own_methods()), true)),
            (
                "Inherited methods",
                self.member_lines(class, Method, self.visible(class.inherited_methods()), true),
            ),
        ];

        for (title, lines) in sections {
            if lines.is_empty() {
                continue;
            }
            page.heading(2, title);
            for line in lines {
                page.line(&line);
            }
            page.blank();
        }

        page.finish()
    }

    /// `* [name](link)` for each member, followed by the first line of its
    /// description when `with_summary` is set.
    fn member_lines<M: Member>(
        &self,
        class: &ClassDefinition,
        kind: ComponentKind,
        members: Vec<&M>,
        with_summary: bool,
    ) -> Vec<String> {
        members
            .into_iter()
            .map(|member| {
                let link = self.component_link(class, kind, member.name());
                let mut line = format!("* [{}]({link})", kind.display_name(member.name()));
                let summary = member.description().lines().next().unwrap_or_default().trim();
                if with_summary && !summary.is_empty() {
                    line.push_str(": ");
                    line.push_str(summary);
                }
                line
            })
            .collect()
    }

    /// One page per visible method, property and constant of `class`.
    pub fn render_components(&self, class: &ClassDefinition) -> Vec<ComponentPage> {
        let linker = self.class_linker();
        let mut pages = Vec::new();

        for constant in self.visible(class.constants.values()) {
            let kind = ComponentKind::Constant;
            let content = self.component_page(&linker, class, kind, constant, |page| {
                self.render_constant_body(page, &linker, class, constant)
            });
            pages.push(self.component(class, kind, constant.name(), content));
        }
        for property in self.visible(class.properties.values()) {
            let kind = ComponentKind::Property;
            let content = self.component_page(&linker, class, kind, property, |page| {
                self.render_property_body(page, &linker, class, property)
            });
            pages.push(self.component(class, kind, property.name(), content));
        }
        for method in self.visible(class.methods.values()) {
            let kind = ComponentKind::Method;
            let content = self.component_page(&linker, class, kind, method, |page| {
                self.render_method_body(page, &linker, class, method)
            });
            pages.push(self.component(class, kind, method.name(), content));
        }

        pages
    }

    fn component_page(
        &self,
        linker: &Linker<'_, ClassDefinition>,
        class: &ClassDefinition,
        kind: ComponentKind,
        member: &dyn Member,
        body: impl FnOnce(&mut Page),
    ) -> String {
        let mut page = Page::new();
        let title = format!("{}::{}", class.short_name, kind.display_name(member.name()));
        self.render_member_header(&mut page, 1, &title, member);
        page.field("Class", &linker.resolve(&class.name, None));
        body(&mut page);
        page.finish()
    }

    fn component(
        &self,
        class: &ClassDefinition,
        kind: ComponentKind,
        member: &str,
        content: String,
    ) -> ComponentPage {
        ComponentPage {
            kind,
            member: member.to_string(),
            file_name: format!(
                "{}{}",
                component_stem(&class.name, kind, member),
                names::DOCUMENT_EXTENSION
            ),
            content,
        }
    }

    /// Index for component level: the namespace tree with every class's
    /// visible members listed beneath it, then the function files.
    pub fn render_component_index(&self) -> String {
        let mut page = Page::new();
        page.heading(1, "API Index");

        let classes = NamespaceTree::build(self.model.classes().names());
        if !classes.is_empty() {
            page.heading(2, "Classes");
            let linker = self.class_linker();

            for entry in classes.entries(self.options.sort_index) {
                let indent = "  ".repeat(entry.depth);
                let Some(class) = self.model.classes().get(&entry.full_name) else {
                    page.line(&format!("{indent}* {}", entry.segment));
                    continue;
                };
                let target = linker
                    .link(&class.name)
                    .unwrap_or_else(|| self.template.link_for(&class.name));
                page.line(&format!("{indent}* [{}]({target})", entry.segment));

                let nested = "  ".repeat(entry.depth + 1);
                let constants = self.visible(class.constants.values());
                let properties = self.visible(class.properties.values());
                let methods = self.visible(class.methods.values());
                let members = [
                    self.member_lines(class, ComponentKind::Constant, constants, false),
                    self.member_lines(class, ComponentKind::Property, properties, false),
                    self.member_lines(class, ComponentKind::Method, methods, false),
                ];
                for line in members.into_iter().flatten() {
                    page.line(&format!("{nested}{line}"));
                }
            }
            page.blank();
        }

        let functions = NamespaceTree::build(self.model.functions().names());
        if !functions.is_empty() {
            page.heading(2, "Functions");
            let linker = self.function_linker();
            self.render_tree(&mut page, &functions, |name| linker.link(name));
        }

        page.finish()
    }
}
