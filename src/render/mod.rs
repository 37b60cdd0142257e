//! Markdown rendering of the API model.
//!
//! One page per class-like definition, one per function file and a single
//! index page. At component level each class page becomes a summary and
//! every method, property and constant gets a page of its own (see
//! [`component`]). Visibility filters apply here, after inheritance, so
//! hiding members never changes what a class inherits.

pub mod component;
mod page;

use page::Page;

pub use component::{ComponentKind, ComponentPage};

use crate::api::ApiModel;
use crate::index::NamespaceTree;
use crate::link::{LinkTemplate, Linker};
use crate::model::{
    Argument, ClassDefinition, Constant, Definition, FunctionFile, Member, Method, Property,
    ReturnInfo,
};
use crate::options::Options;

/// Renders pages for one [`ApiModel`].
pub struct MarkdownRenderer<'a> {
    model: &'a ApiModel,
    options: &'a Options,
    template: LinkTemplate,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new(model: &'a ApiModel, options: &'a Options) -> Self {
        Self {
            model,
            options,
            template: options.link_template(),
        }
    }

    fn class_linker(&self) -> Linker<'_, ClassDefinition> {
        Linker::new(self.model.classes(), &self.template)
    }

    fn function_linker(&self) -> Linker<'_, FunctionFile> {
        Linker::new(self.model.functions(), &self.template)
    }

    // ========================================================================
    // CLASS PAGES
    // ========================================================================

    /// Render the page for one class, interface or trait.
    pub fn render_class(&self, class: &ClassDefinition) -> String {
        let linker = self.class_linker();
        let mut page = Page::new();

        self.render_class_header(&mut page, &linker, class);

        let constants: Vec<&Constant> = self.visible(class.constants.values());
        if !constants.is_empty() {
            page.heading(2, "Constants");
            for constant in constants {
                self.render_member_header(&mut page, 3, constant.name(), constant);
                self.render_constant_body(&mut page, &linker, class, constant);
            }
        }

        let properties: Vec<&Property> = self.visible(class.properties.values());
        if !properties.is_empty() {
            page.heading(2, "Properties");
            for property in properties {
                self.render_member_header(&mut page, 3, property.name(), property);
                self.render_property_body(&mut page, &linker, class, property);
            }
        }

        let methods: Vec<&Method> = self.visible(class.methods.values());
        if !methods.is_empty() {
            page.heading(2, "Methods");
            for method in methods {
                self.render_member_header(&mut page, 3, method.name(), method);
                self.render_method_body(&mut page, &linker, class, method);
            }
        }

        page.finish()
    }

    /// Title, kind note, names, ancestors and descriptions.
    fn render_class_header(
        &self,
        page: &mut Page,
        linker: &Linker<'_, ClassDefinition>,
        class: &ClassDefinition,
    ) {
        page.heading(1, &class.short_name);
        page.paragraph(&class_note(class));

        page.field("Full name", &format!("`\\{}`", class.name));
        if !class.namespace.is_empty() {
            page.field("Namespace", &format!("`\\{}`", class.namespace));
        }
        if !class.extends.is_empty() {
            let label = if class.is_interface() { "Extends" } else { "Parent class" };
            page.field(label, &self.link_list(linker, &class.extends));
        }
        if !class.implements.is_empty() {
            page.field("Implements", &self.link_list(linker, &class.implements));
        }

        page.paragraph(&class.summary);
        page.paragraph(&class.long_description);
    }

    fn render_constant_body(
        &self,
        page: &mut Page,
        linker: &Linker<'_, ClassDefinition>,
        class: &ClassDefinition,
        constant: &Constant,
    ) {
        page.paragraph(&constant.description);
        self.render_defined_in(page, linker, class, constant);
    }

    fn render_property_body(
        &self,
        page: &mut Page,
        linker: &Linker<'_, ClassDefinition>,
        class: &ClassDefinition,
        property: &Property,
    ) {
        page.paragraph(&property.description);
        page.field("Visibility", &modifiers(property.visibility.as_str(), property.is_static));
        page.field("Type", &linker.resolve(&property.type_name, None));
        self.render_defined_in(page, linker, class, property);
    }

    fn render_method_body(
        &self,
        page: &mut Page,
        linker: &Linker<'_, ClassDefinition>,
        class: &ClassDefinition,
        method: &Method,
    ) {
        page.paragraph(&method.description);

        let mut flags = modifiers(method.visibility.as_str(), method.is_static);
        if method.is_abstract {
            flags.push_str(" abstract");
        }
        if method.is_final {
            flags.push_str(" final");
        }
        page.field("Visibility", &flags);

        self.render_arguments(page, linker, &method.arguments);
        self.render_returns(page, linker, &method.returns);

        if !method.see.is_empty() {
            // references without a class part are relative to the declaring class
            let mut see: Vec<String> = method
                .see
                .iter()
                .map(|reference| linker.resolve_see(reference, Some(&method.defined_by)))
                .collect();
            if self.options.sort_see {
                see.sort();
            }
            page.blank();
            page.line("**See also**:");
            page.blank();
            for reference in see {
                page.line(&format!("* {reference}"));
            }
            page.blank();
        }

        self.render_defined_in(page, linker, class, method);
    }

    /// Member heading followed by its signature.
    fn render_member_header(&self, page: &mut Page, level: usize, title: &str, member: &dyn Member) {
        let mut title = title.to_string();
        if member.is_deprecated() {
            title.push_str(" *(deprecated)*");
        }
        page.heading(level, &title);
        page.code_block("php", member.signature());
    }

    /// Link back to the declaring class for inherited members.
    fn render_defined_in(
        &self,
        page: &mut Page,
        linker: &Linker<'_, ClassDefinition>,
        class: &ClassDefinition,
        member: &dyn Member,
    ) {
        if member.defined_by() != class.name {
            page.field("Defined in", &linker.resolve(member.defined_by(), None));
        }
    }

    // ========================================================================
    // FUNCTION PAGES
    // ========================================================================

    /// Render the page for the free functions of one source file.
    pub fn render_functions(&self, file: &FunctionFile) -> String {
        let linker = self.class_linker();
        let mut page = Page::new();

        page.heading(1, &format!("Functions in {}", file.path));
        page.field("Source", &format!("`{}`", file.path));

        let mut functions: Vec<_> = file.functions.values().collect();
        if self.options.sort_index {
            functions.sort_by(|a, b| a.name.cmp(&b.name));
        }

        for function in functions {
            self.render_member_header(&mut page, 3, function.name(), function);
            page.paragraph(&function.description);
            self.render_arguments(&mut page, &linker, &function.arguments);
            self.render_returns(&mut page, &linker, &function.returns);
        }

        page.finish()
    }

    // ========================================================================
    // INDEX PAGE
    // ========================================================================

    /// Render the index of every class and function file.
    pub fn render_index(&self) -> String {
        let mut page = Page::new();
        page.heading(1, "API Index");

        let classes = NamespaceTree::build(self.model.classes().names());
        if !classes.is_empty() {
            page.heading(2, "Classes");
            let linker = self.class_linker();
            self.render_tree(&mut page, &classes, |name| linker.link(name));
        }

        let functions = NamespaceTree::build(self.model.functions().names());
        if !functions.is_empty() {
            page.heading(2, "Functions");
            let linker = self.function_linker();
            self.render_tree(&mut page, &functions, |name| linker.link(name));
        }

        page.finish()
    }

    fn render_tree(
        &self,
        page: &mut Page,
        tree: &NamespaceTree,
        link: impl Fn(&str) -> Option<String>,
    ) {
        for entry in tree.entries(self.options.sort_index) {
            let indent = "  ".repeat(entry.depth);
            let text = match link(&entry.full_name) {
                Some(target) => format!("[{}]({target})", entry.segment),
                None => entry.segment.clone(),
            };
            page.line(&format!("{indent}* {text}"));
        }
        page.blank();
    }

    // ========================================================================
    // SHARED PIECES
    // ========================================================================

    /// Members passing the visibility filters, sorted when requested.
    fn visible<'m, M: Member>(&self, members: impl Iterator<Item = &'m M>) -> Vec<&'m M> {
        let mut members: Vec<&M> = members
            .filter(|m| self.options.is_visible(m.visibility()))
            .collect();
        if self.options.sort_index {
            members.sort_by(|a, b| a.name().cmp(b.name()));
        }
        members
    }

    fn link_list<D: Definition>(&self, linker: &Linker<'_, D>, names: &[String]) -> String {
        names
            .iter()
            .map(|name| linker.resolve(name, None))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn render_arguments(
        &self,
        page: &mut Page,
        linker: &Linker<'_, ClassDefinition>,
        arguments: &[Argument],
    ) {
        if arguments.is_empty() {
            return;
        }
        let rows: Vec<Vec<String>> = arguments
            .iter()
            .map(|arg| {
                let type_name = if arg.type_name.is_empty() {
                    String::new()
                } else {
                    linker.resolve(&arg.type_name, None)
                };
                let mut name = format!("`{}`", arg.name);
                if let Some(default) = &arg.default {
                    name.push_str(&format!(" = `{default}`"));
                }
                vec![
                    name,
                    type_name,
                    arg.description.clone().unwrap_or_default(),
                ]
            })
            .collect();
        page.table(&["Argument", "Type", "Description"], &rows);
    }

    fn render_returns(
        &self,
        page: &mut Page,
        linker: &Linker<'_, ClassDefinition>,
        returns: &ReturnInfo,
    ) {
        let mut text = linker.resolve(&returns.type_name, None);
        if let Some(description) = &returns.description {
            text.push_str(" - ");
            text.push_str(description);
        }
        page.field("Returns", &text);
    }
}

/// Italic line describing the kind of entity.
fn class_note(class: &ClassDefinition) -> String {
    let mut words = Vec::new();
    if class.is_abstract {
        words.push("abstract");
    }
    if class.is_final {
        words.push("final");
    }
    words.push(class.kind.as_str());

    let mut note = format!("*{}*", words.join(" "));
    if class.is_deprecated {
        note.push_str(" **Deprecated**");
    }
    note
}

fn modifiers(visibility: &str, is_static: bool) -> String {
    if is_static {
        format!("{visibility} static")
    } else {
        visibility.to_string()
    }
}
