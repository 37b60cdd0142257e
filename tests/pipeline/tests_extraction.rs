//! Extraction of definitions from structure.xml.

use phpdocmd::{ClassKind, FunctionExtractor, Registry, Visibility};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::helpers::fixtures::*;
use crate::helpers::model_helpers::*;

// ============================================================================
// CLASS-LIKE ENTITIES
// ============================================================================

#[test]
fn test_registry_keys_are_normalized_names() {
    let classes = raw_classes(LIBRARY);
    let names: Vec<_> = classes.names().collect();
    assert_eq!(
        names,
        vec![
            "App\\Model\\Identifiable",
            "App\\Model\\Timestamps",
            "App\\Model\\User",
            "App\\Model\\Post",
            "Lib\\Util",
        ]
    );
}

#[rstest]
#[case("App\\Model\\Identifiable", ClassKind::Interface)]
#[case("App\\Model\\Timestamps", ClassKind::Trait)]
#[case("App\\Model\\User", ClassKind::Class)]
fn test_class_kinds(#[case] name: &str, #[case] kind: ClassKind) {
    let classes = raw_classes(LIBRARY);
    assert_eq!(classes.get(name).unwrap().kind, kind);
}

#[test]
fn test_class_header() {
    let classes = raw_classes(ANIMALS);
    let animal = classes.get("Zoo\\Animal").unwrap();

    assert_eq!(animal.short_name, "Animal");
    assert_eq!(animal.namespace, "Zoo");
    assert_eq!(animal.file_name, "Zoo-Animal.md");
    assert_eq!(animal.summary, "Base of every animal.");
    assert_eq!(animal.long_description, "Animals eat and speak.");
    assert!(animal.is_abstract);
    assert!(!animal.is_final);

    let dog = classes.get("Zoo\\Dog").unwrap();
    assert!(dog.is_final);
    assert_eq!(dog.extends, vec!["Zoo\\Animal".to_string()]);
}

#[test]
fn test_implements_keeps_unknown_names() {
    let classes = raw_classes(LIBRARY);
    let user = classes.get("App\\Model\\User").unwrap();
    assert_eq!(
        user.implements,
        vec![
            "App\\Model\\Identifiable".to_string(),
            "Vendor\\Serializable".to_string()
        ]
    );
}

// ============================================================================
// MEMBERS
// ============================================================================

#[test]
fn test_param_tag_overrides_declared_type() {
    let classes = raw_classes(ANIMALS);
    let eat = &classes.get("Zoo\\Animal").unwrap().methods["eat"];

    assert_eq!(eat.signature, "bool Zoo\\Animal::eat(\\Zoo\\Food|null $food)");
    assert_eq!(eat.arguments[0].description.as_deref(), Some("What to eat"));
    assert_eq!(eat.description, "Eat something.");
    assert_eq!(eat.returns.type_name, "bool");
}

#[test]
fn test_abstract_method_flags() {
    let classes = raw_classes(ANIMALS);
    let speak = &classes.get("Zoo\\Animal").unwrap().methods["speak"];
    assert!(speak.is_abstract);
    assert!(!speak.is_static);
    assert_eq!(speak.visibility, Visibility::Public);
    assert_eq!(speak.signature, "string Zoo\\Animal::speak()");
}

#[test]
fn test_property_types_from_var_tag() {
    let classes = raw_classes(BASE_DERIVED);
    let base = classes.get("Base").unwrap();

    assert_eq!(base.properties["$a"].signature, "protected int $a");
    // nested <type> inside the tag
    assert_eq!(base.properties["$b"].type_name, "string");
    assert_eq!(base.constants["LIMIT"].signature, "const LIMIT = 10");
}

#[test]
fn test_property_without_type_is_mixed() {
    let classes = raw_classes(LIBRARY);
    let count = &classes.get("App\\Model\\User").unwrap().properties["$count"];
    assert_eq!(count.signature, "public mixed $count = 0");
    assert!(count.is_static);
}

#[test]
fn test_class_deprecation_reaches_members() {
    let classes = raw_classes(LIBRARY);
    let user = classes.get("App\\Model\\User").unwrap();
    assert!(user.is_deprecated);
    assert!(user.methods["name"].is_deprecated);
    assert!(user.properties["$count"].is_deprecated);

    let post = classes.get("App\\Model\\Post").unwrap();
    assert!(!post.is_deprecated);
}

#[test]
fn test_see_references_collected() {
    let classes = raw_classes(LIBRARY);
    let name = &classes.get("App\\Model\\User").unwrap().methods["name"];
    assert_eq!(
        name.see,
        vec![
            "\\App\\Model\\Identifiable::id()".to_string(),
            "\\App\\Lib\\Util".to_string()
        ]
    );
}

// ============================================================================
// FUNCTION FILES
// ============================================================================

#[test]
fn test_function_files() {
    let functions = Registry::build(&tree(LIBRARY), &FunctionExtractor);
    assert_eq!(functions.len(), 1);

    let file = functions.get("src\\functions\\strings").unwrap();
    assert_eq!(file.file_name, "src-functions-strings.md");

    let slugify = &file.functions["slugify"];
    assert_eq!(slugify.signature, "string slugify(string $text, string $separator)");
    assert_eq!(slugify.arguments[1].default.as_deref(), Some("'-'"));
    assert_eq!(slugify.defined_by, "src/functions/strings.php");
}

#[test]
fn test_malformed_metadata_is_rejected() {
    let result = phpdocmd::MetadataTree::parse(b"<project><file path=\"a.php\"></project>");
    assert!(result.is_err());
}
