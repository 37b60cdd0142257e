//! Cross-reference linking against an expanded registry.

use phpdocmd::{LinkTemplate, Linker};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::helpers::fixtures::*;
use crate::helpers::model_helpers::*;

#[rstest]
#[case("int", "int")]
#[case("\\Zoo\\Food", "[Zoo\\Food](Zoo-Food.md)")]
#[case("\\Zoo\\Food|null", "[Zoo\\Food](Zoo-Food.md)|null")]
#[case("string | \\Zoo\\Dog", "string|[Zoo\\Dog](Zoo-Dog.md)")]
#[case("\\Other\\Thing", "Other\\Thing")]
fn test_resolve_default_template(#[case] type_ref: &str, #[case] expected: &str) {
    let model = model(ANIMALS);
    let template = LinkTemplate::default();
    let linker = Linker::new(model.classes(), &template);
    assert_eq!(linker.resolve(type_ref, None), expected);
}

#[test]
fn test_resolve_with_custom_template_and_label() {
    let model = model(ANIMALS);
    let template = LinkTemplate::new("https://docs.example.com/%c");
    let linker = Linker::new(model.classes(), &template);

    assert_eq!(
        linker.resolve("\\Zoo\\Dog", Some("Dog")),
        "[Dog](https://docs.example.com/Zoo-Dog)"
    );
}

#[test]
fn test_label_applies_to_each_known_alternative() {
    let model = model(ANIMALS);
    let template = LinkTemplate::default();
    let linker = Linker::new(model.classes(), &template);

    assert_eq!(
        linker.resolve("\\Zoo\\Dog|int|\\Zoo\\Food", Some("x")),
        "[x](Zoo-Dog.md)|int|[x](Zoo-Food.md)"
    );
}

#[rstest]
#[case("\\App\\Model\\Identifiable::id()", "[Identifiable::id()](App-Model-Identifiable.md)")]
#[case("\\App\\Model\\User::$count", "[User::$count](App-Model-User.md)")]
#[case("\\App\\Lib\\Util", "App\\Lib\\Util")]
#[case("\\Lib\\Util", "[Lib\\Util](Lib-Util.md)")]
#[case("id()", "[User::id()](App-Model-User.md)")]
fn test_resolve_see_in_library(#[case] reference: &str, #[case] expected: &str) {
    let model = model(LIBRARY);
    let template = LinkTemplate::default();
    let linker = Linker::new(model.classes(), &template);
    assert_eq!(linker.resolve_see(reference, Some("App\\Model\\User")), expected);
}
