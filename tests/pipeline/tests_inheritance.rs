//! Inheritance expansion over fixture hierarchies.

use phpdocmd::expand;
use pretty_assertions::assert_eq;

use crate::helpers::fixtures::*;
use crate::helpers::model_helpers::*;

#[test]
fn test_dog_inherits_eat_but_keeps_own_speak() {
    let model = model(ANIMALS);
    let dog = class(&model, "Zoo\\Dog");

    let methods: Vec<_> = dog.methods.keys().map(String::as_str).collect();
    assert_eq!(methods, vec!["speak", "eat"]);
    assert_eq!(dog.methods["speak"].defined_by, "Zoo\\Dog");
    assert_eq!(dog.methods["eat"].defined_by, "Zoo\\Animal");
    // the inherited signature still names the declaring class
    assert_eq!(
        dog.methods["eat"].signature,
        "bool Zoo\\Animal::eat(\\Zoo\\Food|null $food)"
    );
}

#[test]
fn test_private_property_stays_with_base() {
    let model = model(BASE_DERIVED);
    let derived = class(&model, "Derived");

    assert!(derived.properties.contains_key("$a"));
    assert!(!derived.properties.contains_key("$b"));
    assert!(derived.constants.is_empty());
}

#[test]
fn test_inherited_members_came_from_an_ancestor() {
    let raw = raw_classes(ANIMALS);
    let model = model(ANIMALS);

    for class in model.classes().values() {
        let before = raw.get(&class.name).unwrap();
        for method in class.inherited_methods() {
            assert!(!before.methods.contains_key(&method.name));
            assert!(raw.get(&method.defined_by).is_some());
        }
    }
}

#[test]
fn test_second_expansion_adds_nothing() {
    let mut classes = raw_classes(LIBRARY);
    let first = expand(&mut classes);
    let second = expand(&mut classes);

    assert_eq!(first.methods_added, 1);
    assert!(second.is_empty());
}

#[test]
fn test_cyclic_hierarchy_terminates() {
    let model = model(CYCLE);
    assert_eq!(class(&model, "A").methods["fromB"].defined_by, "B");
    assert_eq!(class(&model, "B").methods["fromA"].defined_by, "A");
}

#[test]
fn test_interface_methods_reach_implementors() {
    let model = model(LIBRARY);
    let user = class(&model, "App\\Model\\User");
    assert_eq!(user.methods["id"].defined_by, "App\\Model\\Identifiable");
}
