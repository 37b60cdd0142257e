//! End-to-end generation into a temporary directory.

use std::fs;

use phpdocmd::{GenerateError, Generator, Level, Options};
use pretty_assertions::assert_eq;

use crate::helpers::fixtures::*;

fn write_input(dir: &tempfile::TempDir, xml: &str) -> std::path::PathBuf {
    let path = dir.path().join("structure.xml");
    fs::write(&path, xml).unwrap();
    path
}

#[test]
fn test_generates_one_page_per_definition() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, LIBRARY);
    let output = dir.path().join("docs");

    let report = Generator::new(Options::default()).run(&input, &output).unwrap();

    assert_eq!(report.class_pages, 5);
    assert_eq!(report.function_pages, 1);
    assert_eq!(report.written.len(), 7);

    for name in [
        "App-Model-User.md",
        "App-Model-Identifiable.md",
        "App-Model-Timestamps.md",
        "App-Model-Post.md",
        "Lib-Util.md",
        "src-functions-strings.md",
        "ApiIndex.md",
    ] {
        assert!(output.join(name).is_file(), "missing {name}");
    }
}

#[test]
fn test_class_page_content() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, ANIMALS);

    Generator::new(Options::default()).run(&input, dir.path()).unwrap();
    let dog = fs::read_to_string(dir.path().join("Zoo-Dog.md")).unwrap();

    assert!(dog.starts_with("# Dog\n"));
    assert!(dog.contains("*final class*"));
    assert!(dog.contains("- **Parent class**: [Zoo\\Animal](Zoo-Animal.md)"));
    assert!(dog.contains("- **Defined in**: [Zoo\\Animal](Zoo-Animal.md)"));
    assert!(dog.contains("| `$food` | [Zoo\\Food](Zoo-Food.md)\\|null | What to eat |"));
}

#[test]
fn test_custom_index_name_and_link_template() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, ANIMALS);
    let options = Options {
        index_file: "README.md".to_string(),
        link_template: "%c".to_string(),
        ..Options::default()
    };

    Generator::new(options).run(&input, dir.path()).unwrap();

    let index = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(index.contains("* [Dog](Zoo-Dog)"));
    assert!(!dir.path().join("ApiIndex.md").exists());
    // page names do not depend on the link template
    assert!(dir.path().join("Zoo-Dog.md").is_file());
}

#[test]
fn test_function_page_content() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, LIBRARY);

    Generator::new(Options::default()).run(&input, dir.path()).unwrap();
    let page = fs::read_to_string(dir.path().join("src-functions-strings.md")).unwrap();

    assert!(page.contains("# Functions in src/functions/strings.php"));
    assert!(page.contains("```php\nstring slugify(string $text, string $separator)\n```"));
    assert!(page.contains("| `$separator` = `'-'` | string |  |"));
}

#[test]
fn test_malformed_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "<project><file></project>");
    let output = dir.path().join("out");

    let result = Generator::new(Options::default()).run(&input, &output);

    assert!(matches!(result, Err(GenerateError::Metadata(_))));
    assert!(!output.exists());
}

#[test]
fn test_see_member_reference_on_class_page() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, LIBRARY);

    Generator::new(Options::default()).run(&input, dir.path()).unwrap();
    let user = fs::read_to_string(dir.path().join("App-Model-User.md")).unwrap();

    assert!(user.contains("* [Identifiable::id()](App-Model-Identifiable.md)\n"));
    assert!(user.contains("* App\\Lib\\Util\n"));
}

#[test]
fn test_component_level_writes_member_pages() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, ANIMALS);
    let options = Options {
        level: Level::Component,
        ..Options::default()
    };

    let report = Generator::new(options).run(&input, dir.path()).unwrap();

    // Animal: speak, eat. Dog: speak, inherited eat.
    assert_eq!(report.class_pages, 3);
    assert_eq!(report.component_pages, 4);
    for name in [
        "Zoo-Animal-method-speak.md",
        "Zoo-Animal-method-eat.md",
        "Zoo-Dog-method-speak.md",
        "Zoo-Dog-method-eat.md",
    ] {
        assert!(dir.path().join(name).is_file(), "missing {name}");
    }

    let dog = fs::read_to_string(dir.path().join("Zoo-Dog.md")).unwrap();
    assert!(dog.contains("## Methods\n\n* [speak()](Zoo-Dog-method-speak.md)\n"));
    assert!(dog.contains(
        "## Inherited methods\n\n* [eat()](Zoo-Dog-method-eat.md): Eat something.\n"
    ));

    let eat = fs::read_to_string(dir.path().join("Zoo-Dog-method-eat.md")).unwrap();
    assert!(eat.starts_with("# Dog::eat()\n"));
    assert!(eat.contains("- **Class**: [Zoo\\Dog](Zoo-Dog.md)"));
    assert!(eat.contains("- **Defined in**: [Zoo\\Animal](Zoo-Animal.md)"));

    let index = fs::read_to_string(dir.path().join("ApiIndex.md")).unwrap();
    assert!(index.contains("  * [Dog](Zoo-Dog.md)\n    * [speak()](Zoo-Dog-method-speak.md)\n"));
}
