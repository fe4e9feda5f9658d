//! Loading and exporting registry definitions.

use std::io::Write;

use stylebook::{builtin, Category, Registry, RegistryError};

const MINIMAL: &str = include_str!("fixtures/minimal.yaml");

#[test]
fn test_load_minimal_definition() {
    let registry = Registry::from_yaml(MINIMAL).unwrap();

    assert_eq!(registry.token_count(), 12);
    assert_eq!(registry.get_token(Category::Buttons, "ghost"), "btn btn-ghost");
    assert_eq!(registry.get_token(Category::Buttons, "danger"), "btn btn-primary");
    assert_eq!(registry.lookup("badges", "anything").unwrap(), "badge");
}

#[test]
fn test_incomplete_definition_is_rejected() {
    let yaml = "buttons:\n  default: primary\n  variants:\n    primary: \"btn\"\n";
    assert_eq!(
        Registry::from_yaml(yaml).unwrap_err(),
        RegistryError::MissingCategory {
            category: Category::Cards
        }
    );
}

#[test]
fn test_builtin_yaml_export_rebuilds_equal_registry() {
    let yaml = builtin().to_yaml().unwrap();
    let rebuilt = Registry::from_yaml(&yaml).unwrap();
    assert_eq!(&rebuilt, builtin());
}

#[test]
fn test_export_lists_categories_in_declaration_order() {
    let yaml = builtin().to_yaml().unwrap();
    let positions: Vec<usize> = Category::ALL
        .iter()
        .map(|c| yaml.find(&format!("\n{}:", c)).unwrap_or(0))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    assert!(yaml.starts_with("buttons:"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MINIMAL.as_bytes()).unwrap();

    let registry = Registry::from_yaml_file(file.path()).unwrap();
    assert_eq!(registry.get_token(Category::Cards, "base"), "card");
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = Registry::from_yaml_file(&path).unwrap_err();
    assert!(matches!(err, RegistryError::Read { path: ref p, .. } if *p == path));
}

#[test]
fn test_overlay_on_loaded_registry() {
    let registry = Registry::from_yaml(MINIMAL)
        .unwrap()
        .to_builder()
        .merge_yaml("icons:\n  variants:\n    lg: \"icon-lg\"\n")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(registry.get_token(Category::Icons, "lg"), "icon-lg");
    assert_eq!(registry.get_token(Category::Icons, "xl"), "icon-md");
}
