//! Tests for CatalogDiscovery

use std::path::PathBuf;

use tempfile::TempDir;

use modelhier::discovery::{CatalogDiscovery, DiscoveryError};
use modelhier::domain::{DependencyTreeBuilder, LevelOrderLinearizer};

fn create_model_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    std::fs::write(&path, content).expect("write model file");
    path
}

#[test]
fn given_model_file_when_discovering_then_collects_dependencies_in_field_order() {
    // Arrange
    let temp = TempDir::new().unwrap();
    create_model_file(
        &temp,
        "shop.toml",
        r#"
        [[entity]]
        name = "Order"

        [[entity.field]]
        name = "customer_id"
        type = "i64"
        references = "Customer"

        [[entity.field]]
        name = "lines"
        type = "Vec<OrderLine>"
        foreign_key = true

        [[entity.field]]
        name = "note"
        type = "String"
        "#,
    );

    // Act
    let map = CatalogDiscovery::new("toml")
        .discover_directory(temp.path())
        .unwrap();

    // Assert
    assert_eq!(map.len(), 1);
    assert_eq!(
        map.get("Order").unwrap(),
        &["Customer".to_string(), "OrderLine".to_string()]
    );
}

#[test]
fn given_multiple_files_when_discovering_then_scan_order_is_stable() {
    // Arrange: sorted walk means a.toml entities come before b.toml entities
    let temp = TempDir::new().unwrap();
    create_model_file(
        &temp,
        "b.toml",
        r#"
        [[entity]]
        name = "Order"
        "#,
    );
    create_model_file(
        &temp,
        "a.toml",
        r#"
        [[entity]]
        name = "Customer"

        [[entity]]
        name = "Region"
        "#,
    );

    // Act
    let map = CatalogDiscovery::new("toml")
        .discover_directory(temp.path())
        .unwrap();

    // Assert
    let keys: Vec<_> = map.keys().collect();
    assert_eq!(keys, vec!["Customer", "Region", "Order"]);
}

#[test]
fn given_entity_without_dependencies_when_discovering_then_kept_as_key() {
    // Arrange
    let temp = TempDir::new().unwrap();
    create_model_file(
        &temp,
        "models.toml",
        r#"
        [[entity]]
        name = "Region"

        [[entity.field]]
        name = "code"
        type = "String"
        "#,
    );

    // Act
    let map = CatalogDiscovery::new("toml")
        .discover_directory(temp.path())
        .unwrap();

    // Assert
    assert!(map.contains("Region"));
    assert!(map.get("Region").unwrap().is_empty());
}

#[test]
fn given_module_filter_when_discovering_then_skips_other_modules() {
    // Arrange
    let temp = TempDir::new().unwrap();
    create_model_file(
        &temp,
        "models.toml",
        r#"
        [[entity]]
        name = "Order"
        module = "shop.sales"

        [[entity]]
        name = "AuditLog"
        module = "shop.audit"

        [[entity]]
        name = "Unscoped"
        "#,
    );

    // Act
    let map = CatalogDiscovery::new("toml")
        .with_module_filter(Some("sales".to_string()))
        .discover_directory(temp.path())
        .unwrap();

    // Assert: only entities whose module matches; entities without a module
    // never match a filter
    let keys: Vec<_> = map.keys().collect();
    assert_eq!(keys, vec!["Order"]);
}

#[test]
fn given_non_model_files_when_discovering_then_they_are_ignored() {
    // Arrange
    let temp = TempDir::new().unwrap();
    create_model_file(
        &temp,
        "models.toml",
        r#"
        [[entity]]
        name = "Order"
        "#,
    );
    create_model_file(&temp, "README.md", "not a model");
    create_model_file(&temp, "notes.txt", "[[entity]]\nbroken =");

    // Act
    let map = CatalogDiscovery::new("toml")
        .discover_directory(temp.path())
        .unwrap();

    // Assert
    assert_eq!(map.len(), 1);
}

#[test]
fn given_duplicate_entity_when_discovering_then_errors() {
    // Arrange
    let temp = TempDir::new().unwrap();
    create_model_file(
        &temp,
        "a.toml",
        r#"
        [[entity]]
        name = "Order"
        "#,
    );
    create_model_file(
        &temp,
        "b.toml",
        r#"
        [[entity]]
        name = "Order"
        "#,
    );

    // Act
    let result = CatalogDiscovery::new("toml").discover_directory(temp.path());

    // Assert
    assert!(matches!(
        result.unwrap_err(),
        DiscoveryError::DuplicateEntity { name, .. } if name == "Order"
    ));
}

#[test]
fn given_invalid_toml_when_discovering_then_parse_error_names_file() {
    // Arrange
    let temp = TempDir::new().unwrap();
    create_model_file(&temp, "broken.toml", "[[entity]\nname = ");

    // Act
    let result = CatalogDiscovery::new("toml").discover_directory(temp.path());

    // Assert
    let err = result.unwrap_err();
    assert!(matches!(err, DiscoveryError::Parse { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn given_missing_directory_when_discovering_then_errors() {
    let result =
        CatalogDiscovery::new("toml").discover_directory(&PathBuf::from("/nonexistent/path"));

    assert!(matches!(
        result.unwrap_err(),
        DiscoveryError::DirectoryNotFound(_)
    ));
}

#[test]
fn given_file_instead_of_directory_when_discovering_then_errors() {
    let temp = TempDir::new().unwrap();
    let file = create_model_file(&temp, "models.toml", "");

    let result = CatalogDiscovery::new("toml").discover_directory(&file);

    assert!(matches!(
        result.unwrap_err(),
        DiscoveryError::NotADirectory(_)
    ));
}

#[test]
fn given_discovered_catalog_when_building_and_linearizing_then_creation_order_is_valid() {
    // Arrange: end to end over a small shop model
    let temp = TempDir::new().unwrap();
    create_model_file(
        &temp,
        "shop.toml",
        r#"
        [[entity]]
        name = "Order"

        [[entity.field]]
        name = "customer_id"
        type = "i64"
        references = "Customer"

        [[entity.field]]
        name = "lines"
        type = "Vec<OrderLine>"
        foreign_key = true

        [[entity]]
        name = "OrderLine"

        [[entity.field]]
        name = "product_id"
        type = "i64"
        references = "Product"

        [[entity]]
        name = "Customer"

        [[entity]]
        name = "Product"
        "#,
    );

    // Act
    let map = CatalogDiscovery::new("toml")
        .discover_directory(temp.path())
        .unwrap();
    let tree = DependencyTreeBuilder::new().build(&map).unwrap();
    let order = LevelOrderLinearizer::linearize(&tree);

    // Assert
    let position = |name: &str| order.iter().position(|e| e == name).unwrap();
    assert!(position("Customer") < position("Order"));
    assert!(position("OrderLine") < position("Order"));
    assert!(position("Product") < position("OrderLine"));
    assert_eq!(order.len(), 4);
}
