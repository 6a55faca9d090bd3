//! Unit tests for the in-memory catalog.

use super::*;

fn widget_and_gadget() -> Catalog {
    Catalog::from_products(vec![
        Product::new("Widget", 9.99, 5),
        Product::new("Gadget", 19.5, 2).with_attribute("color", "black"),
    ])
}

#[test]
fn find_by_name_returns_first_match_with_index() {
    let catalog = widget_and_gadget();

    let (index, product) = catalog.find_by_name("wid").unwrap();
    assert_eq!(index, 0);
    assert_eq!(product.name, "Widget");

    let (index, product) = catalog.find_by_name("DGE").unwrap();
    assert_eq!(index, 1);
    assert_eq!(product.name, "Gadget");

    assert!(catalog.find_by_name("zzz").is_none());
}

#[test]
fn find_by_name_prefers_catalog_order() {
    let catalog = Catalog::from_products(vec![
        Product::new("Blue Gadget", 1.0, 1),
        Product::new("Gadget", 1.0, 1),
    ]);
    let (index, _) = catalog.find_by_name("gadget").unwrap();
    assert_eq!(index, 0);
}

#[test]
fn set_stock_only_touches_stock() {
    let mut catalog = widget_and_gadget();
    let before = catalog.clone();

    let old = catalog.set_stock(1, 12).unwrap();
    assert_eq!(old, 2);
    assert_eq!(catalog.get(1).unwrap().stock, 12);
    assert_eq!(catalog.get(1).unwrap().attributes, before.get(1).unwrap().attributes);
    assert_eq!(catalog.get(0).unwrap(), before.get(0).unwrap());
}

#[test]
fn set_stock_out_of_bounds() {
    let mut catalog = widget_and_gadget();
    match catalog.set_stock(99, 12) {
        Err(CatalogError::Index { index: 99, len: 2 }) => {}
        other => panic!("Expected CatalogError::Index, got: {other:?}"),
    }
}

#[test]
fn remove_shifts_following_products() {
    let mut catalog = widget_and_gadget();
    let removed = catalog.remove(0).unwrap();

    assert_eq!(removed.name, "Widget");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(0).unwrap().name, "Gadget");
    assert!(catalog.remove(5).is_err());
}

#[test]
fn insert_restores_removed_product() {
    let mut catalog = widget_and_gadget();
    let original = catalog.clone();

    let removed = catalog.remove(0).unwrap();
    catalog.insert(0, removed);
    assert_eq!(catalog, original);
}

#[test]
fn snapshot_is_a_json_array() {
    let catalog = widget_and_gadget();
    let snapshot = catalog.to_snapshot().unwrap();

    assert!(snapshot.starts_with('['));
    assert_eq!(Catalog::from_snapshot(&snapshot).unwrap(), catalog);
}

#[test]
fn snapshot_is_stable() {
    let catalog = widget_and_gadget();
    assert_eq!(catalog.to_snapshot().unwrap(), catalog.to_snapshot().unwrap());
}

#[test]
fn empty_catalog_snapshot() {
    assert_eq!(Catalog::new().to_snapshot().unwrap(), "[]");
}
