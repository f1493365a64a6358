use pattern_catalog::catalog::{Catalog, Category};
use pattern_catalog::creational::abstract_factory::{get_factory, run_session};
use pattern_catalog::error::CatalogError;
use pretty_assertions::assert_eq;
use serial_test::serial;

/// Runs the whole catalogue the way the binary does with no arguments.
#[test]
#[serial(singleton)]
fn test_full_catalog_run() {
    let catalog = Catalog::new();
    let mut out = Vec::new();
    Catalog::run_all(catalog.entries(), &mut out).expect("catalog run failed");
    let transcript = String::from_utf8(out).expect("transcript is not UTF-8");

    // Banners appear in catalogue order
    let mut cursor = 0;
    for entry in catalog.entries() {
        let banner = format!("== {} ({}) ==\n", entry.title(), entry.category());
        let found = transcript[cursor..]
            .find(&banner)
            .unwrap_or_else(|| panic!("missing or out of order: {banner}"));
        cursor += found + banner.len();
    }

    // First and last demos are framed correctly
    assert!(transcript.starts_with("== Chain of Responsibility (behavioral) ==\nFranklin answered call.\n\n"));
    assert!(transcript.ends_with("Volume::Down\nPower::Off\n\n"));
}

/// Running a demo twice prints the same transcript twice.
#[test]
fn test_demos_are_repeatable() {
    let catalog = Catalog::new();
    for entry in catalog.entries().iter().filter(|e| e.name() != "singleton") {
        let mut first = Vec::new();
        let mut second = Vec::new();
        entry.run(&mut first).unwrap();
        entry.run(&mut second).unwrap();
        assert_eq!(
            String::from_utf8(first).unwrap(),
            String::from_utf8(second).unwrap(),
            "{} is not repeatable",
            entry.name()
        );
    }
}

#[test]
#[serial(singleton)]
fn test_singleton_demo_is_repeatable() {
    let catalog = Catalog::new();
    let mut first = Vec::new();
    let mut second = Vec::new();
    catalog.run("singleton", &mut first).unwrap();
    catalog.run("singleton", &mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_category_selection() {
    let catalog = Catalog::new();
    let structural: Vec<&str> = catalog
        .in_category(Category::Structural)
        .map(|entry| entry.name())
        .collect();
    assert_eq!(structural, vec!["adapter", "bridge", "composite", "decorator", "facade"]);

    let mut out = Vec::new();
    Catalog::run_all(catalog.in_category(Category::Structural).take(1), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "== Adapter (structural) ==\n62\n\n");
}

#[test]
fn test_unknown_demo_is_reported() {
    let mut out = Vec::new();
    let err = Catalog::new().run("interpreter", &mut out).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownDemo(_)));
    assert!(out.is_empty());
}

/// An unknown database stops the session after the databases before it have run.
#[test]
fn test_abstract_factory_session_stops_at_unknown_database() {
    let mut out = Vec::new();
    let err = run_session(&["Room", "MongoDB", "SQLite"], &mut out).unwrap_err();
    assert_eq!(err.to_string(), "ERROR! Database name not recognized.");
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Connected to Room!\nRoom ran.\n\n--------------------\n\n"
    );
    assert!(get_factory("sqlite").is_err());
}
