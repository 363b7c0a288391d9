//! End-to-end library flows: populate a catalog from text, mutate it
//! through the catalog surface, and encode it back.

use orrery::domain::ordering::{by_orbit_radius, by_radius};
use orrery::{Catalog, CatalogError, FailureCategory, encode_catalog, encode_system};

const FIXTURE: &str = "\
Sol:696000
-Earth:6371:7000000
--Luna:173:384400
-Mars:3390:7100000
--Deimos:12:23460
--Phobos:11:17000
Vega:1100000
-Osiris:9000:11000000
";

fn loaded() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.load_from_str(FIXTURE).unwrap();
    catalog
}

#[test]
fn load_then_mutate_then_encode() {
    let mut catalog = loaded();
    catalog.add_planet("Vega", "Isis", "8000", "12000000").unwrap();
    catalog.add_moon("Vega", "Isis", "Nephthys", 100.0, 40_000.0).unwrap();
    catalog.remove_planet("Sol", "Earth").unwrap();

    let encoded = encode_catalog(&catalog);
    assert!(encoded.contains("-Isis:8000:12000000\n--Nephthys:100:40000\n"));
    assert!(!encoded.contains("Earth"));
}

#[test]
fn encode_decode_round_trip_is_stable() {
    let catalog = loaded();
    let first = encode_catalog(&catalog);

    let mut reloaded = Catalog::new();
    reloaded.load_from_str(&first).unwrap();
    assert_eq!(encode_catalog(&reloaded), first);
}

#[test]
fn sorting_a_system_twice_gives_the_same_encoding() {
    let mut catalog = loaded();
    catalog.sort_solar_system("Sol", by_radius, by_orbit_radius).unwrap();
    let once = encode_system(catalog.solar_system("Sol").unwrap());
    catalog.sort_solar_system("Sol", by_radius, by_orbit_radius).unwrap();
    let twice = encode_system(catalog.solar_system("Sol").unwrap());
    assert_eq!(once, twice);

    // Mars sorts before Earth by radius; Phobos before Deimos by orbit.
    assert!(once.starts_with("Sol:696000\n-Mars:3390:7100000\n--Phobos:11:17000\n"));
}

#[test]
fn removing_the_chain_reports_each_missing_link() {
    let mut catalog = loaded();

    let err = catalog.remove_moon("Nowhere", "Earth", "Luna").unwrap_err();
    assert!(matches!(err, CatalogError::SystemNotFound(_)));
    let err = catalog.remove_moon("Sol", "Vulcan", "Luna").unwrap_err();
    assert!(matches!(err, CatalogError::PlanetNotFound(_)));
    let err = catalog.remove_moon("Sol", "Earth", "Styx").unwrap_err();
    assert!(matches!(err, CatalogError::MoonNotFound(_)));
    catalog.remove_moon("Sol", "Earth", "Luna").unwrap();
}

#[test]
fn decapitated_system_stays_registered_but_rejects_new_planets() {
    let mut catalog = loaded();
    catalog.select_solar_system("Sol");
    catalog.remove_star().unwrap();

    assert!(catalog.solar_system("Sol").is_some());
    let err = catalog.add_planet("Sol", "Earth", "6371", "7000000").unwrap_err();
    assert_eq!(err.category(), FailureCategory::NotFound);
}

#[test]
fn duplicate_system_from_file_keeps_earlier_content() {
    let mut catalog = loaded();
    let err = catalog.load_from_str("Sol:800000\n").unwrap_err();
    assert_eq!(err.category(), FailureCategory::Uniqueness);
    assert_eq!(catalog.solar_system("Sol").unwrap().star().unwrap().radius(), 696_000.0);
}

#[test]
fn independent_catalogs_do_not_share_state() {
    let first = loaded();
    let mut second = Catalog::new();
    second.create_solar_system("Altair", 900_000.0).unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    assert!(second.solar_system("Sol").is_none());
}
