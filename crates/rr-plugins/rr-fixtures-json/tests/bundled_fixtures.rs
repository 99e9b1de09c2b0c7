//! The fixtures shipped in `data/` must always seed a valid store.

use std::path::PathBuf;
use std::sync::Arc;

use rr_core::{FixtureSource, Store, SystemClock};
use rr_fixtures_json::JsonFixtureSource;

fn bundled() -> JsonFixtureSource {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data");
    JsonFixtureSource::new(dir)
}

#[test]
fn bundled_fixtures_seed_a_store() {
    let seed = bundled().load().expect("bundled fixtures parse");
    let store = Store::from_seed(seed, Arc::new(SystemClock)).expect("bundled fixtures are consistent");

    let carbonara = store.recipe("1").unwrap();
    assert_eq!(carbonara.rating_count, 2);
    assert_eq!(carbonara.rating, 4.5);

    assert!(store.recipes().iter().any(|r| !r.published));
    assert!(!store.groups().is_empty());
    assert!(store.is_suspended("user-03").unwrap());
}

#[test]
fn unpublished_recipes_stay_out_of_search() {
    let store = Store::from_seed(bundled().load().unwrap(), Arc::new(SystemClock)).unwrap();
    let found = store.search("morocco").unwrap();
    assert!(found.is_empty());
    assert_eq!(store.search("PASTOR").unwrap().len(), 1);
    assert!(!store.regions().iter().any(|r| r == "Moroccan"));
}
