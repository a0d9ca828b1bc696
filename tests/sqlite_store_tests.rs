use std::env;
use std::fs;
use studydesk::core::AppState;
use studydesk::db::kv::SqliteStore;
use studydesk::models::{AccentColor, NewClass, Theme};
use studydesk::store::{KEY_CLASSES, KEY_THEME, KeyValueStore};
use studydesk::utils::ids::resolve_prefix;
use studydesk::errors::AppError;

fn temp_db(name: &str) -> String {
    let path = env::temp_dir().join(format!("{}_studydesk.sqlite", name));
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

#[test]
fn test_sqlite_store_get_set_remove() {
    let mut store = SqliteStore::open_in_memory().expect("open");

    assert_eq!(store.get("missing").unwrap(), None);

    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    assert_eq!(store.keys().unwrap(), vec!["k".to_string()]);

    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn test_state_persists_across_reopen() {
    let db = temp_db("reopen");

    {
        let store = SqliteStore::open(&db).expect("open");
        let mut state = AppState::hydrate(store, false);
        state.add_class(NewClass {
            name: "Chemistry".into(),
            ..NewClass::default()
        });
        state.toggle_theme();
        state.set_accent_color(AccentColor::Rose);
    }

    let store = SqliteStore::open(&db).expect("reopen");
    assert_eq!(store.get(KEY_THEME).unwrap().as_deref(), Some("dark"));
    assert!(store.get(KEY_CLASSES).unwrap().unwrap().contains("Chemistry"));

    let state = AppState::hydrate(store, false);
    assert_eq!(state.classes()[0].name, "Chemistry");
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.accent_color(), AccentColor::Rose);
}

#[test]
fn test_resolve_prefix() {
    let ids = ["abc123", "abd456", "xyz789"];

    assert_eq!(resolve_prefix(ids, "x").unwrap(), "xyz789");
    assert_eq!(resolve_prefix(ids, "abc123").unwrap(), "abc123");
    assert_eq!(resolve_prefix(ids, "nope").unwrap(), "nope");
    assert!(matches!(resolve_prefix(ids, "ab"), Err(AppError::AmbiguousId(_))));
}
