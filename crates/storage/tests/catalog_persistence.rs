//! File-backed catalog behavior across reopen.

use sqlrange_storage::catalog::NewLevel;
use sqlrange_storage::{seed, LevelStore};

#[test]
fn catalog_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("level_data.db");

    let template = vec!["SELECT 1 WHERE x = '".to_string(), "'".to_string()];
    let id = {
        let store = LevelStore::open(&path).unwrap();
        store
            .insert_level(&NewLevel {
                title: "persisted",
                template: &template,
                setup_sql: "CREATE TABLE t (x);",
                checker: Some("SELECT 1;"),
                flag: "flag{durable}",
            })
            .unwrap()
    };

    let store = LevelStore::open(&path).unwrap();
    let level = store.get_level(id).unwrap().expect("level should persist");
    assert_eq!(level.title, "persisted");
    assert_eq!(level.template, template);
    assert_eq!(level.checker.as_deref(), Some("SELECT 1;"));
    assert_eq!(level.flag, "flag{durable}");
}

#[test]
fn bootstrap_only_seeds_once_per_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("level_data.db");

    let first = {
        let store = LevelStore::open(&path).unwrap();
        seed::bootstrap(&store).unwrap();
        store.count().unwrap()
    };
    assert!(first > 0);

    let store = LevelStore::open(&path).unwrap();
    seed::bootstrap(&store).unwrap();
    assert_eq!(store.count().unwrap(), first);
}
