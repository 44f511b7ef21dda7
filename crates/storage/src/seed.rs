//! Built-in levels and catalog bootstrap.

use tracing::info;

use sqlrange_models::RangeResult;

use crate::catalog::{LevelStore, NewLevel};

struct SeedLevel {
    title: &'static str,
    template: &'static [&'static str],
    setup_sql: &'static str,
    checker: Option<&'static str>,
    flag: &'static str,
}

/// The shipped challenge set, in play order.
const SEED_LEVELS: &[SeedLevel] = &[
    SeedLevel {
        title: "The front door",
        template: &[
            "SELECT id, username FROM users WHERE username = '",
            "' AND password = '",
            "'",
        ],
        setup_sql: "
            CREATE TABLE users (id INTEGER PRIMARY KEY, username TEXT, password TEXT);
            INSERT INTO users (username, password) VALUES ('admin', 'flag{quotes-are-load-bearing}');
            INSERT INTO users (username, password) VALUES ('guest', 'guest');
        ",
        checker: None,
        flag: "flag{quotes-are-load-bearing}",
    },
    SeedLevel {
        title: "Union made",
        template: &["SELECT name, price FROM products WHERE name LIKE '%", "%'"],
        setup_sql: "
            CREATE TABLE products (id INTEGER PRIMARY KEY, name TEXT, price REAL);
            INSERT INTO products (name, price) VALUES ('anvil', 49.99);
            INSERT INTO products (name, price) VALUES ('rocket skates', 120.00);
            CREATE TABLE vault (flag TEXT);
            INSERT INTO vault VALUES ('flag{two-columns-no-waiting}');
        ",
        checker: None,
        flag: "flag{two-columns-no-waiting}",
    },
    SeedLevel {
        title: "Blind spot",
        template: &["SELECT COUNT(*) FROM members WHERE id = ", ""],
        setup_sql: "
            CREATE TABLE members (id INTEGER PRIMARY KEY, email TEXT);
            INSERT INTO members (email) VALUES ('root@example.org');
            INSERT INTO members (email) VALUES ('nobody@example.org');
            CREATE TABLE vault (flag TEXT);
            INSERT INTO vault VALUES ('flag{one-bit-at-a-time}');
        ",
        // Post-condition: the members table must still exist after the
        // attempt; a learner who nukes the schema gets an error back
        // instead of a result.
        checker: Some("SELECT COUNT(*) FROM members;"),
        flag: "flag{one-bit-at-a-time}",
    },
];

/// Hydrate an empty catalog with the built-in levels. Idempotent: a catalog
/// that already has levels is left untouched.
pub fn bootstrap(store: &LevelStore) -> RangeResult<()> {
    if store.count()? > 0 {
        return Ok(());
    }
    for seed in SEED_LEVELS {
        let template: Vec<String> = seed.template.iter().map(|s| s.to_string()).collect();
        store.insert_level(&NewLevel {
            title: seed.title,
            template: &template,
            setup_sql: seed.setup_sql,
            checker: seed.checker,
            flag: seed.flag,
        })?;
    }
    info!(count = SEED_LEVELS.len(), "hydrated level catalog");
    Ok(())
}
