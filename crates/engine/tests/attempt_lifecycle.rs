//! End-to-end engine behavior: isolation, fault taxonomy, idempotence.

use sqlrange_engine::run_attempt;
use sqlrange_models::{AttemptOutcome, Level, RangeError, SqlValue};

fn login_level() -> Level {
    Level {
        id: 1,
        title: "Login bypass".to_string(),
        template: vec![
            "SELECT name FROM users WHERE name = '".to_string(),
            "' AND password = '".to_string(),
            "'".to_string(),
        ],
        setup_sql: concat!(
            "CREATE TABLE users (name TEXT, password TEXT);",
            "INSERT INTO users VALUES ('admin', 'flag{zip-fill}');",
            "INSERT INTO users VALUES ('guest', 'guest');",
        )
        .to_string(),
        checker: None,
        flag: "flag{zip-fill}".to_string(),
    }
}

fn fragments(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn honest_input_returns_rows() {
    let outcome = run_attempt(&login_level(), &fragments(&["guest", "guest"])).unwrap();
    assert_eq!(
        outcome,
        AttemptOutcome::Rows {
            column_names: vec!["name".to_string()],
            rows: vec![vec![SqlValue::Text("guest".to_string())]],
        }
    );
}

#[test]
fn union_injection_leaks_the_flag() {
    let outcome = run_attempt(
        &login_level(),
        &fragments(&["' UNION SELECT password FROM users --", ""]),
    )
    .unwrap();
    let AttemptOutcome::Rows { rows, .. } = outcome else {
        panic!("expected rows, got {outcome:?}");
    };
    assert!(rows.contains(&vec![SqlValue::Text("flag{zip-fill}".to_string())]));
}

#[test]
fn destructive_attempt_does_not_affect_the_next_one() {
    let level = login_level();

    // First attempt drops the users table outright.
    let outcome = run_attempt(&level, &fragments(&["'; DROP TABLE users; --", ""])).unwrap();
    // Whether the engine accepts the trailing statement or not, nothing may
    // leak into the next attempt.
    drop(outcome);

    let outcome = run_attempt(&level, &fragments(&["guest", "guest"])).unwrap();
    assert!(matches!(outcome, AttemptOutcome::Rows { ref rows, .. } if rows.len() == 1));
}

#[test]
fn malformed_sql_is_a_recoverable_outcome() {
    let outcome = run_attempt(&login_level(), &fragments(&["'", ""])).unwrap();
    let AttemptOutcome::QueryError { message } = outcome else {
        panic!("expected a query error, got {outcome:?}");
    };
    assert!(!message.is_empty());
}

#[test]
fn missing_table_is_a_recoverable_outcome() {
    let mut level = login_level();
    level.template = vec!["SELECT * FROM nonexistent WHERE x = '".to_string(), "'".to_string()];
    let outcome = run_attempt(&level, &fragments(&["a"])).unwrap();
    assert!(matches!(outcome, AttemptOutcome::QueryError { .. }));
}

#[test]
fn broken_setup_script_is_a_system_fault() {
    let mut level = login_level();
    level.setup_sql = "CREATE TABLE".to_string();
    let err = run_attempt(&level, &fragments(&["guest", "guest"])).unwrap_err();
    assert!(matches!(err, RangeError::Setup { .. }));
}

#[test]
fn arbitrary_ddl_is_not_filtered() {
    let mut level = login_level();
    level.template = vec![];
    let outcome = run_attempt(&level, &fragments(&["DROP TABLE users"])).unwrap();
    assert_eq!(
        outcome,
        AttemptOutcome::Rows {
            column_names: vec![],
            rows: vec![],
        }
    );
}

#[test]
fn checker_runs_against_the_same_instance_state() {
    let mut level = login_level();
    // The checker reads a table the main statement creates; it can only
    // succeed if it observes the state the learner just produced.
    level.template = vec![];
    level.checker = Some("SELECT * FROM scratch;".to_string());
    let outcome = run_attempt(
        &level,
        &fragments(&["CREATE TABLE scratch (x INTEGER)"]),
    )
    .unwrap();
    assert!(matches!(outcome, AttemptOutcome::Rows { .. }));
}

#[test]
fn failing_checker_is_a_recoverable_outcome() {
    let mut level = login_level();
    level.checker = Some("SELECT * FROM no_such_table;".to_string());
    let outcome = run_attempt(&level, &fragments(&["guest", "guest"])).unwrap();
    assert!(matches!(outcome, AttemptOutcome::QueryError { .. }));
}

#[test]
fn empty_checker_is_a_no_op() {
    let mut level = login_level();
    level.checker = Some("   ".to_string());
    let outcome = run_attempt(&level, &fragments(&["guest", "guest"])).unwrap();
    assert!(matches!(outcome, AttemptOutcome::Rows { .. }));
}

#[test]
fn identical_attempts_are_idempotent() {
    let level = login_level();
    let input = fragments(&["' OR 1=1 --", ""]);
    let first = run_attempt(&level, &input).unwrap();
    let second = run_attempt(&level, &input).unwrap();
    assert_eq!(first, second);
}
