use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::Text;

mod common;

#[derive(QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

#[test]
fn test_pool_hands_out_connections() {
    let test_db = common::TestDb::new("test_pool_hands_out_connections.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}

#[test]
fn test_connections_use_wal_journal() {
    let test_db = common::TestDb::new("test_connections_use_wal_journal.db");
    let mut conn = test_db.pool().get().unwrap();

    let mode = diesel::sql_query("PRAGMA journal_mode")
        .get_result::<JournalMode>(&mut conn)
        .unwrap();
    assert_eq!(mode.journal_mode.to_lowercase(), "wal");
}

#[test]
fn test_rating_check_constraint_rejects_out_of_scale_values() {
    let test_db = common::TestDb::new("test_rating_check_constraint.db");
    let mut conn = test_db.pool().get().unwrap();

    let result = conn.batch_execute(
        "INSERT INTO feedbacks (customer_id, product_id, rating) VALUES (1, 1, 9);",
    );
    assert!(result.is_err());
}

#[derive(QueryableByName)]
struct Lowered {
    #[diesel(sql_type = diesel::sql_types::Nullable<Text>)]
    lowered: Option<String>,
}

#[test]
fn test_connections_register_unicode_lower() {
    let test_db = common::TestDb::new("test_connections_register_unicode_lower.db");
    let mut conn = test_db.pool().get().unwrap();

    let row = diesel::sql_query("SELECT lower_utf8('ÉCOLE Ünïcode') AS lowered")
        .get_result::<Lowered>(&mut conn)
        .unwrap();
    assert_eq!(row.lowered.as_deref(), Some("école ünïcode"));
}
