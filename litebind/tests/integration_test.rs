//! Integration tests for litebind against real SQLite databases.
//!
//! These verify the full stack: connection construction, statement
//! registration, typed binding, row decoding, generated keys,
//! transactions, and lifecycle edge cases. Most tests run against a
//! fresh in-memory database; the persistence tests use a temp file.

use chrono::NaiveDate;
use litebind::{decoders, Connection, Error, Row, TableDef, ToValue, Value, ValueKind};

/// The user schema most tests share.
fn user_db() -> Connection {
    Connection::builder_in_memory()
        .table("user", &["id integer primary key", "name text not null"])
        .statement_returning_keys("insert_user", "insert into user(name) values(?)")
        .statement("insert_user_plain", "insert into user(name) values(?)")
        .statement("get_name", "select name from user where id=?")
        .statement("all_names", "select name from user order by id")
        .statement("all_ids", "select id from user order by id")
        .statement(
            "user_exists",
            "select exists(select 1 from user where name=?)",
        )
        .statement("count_users", "select count(*) from user")
        .statement("delete_user", "delete from user where id=?")
        .build()
        .expect("failed to build test connection")
}

#[test]
fn insert_returns_generated_key() {
    let conn = user_db();

    let result = conn.execute("insert_user", &[Value::text("alice")]).unwrap();
    assert_eq!(result.rows_affected, 1);
    assert_eq!(result.last_insert_id, Some(1));

    let result = conn.execute("insert_user", &[Value::text("bob")]).unwrap();
    assert_eq!(result.last_insert_id, Some(2));

    let name = conn
        .fetch_optional("get_name", decoders::single_text(), &[Value::integer(1)])
        .unwrap();
    assert_eq!(name.as_deref(), Some("alice"));
}

#[test]
fn plain_statement_never_returns_key() {
    let conn = user_db();

    let result = conn
        .execute("insert_user_plain", &[Value::text("alice")])
        .unwrap();
    assert_eq!(result.rows_affected, 1);
    assert_eq!(result.last_insert_id, None);
}

#[test]
fn zero_rows_yield_none_and_empty_vec() {
    let conn = user_db();

    let name = conn
        .fetch_optional("get_name", decoders::single_text(), &[Value::integer(42)])
        .unwrap();
    assert!(name.is_none());

    let names = conn
        .fetch_all("all_names", decoders::single_text(), &[])
        .unwrap();
    assert!(names.is_empty());

    let scalar: Option<i64> = conn.fetch_scalar("get_name", &[Value::integer(42)]).unwrap();
    assert!(scalar.is_none());
}

#[test]
fn fetch_all_preserves_row_order() {
    let conn = user_db();
    for name in ["alice", "bob", "carol"] {
        conn.execute("insert_user", &[Value::text(name)]).unwrap();
    }

    let ids = conn
        .fetch_all("all_ids", decoders::single_integer(), &[])
        .unwrap();
    assert_eq!(ids, vec![1, 2, 3]);

    let names = conn
        .fetch_all("all_names", decoders::single_text(), &[])
        .unwrap();
    assert_eq!(names, vec!["alice", "bob", "carol"]);
}

#[test]
fn exists_reflects_matching_rows() {
    let conn = user_db();

    assert!(!conn.exists("user_exists", &[Value::text("alice")]).unwrap());

    conn.execute("insert_user", &[Value::text("alice")]).unwrap();
    assert!(conn.exists("user_exists", &[Value::text("alice")]).unwrap());
    assert!(!conn.exists("user_exists", &[Value::text("bob")]).unwrap());
}

#[test]
fn exists_treats_any_nonzero_flag_as_true() {
    let conn = user_db();
    conn.execute("insert_user", &[Value::text("alice")]).unwrap();
    conn.execute("insert_user", &[Value::text("bob")]).unwrap();

    // A count of 2 in the flag column still reads as "found".
    assert!(conn.exists("count_users", &[]).unwrap());
}

#[test]
fn exists_is_false_for_zero_rows() {
    let conn = Connection::builder_in_memory()
        .statement("never", "select 1 where 1 = 0")
        .build()
        .unwrap();

    assert!(!conn.exists("never", &[]).unwrap());
}

fn items_db() -> Connection {
    Connection::builder_in_memory()
        .table("items", &["qty integer", "label text"])
        .statement("insert_item", "insert into items(qty, label) values(?, ?)")
        .statement("get_item", "select qty, label from items limit 1")
        .build()
        .unwrap()
}

#[test]
fn parameters_bind_in_call_order() {
    let conn = items_db();
    conn.execute("insert_item", &[Value::integer(3), Value::text("apples")])
        .unwrap();

    let item = conn
        .fetch_optional(
            "get_item",
            |row: &Row<'_>| -> litebind::Result<(i64, String)> {
                Ok((row.get(0)?, row.get(1)?))
            },
            &[],
        )
        .unwrap();
    assert_eq!(item, Some((3, "apples".to_string())));
}

#[test]
fn swapped_parameter_kinds_change_what_is_stored() {
    let conn = items_db();
    // Swapping the two arguments binds text where the integer column
    // expects a number; SQLite stores it as text, and the typed read
    // back surfaces the mismatch instead of silently binding an integer.
    conn.execute("insert_item", &[Value::text("apples"), Value::integer(3)])
        .unwrap();

    let result = conn.fetch_optional(
        "get_item",
        |row: &Row<'_>| -> litebind::Result<(i64, String)> { Ok((row.get(0)?, row.get(1)?)) },
        &[],
    );
    assert!(matches!(result, Err(Error::Sqlite(_))));
}

#[test]
fn close_is_idempotent() {
    let mut conn = user_db();
    assert!(!conn.is_closed());

    conn.close().unwrap();
    assert!(conn.is_closed());
    conn.close().unwrap();

    let err = conn.execute("insert_user", &[Value::text("alice")]);
    assert!(matches!(err, Err(Error::ConnectionClosed)));
    let err = conn.fetch_all("all_names", decoders::single_text(), &[]);
    assert!(matches!(err, Err(Error::ConnectionClosed)));
}

#[test]
fn unknown_statement_name_is_reported() {
    let conn = user_db();
    let err = conn.execute("no_such_statement", &[]);
    match err {
        Err(Error::StatementNotFound(name)) => assert_eq!(name, "no_such_statement"),
        other => panic!("expected StatementNotFound, got {other:?}"),
    }
}

#[test]
fn invalid_statement_sql_fails_construction() {
    let result = Connection::builder_in_memory()
        .statement("bad", "select * from missing_table")
        .build();
    assert!(result.is_err());
}

#[test]
fn invalid_table_ddl_fails_construction() {
    let result = Connection::builder_in_memory()
        .table("broken", &["id integer primary key", "not valid at all ((("])
        .build();
    assert!(result.is_err());
}

#[test]
fn init_hook_runs_before_setup() {
    let conn = Connection::builder_in_memory()
        .init(|raw| {
            raw.pragma_update(None, "user_version", 7)?;
            Ok(())
        })
        .statement("get_version", "select * from pragma_user_version")
        .build()
        .unwrap();

    let version: Option<i64> = conn.fetch_scalar("get_version", &[]).unwrap();
    assert_eq!(version, Some(7));
}

#[test]
fn failing_init_hook_aborts_construction() {
    let result = Connection::builder_in_memory()
        .init(|raw| {
            raw.execute_batch("this is not sql")?;
            Ok(())
        })
        .build();
    assert!(result.is_err());
}

#[test]
fn manual_commit_mode_commits_and_rolls_back() {
    let conn = user_db();

    conn.set_auto_commit(false).unwrap();
    conn.execute("insert_user", &[Value::text("alice")]).unwrap();
    conn.rollback().unwrap();
    let count: Option<i64> = conn.fetch_scalar("count_users", &[]).unwrap();
    assert_eq!(count, Some(0));

    conn.execute("insert_user", &[Value::text("bob")]).unwrap();
    conn.commit().unwrap();

    // Manual mode stays on across a commit: the next write is again
    // invisible until committed.
    conn.execute("insert_user", &[Value::text("carol")]).unwrap();
    conn.rollback().unwrap();
    let count: Option<i64> = conn.fetch_scalar("count_users", &[]).unwrap();
    assert_eq!(count, Some(1));

    conn.set_auto_commit(true).unwrap();
    conn.execute("insert_user", &[Value::text("dave")]).unwrap();
    let count: Option<i64> = conn.fetch_scalar("count_users", &[]).unwrap();
    assert_eq!(count, Some(2));
}

#[test]
fn rows_persist_across_reopen_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("litebind.db");

    let mut conn = Connection::builder(&path)
        .table("user", &["id integer primary key", "name text not null"])
        .statement_returning_keys("insert_user", "insert into user(name) values(?)")
        .statement("get_name", "select name from user where id=?")
        .build()
        .unwrap();
    conn.execute("insert_user", &[Value::text("alice")]).unwrap();
    conn.close().unwrap();

    // Table declarations use `if not exists`, so reopening the same
    // file goes through the same builder unchanged.
    let conn = Connection::builder(&path)
        .table("user", &["id integer primary key", "name text not null"])
        .statement("get_name", "select name from user where id=?")
        .build()
        .unwrap();
    let name = conn
        .fetch_optional("get_name", decoders::single_text(), &[Value::integer(1)])
        .unwrap();
    assert_eq!(name.as_deref(), Some("alice"));
}

#[test]
fn strict_table_declaration_fails_on_existing_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strict.db");

    Connection::builder(&path)
        .table_def(TableDef::new_strict("t", &["id integer primary key"]))
        .build()
        .unwrap();

    let result = Connection::builder(&path)
        .table_def(TableDef::new_strict("t", &["id integer primary key"]))
        .build();
    assert!(result.is_err());
}

#[test]
fn delete_reports_rows_affected() {
    let conn = user_db();
    conn.execute("insert_user", &[Value::text("alice")]).unwrap();

    let result = conn.execute("delete_user", &[Value::integer(1)]).unwrap();
    assert_eq!(result.rows_affected, 1);
    assert_eq!(result.last_insert_id, None);

    let result = conn.execute("delete_user", &[Value::integer(1)]).unwrap();
    assert_eq!(result.rows_affected, 0);
}

#[test]
fn decoder_can_read_columns_by_name() {
    let conn = user_db();
    conn.execute("insert_user", &[Value::text("alice")]).unwrap();

    let name = conn
        .fetch_optional(
            "all_names",
            |row: &Row<'_>| row.get_by_name::<String>("name"),
            &[],
        )
        .unwrap();
    assert_eq!(name.as_deref(), Some("alice"));
}

#[test]
fn single_column_decoders_cover_the_primitive_kinds() {
    let conn = Connection::builder_in_memory()
        .statement("int", "select 41 + 1")
        .statement("real", "select 1.5")
        .statement("text", "select 'hi'")
        .statement("flag", "select 1")
        .build()
        .unwrap();

    let i = conn
        .fetch_optional("int", decoders::single_integer(), &[])
        .unwrap();
    assert_eq!(i, Some(42));

    let r = conn
        .fetch_optional("real", decoders::single_real(), &[])
        .unwrap();
    assert_eq!(r, Some(1.5));

    let t = conn
        .fetch_optional("text", decoders::single_text(), &[])
        .unwrap();
    assert_eq!(t.as_deref(), Some("hi"));

    let b = conn
        .fetch_optional("flag", decoders::single_bool(), &[])
        .unwrap();
    assert_eq!(b, Some(true));
}

#[test]
fn value_factories_tag_the_expected_kinds() {
    assert_eq!(Value::integer(7).kind(), ValueKind::Integer);
    assert_eq!(Value::real(1.25).kind(), ValueKind::Real);
    assert_eq!(Value::text("x").kind(), ValueKind::Text);

    // Booleans are integers 0/1, never a kind of their own.
    assert_eq!(Value::boolean(true), Value::Integer(1));
    assert_eq!(Value::boolean(false), Value::Integer(0));

    assert_eq!(Value::from(3i32), Value::Integer(3));
    assert_eq!(Value::from("s"), Value::Text("s".to_string()));
    assert_eq!(Value::integer(7).type_name(), "integer");
}

#[test]
fn to_value_conversions_round_trip_through_the_engine() {
    let conn = Connection::builder_in_memory()
        .table("events", &["day text not null"])
        .statement("insert_event", "insert into events(day) values(?)")
        .statement("get_day", "select day from events limit 1")
        .build()
        .unwrap();

    let day = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
    conn.execute("insert_event", &[day.to_value()]).unwrap();

    let read: Option<NaiveDate> = conn.fetch_scalar("get_day", &[]).unwrap();
    assert_eq!(read, Some(day));
}

#[test]
fn to_value_kinds_match_the_source_types() {
    assert_eq!(true.to_value(), Value::Integer(1));
    assert_eq!(42i64.to_value(), Value::Integer(42));
    assert_eq!(1.5f64.to_value(), Value::Real(1.5));
    assert_eq!("abc".to_value(), Value::Text("abc".to_string()));

    let decimal: rust_decimal::Decimal = "12.34".parse().unwrap();
    assert_eq!(decimal.to_value(), Value::Text("12.34".to_string()));

    let json = serde_json::json!({"a": 1});
    assert_eq!(json.to_value(), Value::Text("{\"a\":1}".to_string()));
}
