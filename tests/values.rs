use rusqlite::Connection;
use rusqlite::types::{Value as SqlValue, ValueRef};
use serde_json::json;
use sqljson::error::SqlJsonError;
use sqljson::query;
use sqljson::value::{column_to_json, json_to_sql};

fn setup() -> Connection {
    Connection::open_in_memory().expect("db")
}

#[test]
fn cells_map_to_their_json_forms() {
    assert_eq!(column_to_json("c", ValueRef::Null).expect("ok"), json!(null));
    assert_eq!(column_to_json("c", ValueRef::Integer(42)).expect("ok"), json!(42));
    assert_eq!(column_to_json("c", ValueRef::Real(1.5)).expect("ok"), json!(1.5));
    assert_eq!(column_to_json("c", ValueRef::Text(b"hi")).expect("ok"), json!("hi"));
}

#[test]
fn full_signed_64_bit_range_survives() {
    let max = column_to_json("c", ValueRef::Integer(i64::MAX)).expect("ok");
    assert_eq!(max, json!(i64::MAX));
    let min = column_to_json("c", ValueRef::Integer(i64::MIN)).expect("ok");
    assert_eq!(min, json!(i64::MIN));
}

#[test]
fn blob_becomes_standard_base64_text() {
    let encoded = column_to_json("c", ValueRef::Blob(&[1, 2, 3])).expect("ok");
    assert_eq!(encoded, json!("AQID"));
    // padded alphabet
    let encoded = column_to_json("c", ValueRef::Blob(b"hi")).expect("ok");
    assert_eq!(encoded, json!("aGk="));
}

#[test]
fn non_finite_real_fails_naming_the_column() {
    let conn = setup();
    // 9e999 overflows to infinity in SQLite
    let err = query::run(&conn, "select 9e999 as huge", &serde_json::Map::new()).unwrap_err();
    match err {
        SqlJsonError::Value { name, .. } => assert_eq!(name, "huge"),
        other => panic!("expected Value, got {other:?}"),
    }
}

#[test]
fn scalars_bind_to_their_sql_forms() {
    assert_eq!(json_to_sql("p", &json!(null)).expect("ok"), SqlValue::Null);
    assert_eq!(json_to_sql("p", &json!(true)).expect("ok"), SqlValue::Integer(1));
    assert_eq!(json_to_sql("p", &json!(false)).expect("ok"), SqlValue::Integer(0));
    assert_eq!(json_to_sql("p", &json!(7)).expect("ok"), SqlValue::Integer(7));
    assert_eq!(json_to_sql("p", &json!(1.5)).expect("ok"), SqlValue::Real(1.5));
    assert_eq!(
        json_to_sql("p", &json!("x")).expect("ok"),
        SqlValue::Text("x".to_string())
    );
}

#[test]
fn unsigned_overflow_fails_naming_the_parameter() {
    let err = json_to_sql("big", &json!(u64::MAX)).unwrap_err();
    match err {
        SqlJsonError::Value { name, .. } => assert_eq!(name, "big"),
        other => panic!("expected Value, got {other:?}"),
    }
}

#[test]
fn containers_are_not_bindable() {
    for bad in [json!([1]), json!({"x": 1})] {
        let err = json_to_sql("shape", &bad).unwrap_err();
        match err {
            SqlJsonError::Value { name, .. } => assert_eq!(name, "shape"),
            other => panic!("expected Value, got {other:?}"),
        }
    }
}

#[test]
fn round_trip_through_the_database_is_lossless() {
    let conn = setup();
    conn.execute_batch(
        "create table v (i integer, f real, t text, n, b blob);
         insert into v values (9007199254740993, 0.25, 'snö', null, x'00ff');",
    )
    .expect("seed");
    let rows = query::run(&conn, "select i, f, t, n, b from v", &serde_json::Map::new())
        .expect("query ok");
    assert_eq!(rows.len(), 1);
    // 2^53 + 1 is exactly the magnitude a double would silently round away
    assert_eq!(rows[0]["i"], json!(9007199254740993i64));
    assert_eq!(rows[0]["f"], json!(0.25));
    assert_eq!(rows[0]["t"], json!("snö"));
    assert_eq!(rows[0]["n"], json!(null));
    assert_eq!(rows[0]["b"], json!("AP8="));
}
