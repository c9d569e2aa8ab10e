//! sqljson – run one SQL statement against a SQLite database and emit the
//! rows as JSON.
//!
//! The pipeline is strictly sequential: build the bindings, execute the
//! statement, shape the output, serialize once. Each stage finishes before
//! the next begins, so execution errors always surface before any output is
//! produced.
//!
//! ## Modules
//! * [`value`] – per-cell conversions between SQLite storage classes and
//!   JSON values, and from JSON bindings back to statement parameters.
//! * [`bind`] – merges ordered binding sources into one map, later sources
//!   overriding earlier ones key by key.
//! * [`query`] – prepares and steps one statement, materializing every row
//!   as a column-name → JSON-value object in declared column order.
//! * [`shape`] – resolves the output document: bare array, `{key: rows}`,
//!   or an existing JSON object with one field replaced.
//! * [`settings`] – explicit configuration loaded once at startup.
//! * [`error`] – the crate error enum with stable per-kind exit codes.
//!
//! ## Quick Start
//! ```
//! use rusqlite::Connection;
//! use sqljson::{query, shape};
//! let conn = Connection::open_in_memory().unwrap();
//! conn.execute_batch("create table t (id integer, name text); insert into t values (1, 'a');").unwrap();
//! let rows = query::run(&conn, "select id, name from t", &serde_json::Map::new()).unwrap();
//! let document = shape::shape(rows, None, Some("rows")).unwrap();
//! assert_eq!(document["rows"][0]["name"], "a");
//! ```

pub mod bind;
pub mod error;
pub mod query;
pub mod settings;
pub mod shape;
pub mod value;
