//! Executes one SQL statement and materializes every result row.

// used for statement preparation and parameter binding
use rusqlite::Connection;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Result;
use crate::value;

/// A single result row: column name to JSON value, in declared column order.
pub type Row = Map<String, Value>;

/// Runs `sql` with the given bindings and returns the complete result set.
///
/// Named placeholders are matched against the binding map with their marker
/// character (`:`, `@` or `$`) stripped; a placeholder with no matching
/// binding stays NULL. Column names come from the statement's own metadata,
/// never from the data. The statement is stepped to completion before
/// anything is returned, so a pure DDL/DML statement yields an empty result
/// set and any engine failure surfaces before output construction begins.
pub fn run(conn: &Connection, sql: &str, bindings: &Map<String, Value>) -> Result<Vec<Row>> {
    let mut stmt = conn.prepare(sql)?;

    for index in 1..=stmt.parameter_count() {
        let name = match stmt.parameter_name(index) {
            Some(placeholder) => placeholder.trim_start_matches([':', '@', '$']).to_string(),
            // positional slots have no name to look up, leave them NULL
            None => continue,
        };
        match bindings.get(&name) {
            Some(bound) => {
                let parameter = value::json_to_sql(&name, bound)?;
                stmt.raw_bind_parameter(index, parameter)?;
            }
            None => debug!(placeholder = %name, "no binding supplied, staying NULL"),
        }
    }

    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let mut records = Vec::new();
    let mut rows = stmt.raw_query();
    while let Some(row) = rows.next()? {
        let mut record = Row::new();
        for (index, column) in columns.iter().enumerate() {
            let cell = row.get_ref(index)?;
            record.insert(column.clone(), value::column_to_json(column, cell)?);
        }
        records.push(record);
    }
    debug!(rows = records.len(), "query complete");
    Ok(records)
}
