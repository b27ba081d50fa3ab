//! SQLite catalogs: one table per record kind with arbitrary columns.

use camino::Utf8Path;
use etchant_core::Record;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use serde_json::{Number, Value};

use crate::error::CatalogError;
use crate::source::RecordKind;

fn to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null | ValueRef::Blob(_) => Value::Null,
        ValueRef::Integer(int) => Value::Number(int.into()),
        ValueRef::Real(real) => Number::from_f64(real).map_or(Value::Null, Value::Number),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn query_table(connection: &Connection, table: &str) -> rusqlite::Result<Vec<Record>> {
    let mut statement = connection.prepare(&format!("SELECT * FROM \"{table}\""))?;
    let columns: Vec<String> = statement
        .column_names()
        .into_iter()
        .map(str::to_owned)
        .collect();
    let mut rows = statement.query([])?;
    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        let mut record = Record::new();
        for (index, column) in columns.iter().enumerate() {
            record.insert(column.as_str(), to_json(row.get_ref(index)?));
        }
        records.push(record);
    }
    Ok(records)
}

/// Read every row of the table holding `kind` records.
///
/// Array columns are expected as JSON text and decoded by the record
/// accessors.
///
/// # Errors
/// Returns [`CatalogError::Sqlite`] when the database cannot be opened or
/// the table cannot be read.
pub fn read_records(path: &Utf8Path, kind: RecordKind) -> Result<Vec<Record>, CatalogError> {
    let table = kind.table_name();
    let wrap = |source| CatalogError::Sqlite {
        path: path.to_owned(),
        table,
        source,
    };
    let connection =
        Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(wrap)?;
    query_table(&connection, table).map_err(wrap)
}
