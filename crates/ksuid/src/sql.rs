//! SQLite column binding.
//!
//! Identifiers are written as their 27-character text form, so `ORDER BY`
//! on the column sorts by creation time. Reads accept text, the 20-byte
//! binary form stored as a BLOB, or `NULL`, which maps to [`Ksuid::NIL`].

use crate::Ksuid;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

impl ToSql for Ksuid {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(String::from(*self)))
    }
}

impl FromSql for Ksuid {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Self::NIL),
            ValueRef::Text(src) | ValueRef::Blob(src) => {
                Self::scan(src).map_err(|err| FromSqlError::Other(Box::new(err)))
            }
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PAYLOAD_LEN, Sequence};
    use rusqlite::{Connection, params};

    const KNOWN: &str = "0ujtsYcgvSTl8PAuAdqWYSMnLOv";

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE events (id TEXT, raw BLOB)")
            .unwrap();
        conn
    }

    #[test]
    fn stores_text_form() {
        let conn = conn();
        let id = Ksuid::parse(KNOWN).unwrap();
        conn.execute("INSERT INTO events (id) VALUES (?1)", params![id])
            .unwrap();

        let (text, back): (String, Ksuid) = conn
            .query_row("SELECT id, id FROM events", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();
        assert_eq!(text, KNOWN);
        assert_eq!(back, id);
    }

    #[test]
    fn reads_binary_form() {
        let conn = conn();
        let id = Ksuid::parse(KNOWN).unwrap();
        conn.execute(
            "INSERT INTO events (raw) VALUES (?1)",
            params![&id.as_bytes()[..]],
        )
        .unwrap();

        let back: Ksuid = conn
            .query_row("SELECT raw FROM events", [], |row| row.get(0))
            .unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn null_reads_as_nil() {
        let conn = conn();
        let id: Ksuid = conn.query_row("SELECT NULL", [], |row| row.get(0)).unwrap();
        assert!(id.is_nil());

        let id: Ksuid = conn.query_row("SELECT x''", [], |row| row.get(0)).unwrap();
        assert!(id.is_nil());
    }

    #[test]
    fn rejects_other_values() {
        let conn = conn();
        let res: rusqlite::Result<Ksuid> = conn.query_row("SELECT 42", [], |row| row.get(0));
        assert!(res.is_err());

        let res: rusqlite::Result<Ksuid> = conn.query_row("SELECT 'short'", [], |row| row.get(0));
        assert!(res.is_err());

        let res: rusqlite::Result<Ksuid> = conn.query_row(
            "SELECT 'aWgEPTl1tmebfsQzFP4bxwgy80W'",
            [],
            |row| row.get(0),
        );
        assert!(res.is_err());
    }

    #[test]
    fn text_column_sorts_by_creation() {
        let conn = conn();
        let early = Ksuid::from_timestamp_and_payload(1, [0xFF; PAYLOAD_LEN]);
        let mut ids: Vec<_> = Sequence::new(early.next()).take(5).collect();
        ids.push(early);
        ids.push(Ksuid::MAX);
        ids.push(Ksuid::NIL);
        for id in ids.iter().rev() {
            conn.execute("INSERT INTO events (id) VALUES (?1)", params![id])
                .unwrap();
        }

        let mut stmt = conn.prepare("SELECT id FROM events ORDER BY id").unwrap();
        let sorted: Vec<Ksuid> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        ids.sort();
        assert_eq!(sorted, ids);
    }
}
