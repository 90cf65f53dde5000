use rusqlite::{Connection, OptionalExtension};

use crate::error::StorageError;
use crate::traits::SlotStore;

/// Durable slot backend over a single sqlite file.
pub struct SqliteSlot {
    conn: Connection,
}

impl SqliteSlot {
    pub fn open(path: &str) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        crate::schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        crate::schema::init_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl SlotStore for SqliteSlot {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1",
                rusqlite::params![key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, unixepoch())
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_none() -> Result<(), StorageError> {
        let slot = SqliteSlot::open_in_memory()?;
        assert_eq!(slot.get("localCharacters")?, None);
        Ok(())
    }

    #[test]
    fn set_overwrites_previous_value() -> Result<(), StorageError> {
        let mut slot = SqliteSlot::open_in_memory()?;
        slot.set("localCharacters", b"[1]")?;
        slot.set("localCharacters", b"[2]")?;
        assert_eq!(slot.get("localCharacters")?, Some(b"[2]".to_vec()));
        Ok(())
    }

    #[test]
    fn value_survives_reopen() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("roster.db");
        let path = path.to_str().unwrap();

        {
            let mut slot = SqliteSlot::open(path)?;
            slot.set("localCharacters", b"persisted")?;
        }

        let slot = SqliteSlot::open(path)?;
        assert_eq!(slot.get("localCharacters")?, Some(b"persisted".to_vec()));
        Ok(())
    }
}
