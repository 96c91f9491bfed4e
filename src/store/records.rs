//! Student record storage over SQLite.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection, Row};

use super::errors::{StoreError, StoreResult};

/// A single student record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    /// Unique integer identifier
    pub roll_number: i64,
    /// Student name; the empty string is valid text
    pub name: String,
}

/// SQLite-backed store for student records
///
/// Holds no open connection; each operation connects, runs one statement,
/// and closes.
#[derive(Debug, Clone)]
pub struct RecordStore {
    database_file: PathBuf,
}

impl RecordStore {
    /// Create a store for the given database file
    pub fn new(database_file: impl Into<PathBuf>) -> Self {
        Self {
            database_file: database_file.into(),
        }
    }

    /// Path to the database file
    pub fn database_file(&self) -> &Path {
        &self.database_file
    }

    /// Open a fresh connection, creating the database file if absent
    async fn connect(&self) -> StoreResult<SqliteConnection> {
        let options = SqliteConnectOptions::new()
            .filename(&self.database_file)
            .create_if_missing(true);

        let conn = options.connect().await?;
        Ok(conn)
    }

    /// Create the record table if absent. Idempotent.
    ///
    /// Any failure here (e.g. an unwritable database path) is fatal to
    /// startup; callers must not serve traffic until this succeeds.
    pub async fn init_schema(&self) -> StoreResult<()> {
        let mut conn = self.connect().await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS student_record (
                roll_number INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            )",
        )
        .execute(&mut conn)
        .await?;

        conn.close().await?;
        Ok(())
    }

    /// Insert a record within an implicit single-statement transaction.
    ///
    /// Fails with [`StoreError::DuplicateKey`] if the roll number is
    /// already present; the existing row is left untouched.
    pub async fn insert_record(&self, record: &StudentRecord) -> StoreResult<()> {
        let mut conn = self.connect().await?;

        let result = sqlx::query("INSERT INTO student_record (roll_number, name) VALUES (?, ?)")
            .bind(record.roll_number)
            .bind(&record.name)
            .execute(&mut conn)
            .await;

        let _ = conn.close().await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::DuplicateKey)
            }
            Err(e) => Err(StoreError::Storage(e)),
        }
    }

    /// Fetch a record by roll number, if present.
    ///
    /// Not exposed over HTTP; exists for direct storage inspection.
    pub async fn get_record(&self, roll_number: i64) -> StoreResult<Option<StudentRecord>> {
        let mut conn = self.connect().await?;

        let row = sqlx::query("SELECT roll_number, name FROM student_record WHERE roll_number = ?")
            .bind(roll_number)
            .fetch_optional(&mut conn)
            .await?;

        conn.close().await?;

        Ok(row.map(|row| StudentRecord {
            roll_number: row.get(0),
            name: row.get(1),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store(tmp: &TempDir) -> RecordStore {
        RecordStore::new(tmp.path().join("records.db"))
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let tmp = TempDir::new().unwrap();
        let store = temp_store(&tmp);
        store.init_schema().await.unwrap();

        let record = StudentRecord {
            roll_number: 1,
            name: "Ada".to_string(),
        };
        store.insert_record(&record).await.unwrap();

        let fetched = store.get_record(1).await.unwrap();
        assert_eq!(fetched, Some(record));
    }

    #[tokio::test]
    async fn test_get_missing_record() {
        let tmp = TempDir::new().unwrap();
        let store = temp_store(&tmp);
        store.init_schema().await.unwrap();

        let fetched = store.get_record(404).await.unwrap();
        assert_eq!(fetched, None);
    }

    #[tokio::test]
    async fn test_duplicate_roll_number() {
        let tmp = TempDir::new().unwrap();
        let store = temp_store(&tmp);
        store.init_schema().await.unwrap();

        let first = StudentRecord {
            roll_number: 7,
            name: "Grace".to_string(),
        };
        store.insert_record(&first).await.unwrap();

        let second = StudentRecord {
            roll_number: 7,
            name: "Edsger".to_string(),
        };
        let err = store.insert_record(&second).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey));

        // The first record is unchanged
        let fetched = store.get_record(7).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Grace");
    }
}
