//! SQLite-backed corpus of uploaded papers.
//!
//! Each record is addressed by its own caller-supplied key; upsert is
//! last-write-wins with no cross-record locking.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use crate::schema::SCHEMA_SQL;
use crate::vector::{blob_to_vector, vector_to_blob};
use paperlens_core::{Error, PaperRecord, Result, StoredVector};

/// Persistent store of previously uploaded papers.
pub struct PaperStore {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl PaperStore {
    /// Open or create the corpus database.
    ///
    /// `db_dir` is the directory (e.g., `data/corpus/`); the file will be
    /// `db_dir/papers.db`.
    pub fn open(db_dir: impl AsRef<Path>) -> Result<Self> {
        let db_dir = db_dir.as_ref();
        std::fs::create_dir_all(db_dir).map_err(|e| Error::Storage(e.to_string()))?;
        let db_path = db_dir.join("papers.db");

        let conn = Connection::open(&db_path).map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| Error::Database(format!("Schema init failed: {e}")))?;

        let store = Self {
            conn: Mutex::new(conn),
            db_path,
        };

        info!(
            "PaperStore initialized: {} papers, path={}",
            store.count()?,
            store.db_path.display()
        );
        Ok(store)
    }

    /// Insert or overwrite the record for `record.paper_id`.
    pub fn upsert(&self, record: &PaperRecord) -> Result<()> {
        if record.paper_id.trim().is_empty() {
            return Err(Error::Validation("paper_id is required".to_string()));
        }
        let now = chrono::Utc::now().timestamp();
        let blob = vector_to_blob(&record.vector);
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO papers (paper_id, text, vector, dim, filename, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
             ON CONFLICT(paper_id) DO UPDATE SET
                 text = excluded.text,
                 vector = excluded.vector,
                 dim = excluded.dim,
                 filename = excluded.filename,
                 updated_at = excluded.updated_at",
            params![
                record.paper_id,
                record.text,
                blob,
                record.vector.len() as i64,
                record.filename,
                now,
            ],
        )
        .map_err(|e| Error::Database(e.to_string()))?;
        Ok(())
    }

    /// Fetch one full record by id.
    pub fn get(&self, paper_id: &str) -> Result<Option<PaperRecord>> {
        let conn = self.conn.lock();
        conn.query_row(
            "SELECT paper_id, text, vector, dim, filename FROM papers WHERE paper_id = ?1",
            params![paper_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Vec<u8>>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, String>(4)?,
                ))
            },
        )
        .optional()
        .map_err(|e| Error::Database(e.to_string()))?
        .map(|(paper_id, text, blob, dim, filename)| {
            Ok(PaperRecord {
                paper_id,
                text,
                vector: blob_to_vector(&blob, dim as usize)?,
                filename,
            })
        })
        .transpose()
    }

    /// List every stored id, vector and filename. No text is materialized;
    /// the internal check reuses stored vectors directly.
    pub fn list_all(&self) -> Result<Vec<StoredVector>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare("SELECT paper_id, vector, dim, filename FROM papers ORDER BY paper_id")
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, Vec<u8>>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        let mut out = Vec::new();
        for row in rows {
            let (paper_id, blob, dim, filename) = row.map_err(|e| Error::Database(e.to_string()))?;
            out.push(StoredVector {
                paper_id,
                vector: blob_to_vector(&blob, dim as usize)?,
                filename,
            });
        }
        Ok(out)
    }

    /// Number of stored papers.
    pub fn count(&self) -> Result<i64> {
        let conn = self.conn.lock();
        conn.query_row("SELECT COUNT(*) FROM papers", [], |row| row.get(0))
            .map_err(|e| Error::Database(e.to_string()))
    }
}
