use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{PairError, PairResult};

/// A container of extracted features, queried only for the image names it
/// holds.
pub trait FeatureStore {
    /// Distinct image names, sorted lexicographically.
    fn image_names(&self) -> PairResult<Vec<String>>;
}

/// SQLite feature database with the COLMAP `images` table layout.
pub struct SqliteFeatureStore {
    conn: Connection,
}

impl SqliteFeatureStore {
    /// Opens an existing feature database read-only.
    pub fn open(db_path: &Path) -> PairResult<Self> {
        if !db_path.exists() {
            return Err(PairError::io(
                db_path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "feature store not found"),
            ));
        }
        let conn = Connection::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        let store = Self { conn };
        store.check_schema()?;
        Ok(store)
    }

    /// Creates (or reopens) a writable feature database. Used to register
    /// image names for a run when no COLMAP database exists yet.
    pub fn create(db_path: &Path) -> PairResult<Self> {
        let conn = Connection::open(db_path)?;
        let mut store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    fn ensure_schema(&mut self) -> PairResult<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS images (
              image_id INTEGER PRIMARY KEY AUTOINCREMENT,
              name TEXT NOT NULL UNIQUE,
              camera_id INTEGER NOT NULL DEFAULT 0
            );
            "#,
        )?;
        Ok(())
    }

    fn check_schema(&self) -> PairResult<()> {
        let table: Option<String> = self
            .conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'images'",
                [],
                |row| row.get(0),
            )
            .optional()?;
        if table.is_none() {
            return Err(PairError::InputSelection(
                "a feature store without an images table".to_string(),
            ));
        }
        Ok(())
    }

    /// Registers an image name; re-adding a known name is a no-op.
    pub fn add_image(&mut self, name: &str, camera_id: u32) -> PairResult<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO images (name, camera_id) VALUES (?1, ?2)",
            params![name, camera_id],
        )?;
        Ok(())
    }
}

impl FeatureStore for SqliteFeatureStore {
    fn image_names(&self) -> PairResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT name FROM images")?;
        let mut rows = stmt.query([])?;
        let mut names = BTreeSet::new();
        while let Some(row) = rows.next()? {
            let name: Option<String> = row.get(0)?;
            match name {
                Some(name) if !name.trim().is_empty() => {
                    names.insert(name);
                }
                _ => log::warn!("feature store: skipping image row without a name"),
            }
        }
        Ok(names.into_iter().collect())
    }
}
