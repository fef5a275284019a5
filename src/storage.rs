use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Namespaced key holding the theme preference
pub const THEME_KEY: &str = "unthinkable-theme";

/// Small persistent key-value store for client preferences
pub struct Preferences {
    conn: Connection,
}

impl Preferences {
    /// Open the store at its default location
    pub fn open_default() -> Result<Self> {
        let path = crate::utils::preferences_path();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        Self::open(&path)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open preferences at {}", path.display()))?;
        let prefs = Preferences { conn };
        prefs.init_schema()?;
        Ok(prefs)
    }

    /// Throwaway store; nothing survives the process
    pub fn in_memory() -> Result<Self> {
        let prefs = Preferences {
            conn: Connection::open_in_memory()?,
        };
        prefs.init_schema()?;
        Ok(prefs)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            ) WITHOUT ROWID;
            ",
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}
