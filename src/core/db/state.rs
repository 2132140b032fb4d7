use std::path::{Path, PathBuf};

use anyhow::Context;
use sqlx::{
    Row,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous},
};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::debug;

use super::KeyValueStore;

const MAX_CONNECTIONS: u32 = 5;

/// One row of the preferences table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    pub key: String,
    pub value: String,
    pub updated_at: OffsetDateTime,
}

/// SQLite-backed [`KeyValueStore`]. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_file: PathBuf,
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the preference database and run migrations.
    pub async fn open<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        let db_file = db_file.as_ref().to_path_buf();
        if let Some(parent) = db_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create preference directory {:?}", parent))?;
        }

        let connect_opts = SqliteConnectOptions::new()
            .filename(&db_file)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(connect_opts)
            .await
            .with_context(|| format!("Failed to open preference database {:?}", db_file))?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        debug!(path = ?db_file, "preference store opened");

        Ok(Self { db_file, pool })
    }

    pub fn path(&self) -> &Path {
        &self.db_file
    }

    /// All stored rows, ordered by key.
    pub async fn entries(&self) -> anyhow::Result<Vec<StoredEntry>> {
        sqlx::query("SELECT key, value, updated_at FROM preferences ORDER BY key ASC")
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|row| -> anyhow::Result<StoredEntry> {
                let updated_at: String = row.try_get("updated_at")?;
                Ok(StoredEntry {
                    key: row.try_get("key")?,
                    value: row.try_get("value")?,
                    updated_at: OffsetDateTime::parse(&updated_at, &Rfc3339)
                        .with_context(|| format!("Invalid timestamp {:?}", updated_at))?,
                })
            })
            .collect()
    }

    /// Flush the WAL and close every connection.
    pub async fn close(&self) -> anyhow::Result<()> {
        sqlx::query("PRAGMA wal_checkpoint(TRUNCATE);")
            .execute(&self.pool)
            .await?;
        self.pool.close().await;
        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM preferences WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let updated_at = OffsetDateTime::now_utc().format(&Rfc3339)?;
        sqlx::query(
            r#"INSERT INTO preferences (key, value, updated_at) VALUES ($1, $2, $3)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM preferences WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
