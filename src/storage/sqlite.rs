use super::types::AnalyzedText;

use chrono::NaiveDateTime;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::path::Path;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS analysis_history (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT NOT NULL,
        timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
    )
"#;

const SELECT_LAST: &str = r#"
    SELECT text, timestamp
    FROM analysis_history
    ORDER BY timestamp DESC, id DESC
    LIMIT 1
"#;

/// Keeps exactly one "last analyzed text" record.
///
/// Two states: empty (nothing ever saved) and holding one text. `save` always moves
/// to the second state and discards the previous text permanently.
#[derive(Debug, Clone)]
pub struct LastTextStore {
    pool: SqlitePool,
}

impl LastTextStore {
    /// Opens (creating if needed) the database file at `path` and its table.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, sqlx::Error> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;

        tracing::info!("Opened text store at {}", path.display());
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Replaces whatever was stored with `text`, stamped with the current time.
    pub async fn save(&self, text: &str) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM analysis_history")
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("INSERT INTO analysis_history (text) VALUES (?)")
            .bind(text)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            "Saved analyzed text ({} bytes), replaced {} record(s)",
            text.len(),
            removed
        );
        Ok(())
    }

    /// The stored text, or `None` if nothing has been saved yet.
    pub async fn get_last(&self) -> Result<Option<String>, sqlx::Error> {
        Ok(self.get_last_record().await?.map(|record| record.text))
    }

    pub async fn get_last_record(&self) -> Result<Option<AnalyzedText>, sqlx::Error> {
        let row = sqlx::query(SELECT_LAST)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| -> Result<AnalyzedText, sqlx::Error> {
            let timestamp: NaiveDateTime = row.try_get("timestamp")?;
            Ok(AnalyzedText {
                text: row.try_get("text")?,
                timestamp: timestamp.and_utc(),
            })
        })
        .transpose()
    }

    /// Number of rows in the table. Always 0 or 1 outside a write.
    pub async fn record_count(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM analysis_history")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
