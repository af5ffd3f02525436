use sqlx::SqlitePool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::entry::{Entry, NewEntry};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS entries (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT, body TEXT, emotionColor TEXT, intensity INTEGER, date TEXT, imageUri TEXT)";

/// Append-only access to the `entries` table. Rows are never updated or
/// deleted through this type.
#[derive(Clone)]
pub struct EntryStore {
    db: SqlitePool,
}

impl EntryStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Creates the table if it does not exist. Safe to run on every start.
    pub async fn initialize(&self) -> AppResult<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to create entries table");
                e
            })?;

        tracing::debug!("Entries table ready");
        Ok(())
    }

    /// Inserts a new entry and returns its id. Nothing is written when the
    /// request fails validation (empty title, intensity out of range).
    pub async fn create(&self, entry: &NewEntry, date: &str) -> AppResult<i64> {
        if let Err(e) = entry.validate() {
            tracing::debug!(error = %e, "Entry rejected before insert");
            return Err(e.into());
        }

        let result = sqlx::query(
            "INSERT INTO entries (title, body, emotionColor, intensity, date, imageUri) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&entry.title)
        .bind(&entry.body)
        .bind(&entry.emotion_color)
        .bind(entry.intensity)
        .bind(date)
        .bind(&entry.image_uri)
        .execute(&self.db)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to insert entry");
            e
        })?;

        let id = result.last_insert_rowid();
        tracing::info!(entry_id = id, emotion_color = %entry.emotion_color, "Entry created");
        Ok(id)
    }

    /// Every entry, most recently created first.
    pub async fn list_all(&self) -> AppResult<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>("SELECT * FROM entries ORDER BY id DESC")
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to load entries");
                e
            })?;

        Ok(entries)
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM entries")
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }

    /// Whether the underlying connection still answers.
    pub async fn ping(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.db)
            .await
            .is_ok()
    }

    /// Like `ping`, but a dead connection is an error.
    pub async fn check_ready(&self) -> AppResult<()> {
        if self.ping().await {
            Ok(())
        } else {
            tracing::error!("Store did not answer");
            Err(AppError::Unavailable)
        }
    }
}
