use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::db::EntryStore;
use crate::error::AppResult;
use crate::models::entry::{Entry, NewEntry};
use crate::services::collaborators::ShareSink;
use crate::services::export::{self, ExportReport, ExportTarget};
use crate::services::wrapped::{self, WeeklyAggregate};

pub const WRAPPED_CARD_NAME: &str = "mindpalace_wrapped.txt";

/// The caller side of the store: holds the entry list the grid shows and
/// re-reads it in full after every write.
pub struct Journal {
    store: EntryStore,
    entries: Vec<Entry>,
}

impl Journal {
    /// Prepares the table and loads every entry.
    pub async fn open(store: EntryStore) -> AppResult<Self> {
        store.initialize().await?;

        let mut journal = Self {
            store,
            entries: Vec::new(),
        };
        journal.refresh().await?;
        Ok(journal)
    }

    pub async fn refresh(&mut self) -> AppResult<&[Entry]> {
        self.entries = self.store.list_all().await?;
        tracing::debug!(entries = self.entries.len(), "Journal refreshed");
        Ok(&self.entries)
    }

    /// Stores `entry` stamped with the time of day of `captured_at`, then
    /// reloads the list. Returns the new id once the row is written; a failed
    /// reload is logged and leaves the previous list in place.
    pub async fn save_entry<Tz>(
        &mut self,
        entry: &NewEntry,
        captured_at: &DateTime<Tz>,
    ) -> AppResult<i64>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let id = self.store.create(entry, &time_label(captured_at)).await?;
        if let Err(e) = self.refresh().await {
            tracing::warn!(entry_id = id, error = %e, "Entry saved but reload failed");
        }
        Ok(id)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn wrapped(&self) -> Option<WeeklyAggregate> {
        wrapped::compute(&self.entries)
    }

    pub async fn export<S: ShareSink>(
        &self,
        target: &ExportTarget,
        sink: &S,
    ) -> AppResult<ExportReport> {
        export::export_all(&self.store, target, sink).await
    }

    /// Hands the rendered Wrapped card to `sink`. Returns `false` without
    /// touching the sink when there are no entries.
    pub async fn share_wrapped<S: ShareSink>(&self, sink: &S) -> AppResult<bool> {
        let Some(stats) = self.wrapped() else {
            return Ok(false);
        };

        let card = wrapped::render_card(&stats);
        sink.share_bytes(WRAPPED_CARD_NAME, card.as_bytes())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Sharing Wrapped card failed");
                e
            })?;
        tracing::info!(vibe = %stats.vibe_name, "Wrapped card shared");

        Ok(true)
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }
}

/// Two-digit `HH:MM` time-of-day label stored in the `date` column.
pub fn time_label<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Mutex;

    use chrono::{FixedOffset, Utc};

    use super::*;
    use crate::error::AppError;
    use crate::db::create_pool;
    use crate::models::emotion::{EmotionColor, Vibe};

    #[derive(Default)]
    struct RecordingSink {
        cards: Mutex<Vec<(String, Vec<u8>)>>,
    }

    impl ShareSink for RecordingSink {
        async fn share(&self, _path: &Path) -> AppResult<()> {
            Ok(())
        }

        async fn share_bytes(&self, name: &str, bytes: &[u8]) -> AppResult<()> {
            self.cards.lock().unwrap().push((name.to_string(), bytes.to_vec()));
            Ok(())
        }
    }

    struct FailingSink;

    impl ShareSink for FailingSink {
        async fn share(&self, _path: &Path) -> AppResult<()> {
            Err(AppError::Share("cancelled".into()))
        }

        async fn share_bytes(&self, _name: &str, _bytes: &[u8]) -> AppResult<()> {
            Err(AppError::Share("cancelled".into()))
        }
    }

    async fn open_journal() -> Journal {
        let store = EntryStore::new(create_pool("sqlite::memory:").await.unwrap());
        Journal::open(store).await.unwrap()
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 12, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_time_label_is_two_digit() {
        assert_eq!(time_label(&at(7, 5)), "07:05");
        assert_eq!(time_label(&at(23, 59)), "23:59");
    }

    #[test]
    fn test_time_label_uses_local_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(time_label(&at(22, 30).with_timezone(&offset)), "00:30");
    }

    #[tokio::test]
    async fn test_open_on_empty_store() {
        let journal = open_journal().await;
        assert!(journal.entries().is_empty());
        assert_eq!(journal.wrapped(), None);
    }

    #[tokio::test]
    async fn test_save_reloads_list() {
        let mut journal = open_journal().await;

        let first = journal
            .save_entry(&NewEntry::new("Walk").with_emotion(EmotionColor::Green), &at(9, 0))
            .await
            .unwrap();
        assert_eq!(journal.entries().len(), 1);

        let second = journal
            .save_entry(&NewEntry::new("Nap"), &at(14, 20))
            .await
            .unwrap();

        let ids: Vec<i64> = journal.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![second, first]);
        assert_eq!(journal.entries()[0].date, "14:20");
        assert_eq!(journal.entries()[0].emotion_color, "#05D9E8");
    }

    #[tokio::test]
    async fn test_rejected_save_leaves_list_unchanged() {
        let mut journal = open_journal().await;
        journal.save_entry(&NewEntry::new("Kept"), &at(8, 0)).await.unwrap();

        let err = journal.save_entry(&NewEntry::new(""), &at(8, 1)).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(journal.entries().len(), 1);
        assert_eq!(journal.store().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_wrapped_follows_saved_entries() {
        let mut journal = open_journal().await;
        for color in [EmotionColor::Red, EmotionColor::Red, EmotionColor::Blue] {
            journal
                .save_entry(&NewEntry::new("mood").with_emotion(color), &at(12, 0))
                .await
                .unwrap();
        }

        // Newest first: blue, red, red
        let stats = journal.wrapped().unwrap();
        assert_eq!(stats.top_color, "#FF2A6D");
        assert_eq!(stats.percentage, 67);
        assert_eq!(stats.vibe_name, Vibe::Intense);
    }

    #[tokio::test]
    async fn test_reopen_keeps_existing_rows() {
        let pool = create_pool("sqlite::memory:").await.unwrap();

        let mut journal = Journal::open(EntryStore::new(pool.clone())).await.unwrap();
        journal.save_entry(&NewEntry::new("Once"), &at(10, 0)).await.unwrap();

        let reopened = Journal::open(EntryStore::new(pool)).await.unwrap();
        assert_eq!(reopened.entries().len(), 1);
        assert_eq!(reopened.entries()[0].title, "Once");
    }

    // ── failed reload after a write ──────────────────────────────────────

    #[tokio::test]
    async fn test_save_returns_id_when_reload_fails() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        let mut journal = Journal::open(EntryStore::new(pool.clone())).await.unwrap();

        // A row with a NULL title cannot be decoded, so every reload fails.
        sqlx::query(
            "INSERT INTO entries (title, emotionColor, intensity, date) VALUES (NULL, '#05D9E8', 50, '00:00')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let id = journal
            .save_entry(&NewEntry::new("Written"), &at(11, 0))
            .await
            .unwrap();
        assert!(id > 0);
        assert_eq!(journal.store().count().await.unwrap(), 2);
        assert!(journal.entries().is_empty());
    }

    // ── share_wrapped ────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_share_wrapped_sends_card() {
        let mut journal = open_journal().await;
        for color in [EmotionColor::Blue, EmotionColor::Blue, EmotionColor::Pink] {
            journal
                .save_entry(&NewEntry::new("mood").with_emotion(color), &at(18, 0))
                .await
                .unwrap();
        }

        let sink = RecordingSink::default();
        assert!(journal.share_wrapped(&sink).await.unwrap());

        let cards = sink.cards.lock().unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].0, WRAPPED_CARD_NAME);
        let card = String::from_utf8(cards[0].1.clone()).unwrap();
        assert_eq!(card, wrapped::render_card(&journal.wrapped().unwrap()));
        assert!(card.contains("DREAMY"));
        assert!(card.contains("67%"));
    }

    #[tokio::test]
    async fn test_share_wrapped_on_empty_journal_is_noop() {
        let journal = open_journal().await;
        let sink = RecordingSink::default();

        assert!(!journal.share_wrapped(&sink).await.unwrap());
        assert!(sink.cards.lock().unwrap().is_empty());
        // An empty journal never reaches a failing sink either.
        assert!(!journal.share_wrapped(&FailingSink).await.unwrap());
    }

    #[tokio::test]
    async fn test_share_wrapped_failure_is_returned() {
        let mut journal = open_journal().await;
        journal.save_entry(&NewEntry::new("one"), &at(9, 30)).await.unwrap();

        let err = journal.share_wrapped(&FailingSink).await.unwrap_err();
        assert!(matches!(err, AppError::Share(_)));
    }
}
