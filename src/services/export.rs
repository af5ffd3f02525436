use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::db::EntryStore;
use crate::error::AppResult;
use crate::models::entry::Entry;
use crate::services::collaborators::ShareSink;

#[derive(Debug, Clone)]
pub struct ExportTarget {
    pub dir: PathBuf,
    pub file_name: String,
}

impl ExportTarget {
    pub fn from_config(config: &Config) -> Self {
        Self {
            dir: config.export_dir.clone(),
            file_name: config.export_file_name.clone(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub path: PathBuf,
    pub entries: usize,
}

/// Pretty-printed JSON array, one object per row.
pub fn render_document(entries: &[Entry]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

pub fn parse_export(document: &str) -> AppResult<Vec<Entry>> {
    Ok(serde_json::from_str(document)?)
}

/// Reads every entry, writes the document to `target` and hands the file
/// to `sink`. The first failing step is returned; an existing file at the
/// target is overwritten.
pub async fn export_all<S: ShareSink>(
    store: &EntryStore,
    target: &ExportTarget,
    sink: &S,
) -> AppResult<ExportReport> {
    let entries = store.list_all().await?;
    let document = render_document(&entries)?;

    let path = target.path();
    tokio::fs::create_dir_all(&target.dir).await?;
    tokio::fs::write(&path, document).await.map_err(|e| {
        tracing::error!(error = %e, path = %path.display(), "Failed to write export");
        e
    })?;

    tracing::info!(path = %path.display(), entries = entries.len(), "Export written");

    sink.share(&path).await.map_err(|e| {
        tracing::warn!(error = %e, "Share step failed");
        e
    })?;

    Ok(ExportReport {
        path,
        entries: entries.len(),
    })
}
