//! Platform collaborators the journal hands work to: where photos come from
//! and where exported files and summary cards go.

#![allow(async_fn_in_trait)]

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::error::{AppError, AppResult};

/// Supplies a local reference to a photo. `Ok(None)` means the person
/// cancelled the picker.
pub trait ImageSource {
    async fn pick(&self) -> AppResult<Option<String>>;
}

/// Presents content to the person so they can save or send it: either a
/// file already on disk or an in-memory payload such as a summary card.
pub trait ShareSink {
    async fn share(&self, path: &Path) -> AppResult<()>;

    async fn share_bytes(&self, name: &str, bytes: &[u8]) -> AppResult<()>;
}

/// Image source backed by an optional path given on the command line.
#[derive(Debug, Clone, Default)]
pub struct FileImageSource {
    path: Option<PathBuf>,
}

impl FileImageSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl ImageSource for FileImageSource {
    async fn pick(&self) -> AppResult<Option<String>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_file() {
            return Err(AppError::Validation(format!(
                "{} is not a file",
                path.display()
            )));
        }

        let absolute = tokio::fs::canonicalize(path).await?;
        Ok(Some(format!("file://{}", absolute.display())))
    }
}

/// Share sink for a terminal: reports where the file was written.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutShareSink;

impl ShareSink for StdoutShareSink {
    async fn share(&self, path: &Path) -> AppResult<()> {
        if !tokio::fs::try_exists(path).await? {
            return Err(AppError::Share(format!("{} does not exist", path.display())));
        }

        tracing::info!(path = %path.display(), "Export ready to share");
        println!("{}", path.display());
        Ok(())
    }

    async fn share_bytes(&self, name: &str, bytes: &[u8]) -> AppResult<()> {
        if bytes.is_empty() {
            return Err(AppError::Share(format!("{name} is empty")));
        }

        let mut stdout = tokio::io::stdout();
        stdout.write_all(bytes).await?;
        if !bytes.ends_with(b"\n") {
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;

        tracing::info!(name, bytes = bytes.len(), "Shared in-memory content");
        Ok(())
    }
}
