#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Sharing failed: {0}")]
    Share(String),

    #[error("Store unavailable")]
    Unavailable,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_values()
            .flatten()
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect::<Vec<_>>()
            .join(", ");

        if message.is_empty() {
            AppError::Validation(errors.to_string())
        } else {
            AppError::Validation(message)
        }
    }
}

impl AppError {
    /// One line safe to show to the person using the journal.
    ///
    /// Store and file failures are logged with their full cause here and
    /// replaced by a generic line; validation and sharing messages pass
    /// through as they are.
    pub fn status_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Share(_) => self.to_string(),
            AppError::Unavailable => "The journal store is unavailable".into(),
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                "The journal store is unavailable".into()
            }
            AppError::Io(e) => {
                tracing::error!(error = %e, "I/O error");
                "A file could not be read or written".into()
            }
            AppError::Serialization(e) => {
                tracing::error!(error = %e, "Serialization error");
                "The export document could not be produced".into()
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
