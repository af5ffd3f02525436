use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::emotion::EmotionColor;

pub const DEFAULT_INTENSITY: i32 = 50;

/// One row of the `entries` table. Field names serialize to the column
/// names, so an export document has the same shape as the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64,
    pub title: String,
    pub body: Option<String>,
    pub emotion_color: String,
    pub intensity: i32,
    pub date: String,
    pub image_uri: Option<String>,
}

impl Entry {
    pub fn emotion(&self) -> Option<EmotionColor> {
        EmotionColor::from_hex(&self.emotion_color)
    }
}

/// What the creation form submits. `date` is captured separately at save time.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewEntry {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub body: Option<String>,

    pub emotion_color: String,

    #[validate(range(min = 0, max = 100, message = "Intensity must be between 0 and 100"))]
    pub intensity: i32,

    pub image_uri: Option<String>,
}

impl NewEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            emotion_color: EmotionColor::default().hex().to_string(),
            intensity: DEFAULT_INTENSITY,
            image_uri: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.emotion_color = color.into();
        self
    }

    pub fn with_emotion(self, color: EmotionColor) -> Self {
        self.with_color(color.hex())
    }

    pub fn with_intensity(mut self, intensity: i32) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_image(mut self, image_uri: Option<String>) -> Self {
        self.image_uri = image_uri;
        self
    }
}
