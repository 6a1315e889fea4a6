//! Album model.

use super::ModelError;
use serde::Deserialize;

/// Raw API response shape; the count arrives as a string
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAlbum {
    id: String,
    media_items_count: String,
    title: String,
}

/// A named collection of media items with a reported count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    identifier: String,
    media_count: u64,
    title: String,
}

impl Album {
    /// Build an album directly from field values.
    pub fn new(identifier: String, media_count: u64, title: String) -> Self {
        Self {
            identifier,
            media_count,
            title,
        }
    }

    /// Build an album from a raw API response object.
    ///
    /// Expects the keys `id`, `mediaItemsCount`, and `title`; the count is
    /// parsed from its string representation.
    pub fn from_response(response: serde_json::Value) -> Result<Self, ModelError> {
        let raw: RawAlbum = serde_json::from_value(response)?;
        let media_count = raw.media_items_count.parse::<u64>()?;
        Ok(Self::new(raw.id, media_count, raw.title))
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn media_count(&self) -> u64 {
        self.media_count
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}
