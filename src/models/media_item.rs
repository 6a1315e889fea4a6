//! Media item model.

use super::ModelError;
use serde::Deserialize;

/// Raw API response shape
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMediaItem {
    id: String,
    filename: String,
    mime_type: String,
}

/// A single photo or video resource as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    identifier: String,
    filename: String,
    mime_type: String,
}

impl MediaItem {
    /// Build a media item directly from field values.
    pub fn new(identifier: String, filename: String, mime_type: String) -> Self {
        Self {
            identifier,
            filename,
            mime_type,
        }
    }

    /// Build a media item from a raw API response object.
    ///
    /// Expects the keys `id`, `filename`, and `mimeType`.
    pub fn from_response(response: serde_json::Value) -> Result<Self, ModelError> {
        let raw: RawMediaItem = serde_json::from_value(response)?;
        Ok(Self::new(raw.id, raw.filename, raw.mime_type))
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}
