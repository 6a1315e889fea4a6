//! Response models for the photo library API.
//!
//! Thin typed wrappers over the raw JSON objects the API returns. No I/O
//! happens here; construction either succeeds or surfaces the underlying
//! structural error.

mod album;
mod media_item;

pub use album::Album;
pub use media_item::MediaItem;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// The response object is missing a field or has the wrong shape
    #[error("malformed API response: {0}")]
    Shape(#[from] serde_json::Error),
    /// The reported media item count is not an integer string
    #[error("invalid media item count: {0}")]
    MediaCount(#[from] std::num::ParseIntError),
}
