//! PhotoVault Core Library
//!
//! This crate provides the client-side plumbing shared by PhotoVault tools:
//! - Credential caching (load, validate, refresh, persist against a local JSON file)
//! - Typed response models for the photo library API (media items, albums)
//!
//! The interactive consent step is deliberately not implemented here; callers
//! supply an [`auth::AuthorizationFlow`] collaborator and this crate drives the
//! load-or-refresh-or-authorize sequence around it.
//!
//! # Example
//!
//! ```no_run
//! use photovault_core::{auth, models};
//! use std::path::Path;
//!
//! # struct ConsentFlow;
//! # #[async_trait::async_trait]
//! # impl auth::AuthorizationFlow for ConsentFlow {
//! #     async fn authorize(
//! #         &self,
//! #         _client_secrets_path: &Path,
//! #         _scopes: &[String],
//! #     ) -> Result<auth::Credentials, auth::CredentialError> {
//! #         unimplemented!()
//! #     }
//! # }
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load cached credentials, refreshing or re-authorizing as needed
//!     let credentials = auth::load_credentials(
//!         Path::new("configuration/credentials_cache.json"),
//!         Path::new("configuration/client_id.json"),
//!         &ConsentFlow,
//!     )
//!     .await?;
//!     println!("authorized with token {}", credentials.token());
//!
//!     // Wrap an API response object
//!     let album = models::Album::from_response(serde_json::json!({
//!         "id": "a", "mediaItemsCount": "12", "title": "Holiday"
//!     }))?;
//!     println!("{} has {} items", album.title(), album.media_count());
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod models;

// Re-export commonly used types
pub use auth::{AuthorizationFlow, CredentialError, Credentials, load_credentials};
pub use models::{Album, MediaItem, ModelError};
