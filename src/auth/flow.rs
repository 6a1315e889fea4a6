//! Credential loading orchestration.
//!
//! Ties the cache file, token refresh, and the externally supplied consent
//! flow into the load-or-refresh-or-authorize sequence.

use super::credentials::{CredentialError, Credentials};
use super::refresh::refresh_access_token;
use async_trait::async_trait;
use std::path::Path;

/// Scope required for photo library access
pub const PHOTOS_SCOPE: &str = "https://www.googleapis.com/auth/photoslibrary";

/// Interactive authorization collaborator.
///
/// Implementations run the user consent step (loopback listener, browser,
/// whatever the host application prefers) and return freshly issued
/// credentials. This crate never runs consent itself.
#[async_trait]
pub trait AuthorizationFlow {
    async fn authorize(
        &self,
        client_secrets_path: &Path,
        scopes: &[String],
    ) -> Result<Credentials, CredentialError>;
}

/// Load credentials from the cache, refreshing or re-authorizing as needed.
///
/// Valid cached credentials are returned without touching the cache file.
/// Expired credentials with a refresh token are refreshed in place; anything
/// else (no cache, empty token, expired without refresh token) goes through
/// the consent flow with the required photo library scope. Refreshed or
/// newly issued credentials are persisted before being returned.
pub async fn load_credentials<F>(
    cache_path: &Path,
    client_secrets_path: &Path,
    flow: &F,
) -> Result<Credentials, CredentialError>
where
    F: AuthorizationFlow + Sync,
{
    let cached = if cache_path.is_file() {
        Some(Credentials::from_cache_file(cache_path)?)
    } else {
        None
    };

    let credentials = match cached {
        Some(credentials) if credentials.is_valid() => credentials,
        Some(mut credentials)
            if credentials.is_expired() && credentials.refresh_token().is_some() =>
        {
            tracing::info!("Cached credentials expired, refreshing");
            let client = reqwest::Client::new();
            refresh_access_token(&client, &mut credentials).await?;
            credentials.persist(cache_path)?;
            credentials
        }
        _ => {
            tracing::info!("No usable cached credentials, starting authorization flow");
            let credentials = flow
                .authorize(client_secrets_path, &[PHOTOS_SCOPE.to_string()])
                .await?;
            credentials.persist(cache_path)?;
            credentials
        }
    };

    Ok(credentials)
}
