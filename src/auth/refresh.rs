//! Access token refresh against the OAuth token endpoint.

use super::credentials::{CredentialError, Credentials};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    grant_type: &'a str,
    refresh_token: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    /// Some endpoints rotate the refresh token on use
    #[serde(default)]
    refresh_token: Option<String>,
}

/// Refresh the access token in place.
///
/// POSTs a `grant_type=refresh_token` form to the credentials' token
/// endpoint and replaces the token (and expiry metadata, when reported)
/// on success. The caller is responsible for persisting afterwards.
pub async fn refresh_access_token(
    client: &reqwest::Client,
    credentials: &mut Credentials,
) -> Result<(), CredentialError> {
    let refresh_token = credentials
        .refresh_token()
        .ok_or_else(|| CredentialError::Refresh("no refresh token available".to_string()))?;

    let request = RefreshRequest {
        grant_type: "refresh_token",
        refresh_token,
        client_id: credentials.client_id(),
        client_secret: credentials.client_secret(),
    };

    let resp = client
        .post(credentials.token_uri())
        .form(&request)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        tracing::error!("Token refresh failed: {} - {}", status, body);
        return Err(CredentialError::Refresh(format!(
            "token endpoint returned {}: {}",
            status, body
        )));
    }

    let refreshed: RefreshResponse = resp.json().await?;

    let expiry = refreshed
        .expires_in
        .map(|secs| Utc::now() + chrono::Duration::seconds(secs));
    credentials.apply_refresh(refreshed.access_token, refreshed.refresh_token, expiry);

    tracing::info!("Access token refreshed");
    Ok(())
}
