//! Credential cache handling.
//!
//! Credentials live in a single JSON cache file. Loading normalizes the
//! `scopes` field (a bare string becomes a one-element list) so the rest of
//! the crate only ever sees `Vec<String>`; persisting always writes the
//! array form back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory name under the user config directory
const CONFIG_DIR_NAME: &str = "photovault";
/// Default credential cache file name
const CACHE_FILE_NAME: &str = "credentials_cache.json";
/// Default OAuth client identification file name
const CLIENT_SECRETS_FILE_NAME: &str = "client_id.json";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential cache not found at {path}")]
    NotFound { path: PathBuf },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid credential cache: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("token refresh failed: {0}")]
    Refresh(String),
    #[error("authorization flow failed: {0}")]
    Flow(String),
}

/// OAuth 2.0 credentials for the photo library API.
///
/// Matches the JSON cache file shape; `expiry` is only present when the
/// token came from a refresh or flow that reported a lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    token: String,
    refresh_token: Option<String>,
    token_uri: String,
    client_id: String,
    client_secret: String,
    #[serde(deserialize_with = "string_or_list")]
    scopes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expiry: Option<DateTime<Utc>>,
}

/// Accept `scopes` as either a single string or a list of strings.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScopeField {
        Single(String),
        List(Vec<String>),
    }

    Ok(match ScopeField::deserialize(deserializer)? {
        ScopeField::Single(scope) => vec![scope],
        ScopeField::List(scopes) => scopes,
    })
}

impl Credentials {
    /// Build credentials directly from field values (freshly issued tokens).
    pub fn new(
        token: String,
        refresh_token: Option<String>,
        token_uri: String,
        client_id: String,
        client_secret: String,
        scopes: Vec<String>,
        expiry: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            token,
            refresh_token,
            token_uri,
            client_id,
            client_secret,
            scopes,
            expiry,
        }
    }

    /// Load credentials from a JSON cache file.
    pub fn from_cache_file(path: &Path) -> Result<Self, CredentialError> {
        if !path.exists() {
            return Err(CredentialError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let credentials: Credentials = serde_json::from_str(&content)?;
        tracing::debug!("Credentials loaded from cache: {:?}", path);
        Ok(credentials)
    }

    /// Persist credentials to the cache file, overwriting any existing file.
    pub fn persist(&self, path: &Path) -> Result<(), CredentialError> {
        let json = serde_json::to_string(self)?;

        // Restrict permissions on Unix before writing token material
        #[cfg(unix)]
        {
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;
            let file = fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)?;
            let mut file = std::io::BufWriter::new(file);
            file.write_all(json.as_bytes())?;
        }

        #[cfg(not(unix))]
        {
            fs::write(path, &json)?;
        }

        tracing::debug!("Credentials persisted to cache: {:?}", path);
        Ok(())
    }

    /// Whether the access token has passed its expiry time.
    ///
    /// Credentials without expiry metadata are treated as not expired.
    pub fn is_expired(&self) -> bool {
        self.expiry.is_some_and(|expiry| Utc::now() >= expiry)
    }

    /// Whether the credentials can authorize API calls as-is.
    pub fn is_valid(&self) -> bool {
        !self.token.is_empty() && !self.is_expired()
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn token_uri(&self) -> &str {
        &self.token_uri
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        self.expiry
    }

    /// Replace the access token after a successful refresh.
    pub(crate) fn apply_refresh(
        &mut self,
        token: String,
        refresh_token: Option<String>,
        expiry: Option<DateTime<Utc>>,
    ) {
        self.token = token;
        if refresh_token.is_some() {
            self.refresh_token = refresh_token;
        }
        self.expiry = expiry;
    }
}

/// Get the photovault config directory
fn config_dir() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|p| p.join(CONFIG_DIR_NAME))
}

/// Default location of the credential cache file
pub fn default_cache_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(CACHE_FILE_NAME))
}

/// Default location of the OAuth client identification file
pub fn default_client_secrets_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(CLIENT_SECRETS_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CACHE_WITH_LIST_SCOPES: &str = r#"{
        "token": "mock_token",
        "refresh_token": "refresh_token",
        "token_uri": "https://www.googleapis.com/oauth2/v3/token",
        "client_id": "client_id",
        "client_secret": "client_secret",
        "scopes": ["https://www.googleapis.com/auth/photoslibrary"]
    }"#;

    const CACHE_WITH_STRING_SCOPES: &str = r#"{
        "token": "mock_token",
        "refresh_token": "refresh_token",
        "token_uri": "https://www.googleapis.com/oauth2/v3/token",
        "client_id": "client_id",
        "client_secret": "client_secret",
        "scopes": "https://www.googleapis.com/auth/photoslibrary"
    }"#;

    fn write_cache(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("credentials_cache.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_missing_cache_is_not_found() {
        let err = Credentials::from_cache_file(Path::new("null.json")).unwrap_err();
        assert!(matches!(err, CredentialError::NotFound { .. }));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_cache(&dir, "this is not json");
        let err = Credentials::from_cache_file(&path).unwrap_err();
        assert!(matches!(err, CredentialError::Parse(_)));
    }

    #[test]
    fn test_load_missing_required_key_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_cache(&dir, r#"{"token": "mock_token"}"#);
        let err = Credentials::from_cache_file(&path).unwrap_err();
        assert!(matches!(err, CredentialError::Parse(_)));
    }

    #[test]
    fn test_load_cache_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_cache(&dir, CACHE_WITH_LIST_SCOPES);
        let credentials = Credentials::from_cache_file(&path).unwrap();

        assert_eq!(credentials.token(), "mock_token");
        assert_eq!(credentials.refresh_token(), Some("refresh_token"));
        assert_eq!(
            credentials.token_uri(),
            "https://www.googleapis.com/oauth2/v3/token"
        );
        assert_eq!(credentials.client_id(), "client_id");
        assert_eq!(credentials.client_secret(), "client_secret");
        assert_eq!(
            credentials.scopes(),
            ["https://www.googleapis.com/auth/photoslibrary"]
        );
        assert_eq!(credentials.expiry(), None);
    }

    #[test]
    fn test_string_scope_is_normalized_to_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_cache(&dir, CACHE_WITH_STRING_SCOPES);
        let credentials = Credentials::from_cache_file(&path).unwrap();

        assert_eq!(
            credentials.scopes(),
            ["https://www.googleapis.com/auth/photoslibrary"]
        );
    }

    #[test]
    fn test_persist_round_trips_cache_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_cache(&dir, CACHE_WITH_LIST_SCOPES);
        let credentials = Credentials::from_cache_file(&path).unwrap();

        let out_path = dir.path().join("temp_cache.json");
        credentials.persist(&out_path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
        let baseline: serde_json::Value = serde_json::from_str(CACHE_WITH_LIST_SCOPES).unwrap();
        assert_eq!(written, baseline);
    }

    #[test]
    fn test_persist_writes_string_scope_as_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_cache(&dir, CACHE_WITH_STRING_SCOPES);
        let credentials = Credentials::from_cache_file(&path).unwrap();

        let out_path = dir.path().join("temp_cache.json");
        credentials.persist(&out_path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
        assert_eq!(
            written["scopes"],
            json!(["https://www.googleapis.com/auth/photoslibrary"])
        );
    }

    #[test]
    fn test_validity_rules() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_cache(&dir, CACHE_WITH_LIST_SCOPES);
        let mut credentials = Credentials::from_cache_file(&path).unwrap();

        // Non-empty token, no expiry metadata: valid
        assert!(credentials.is_valid());
        assert!(!credentials.is_expired());

        // Past expiry: invalid
        credentials.expiry = Some(Utc::now() - chrono::Duration::hours(1));
        assert!(credentials.is_expired());
        assert!(!credentials.is_valid());

        // Future expiry: valid again
        credentials.expiry = Some(Utc::now() + chrono::Duration::hours(1));
        assert!(credentials.is_valid());

        // Empty token: never valid
        credentials.token = String::new();
        assert!(!credentials.is_valid());
    }
}
