//! Authentication module for the photo library API.
//!
//! Provides OAuth 2.0 credential caching: loading from a JSON cache file,
//! validity checks, token refresh, and the load-or-refresh-or-authorize
//! orchestration around an externally supplied consent flow.

mod credentials;
mod flow;
mod refresh;

pub use credentials::{
    CredentialError, Credentials, default_cache_path, default_client_secrets_path,
};
pub use flow::{AuthorizationFlow, PHOTOS_SCOPE, load_credentials};
pub use refresh::refresh_access_token;
