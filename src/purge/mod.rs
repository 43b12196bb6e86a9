//! Edge-cache purge.
//!
//! # Data Flow
//! ```text
//! Environment / CLI flags
//!     → PurgeCredentials::resolve (precondition check, no network)
//!     → purge_cache (single POST to the provider's purge endpoint)
//!     → interpret_response (explicit success field required)
//! ```
//!
//! # Design Decisions
//! - Fail fast: missing credentials abort before any network call
//! - Single attempt, no retry; this runs from CI or an operator shell
//! - A 200 status without `"success": true` in the body is a failure
//! - The raw provider body is surfaced on failure, never summarized away

use serde::Deserialize;
use url::Url;

/// Accepted API-key variable names, first non-empty wins.
pub const API_KEY_VARS: [&str; 2] = ["CLOUDFLARE_API_KEY", "CLOUDFLARE_API"];

/// Accepted zone-identifier variable names, first non-empty wins.
pub const ZONE_VARS: [&str; 2] = [
    "CLOUDFLARE_ZONE_BIGMULTIPLAYERCHESS",
    "CLOUDFLARE_ZONE_V5GAMES",
];

/// Account email variable name.
pub const EMAIL_VAR: &str = "CLOUDFLARE_EMAIL";

/// Fallback account email when the variable is unset.
pub const DEFAULT_EMAIL: &str = "ops@bigmultiplayerchess.com";

/// The fixed URL list purged after a content change.
pub const SITE_URLS: &[&str] = &[
    "https://bigmultiplayerchess.v5games.com/",
    "https://bigmultiplayerchess.v5games.com/play",
    "https://bigmultiplayerchess.v5games.com/static/js/game.js",
    "https://bigmultiplayerchess.v5games.com/static/css/site.css",
    "https://bigmultiplayerchessstatic.bigmultiplayerchess.com/",
];

/// Error type for the purge utility.
#[derive(Debug, thiserror::Error)]
pub enum PurgeError {
    #[error("missing API key: set {} or {}", API_KEY_VARS[0], API_KEY_VARS[1])]
    MissingApiKey,

    #[error("missing zone identifier: set {} or {}", ZONE_VARS[0], ZONE_VARS[1])]
    MissingZone,

    #[error("purge request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider rejected purge (status {status}): {body}")]
    Provider { status: u16, body: String },
}

/// Credentials for the cache provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeCredentials {
    pub api_key: String,
    pub email: String,
    pub zone: String,
}

impl PurgeCredentials {
    /// Resolve credentials from the process environment.
    pub fn from_env() -> Result<Self, PurgeError> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Resolve credentials through a lookup function.
    ///
    /// For key and zone the accepted names are tried in order and the first
    /// non-empty value wins; either missing entirely is a precondition
    /// failure. The email falls back to [`DEFAULT_EMAIL`].
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PurgeError> {
        let first_non_empty = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| lookup(name).filter(|v| !v.is_empty()))
        };

        let api_key = first_non_empty(&API_KEY_VARS).ok_or(PurgeError::MissingApiKey)?;
        let zone = first_non_empty(&ZONE_VARS).ok_or(PurgeError::MissingZone)?;
        let email = lookup(EMAIL_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_EMAIL.to_string());

        Ok(Self {
            api_key,
            email,
            zone,
        })
    }
}

/// Provider response body; only the success flag matters.
#[derive(Debug, Deserialize)]
struct PurgeResponse {
    #[serde(default)]
    success: bool,
}

/// Decide the outcome from the provider's status and raw body.
///
/// Success requires both a 2xx status and an explicit `"success": true` in
/// the body; an absent or false field fails even on 200.
pub fn interpret_response(status: u16, body: &str) -> Result<(), PurgeError> {
    let confirmed = (200..300).contains(&status)
        && serde_json::from_str::<PurgeResponse>(body)
            .map(|r| r.success)
            .unwrap_or(false);

    if confirmed {
        Ok(())
    } else {
        Err(PurgeError::Provider {
            status,
            body: body.to_string(),
        })
    }
}

/// Issue one purge request for the given URLs.
pub async fn purge_cache(
    client: &reqwest::Client,
    credentials: &PurgeCredentials,
    urls: &[Url],
) -> Result<(), PurgeError> {
    let endpoint = format!(
        "https://api.cloudflare.com/client/v4/zones/{}/purge_cache",
        credentials.zone
    );
    let files: Vec<&str> = urls.iter().map(Url::as_str).collect();

    let response = client
        .post(&endpoint)
        .header("X-Auth-Email", &credentials.email)
        .header("X-Auth-Key", &credentials.api_key)
        .json(&serde_json::json!({ "files": files }))
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.text().await?;
    interpret_response(status, &body)
}
