//! Spotify Web API client using the OAuth2 client-credentials flow.

use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::clients::errors::{Error, Result};

/// Base URL for Spotify Web API resource endpoints.
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
/// Token endpoint for the client-credentials exchange.
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Client for the Spotify Web API.
///
/// The access token is obtained once at construction time and held for the
/// lifetime of the client. It is never refreshed: if the token expires
/// mid-session, subsequent calls fail with [`Error::RequestFailedError`]
/// carrying status 401.
#[derive(Debug)]
pub struct SpotifyClient {
    http: Client,
    access_token: String,
    api_url: String,
}

impl SpotifyClient {
    /// Create a client against the production Spotify endpoints.
    ///
    /// Performs the token exchange eagerly; construction fails with
    /// [`Error::AuthenticationError`] if the exchange fails in any way.
    pub async fn new(client_id: &str, client_secret: &str) -> Result<Self> {
        Self::with_endpoints(client_id, client_secret, SPOTIFY_TOKEN_URL, SPOTIFY_API_URL).await
    }

    /// Create a client against caller-supplied token and API base URLs.
    pub async fn with_endpoints(
        client_id: &str,
        client_secret: &str,
        token_url: &str,
        api_url: &str,
    ) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let access_token =
            retrieve_access_token(&http, token_url, client_id, client_secret).await?;
        Ok(SpotifyClient {
            http,
            access_token,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET`
    /// environment variables.
    pub async fn try_default() -> Result<Self> {
        let client_id = std::env::var("SPOTIFY_CLIENT_ID").map_err(|_| {
            Error::ConfigurationError("Missing SPOTIFY_CLIENT_ID environment variable".into())
        })?;
        let client_secret = std::env::var("SPOTIFY_CLIENT_SECRET").map_err(|_| {
            Error::ConfigurationError("Missing SPOTIFY_CLIENT_SECRET environment variable".into())
        })?;
        Self::new(&client_id, &client_secret).await
    }

    /// Fetch a single item from the API.
    ///
    /// `endpoint` is the path below the API base URL, for example
    /// `tracks/11dFghVXANMlKmJXsNCbNl`. Any non-2xx status surfaces as
    /// [`Error::RequestFailedError`]; network failures surface as
    /// [`Error::TransportError`]. No retries are performed.
    pub async fn get_item(&self, endpoint: &str) -> Result<Value> {
        let url = format!("{}/{}", self.api_url, endpoint);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json::<Value>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::RequestFailedError {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Fetch a track by its Spotify id.
    pub async fn get_track(&self, track_id: &str) -> Result<Value> {
        self.get_item(&format!("tracks/{track_id}")).await
    }

    /// Fetch an artist by its Spotify id.
    pub async fn get_artist(&self, artist_id: &str) -> Result<Value> {
        self.get_item(&format!("artists/{artist_id}")).await
    }

    /// Fetch an album by its Spotify id.
    pub async fn get_album(&self, album_id: &str) -> Result<Value> {
        self.get_item(&format!("albums/{album_id}")).await
    }
}

// Exchange client credentials for a bearer token.
// Every failure mode here (transport, non-200 status, malformed body) is an
// authentication failure from the caller's point of view.
async fn retrieve_access_token(
    http: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String> {
    let encoded = STANDARD.encode(format!("{client_id}:{client_secret}"));
    debug!("Requesting access token from {token_url}");

    let response = http
        .post(token_url)
        .header(reqwest::header::AUTHORIZATION, format!("Basic {encoded}"))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| Error::AuthenticationError(e.to_string()))?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::AuthenticationError(format!(
            "token endpoint returned status {status}: {body}"
        )));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| Error::AuthenticationError(format!("malformed token response: {e}")))?;

    debug!("Obtained access token");
    Ok(token.access_token)
}
