use reqwest::{
    blocking::Client,
    header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION},
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::{fmt, time::Duration};
use thiserror::Error;
use tracing::{debug, info};

pub const ACCESS_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const REQUEST_TIMEOUT_SECONDS: u64 = 30;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("token endpoint answered {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("grant denied: {0}")]
    Denied(String),

    #[error("token response did not contain an access token")]
    MissingToken,

    #[error("access token is not a valid header value")]
    InvalidToken(#[from] InvalidHeaderValue),
}

/// The three strings identifying a registered Reddit application.
pub struct Credentials {
    pub client_id: String,
    pub client_secret: SecretString,
    pub user_agent: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
            user_agent: user_agent.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Body of the `access_token` endpoint. Reddit reports some failures with a 200 and an `error` field.
#[derive(Deserialize, Debug)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

impl TokenResponse {
    pub(crate) fn into_token(self) -> Result<SecretString, AuthError> {
        if let Some(error) = self.error {
            let reason = match (error, self.message) {
                (serde_json::Value::String(error), _) => error,
                (error, Some(message)) => format!("{error} {message}"),
                (error, None) => error.to_string(),
            };
            return Err(AuthError::Denied(reason));
        }
        match self.access_token {
            Some(token) if !token.is_empty() => Ok(SecretString::from(token)),
            _ => Err(AuthError::MissingToken),
        }
    }
}

/// Exchange the application credentials for an application-only token and return
/// an HTTP client that sends it with every request.
pub fn authenticate(credentials: &Credentials) -> Result<Client, AuthError> {
    authenticate_at(ACCESS_TOKEN_URL, credentials)
}

pub fn authenticate_at(token_url: &str, credentials: &Credentials) -> Result<Client, AuthError> {
    let timeout = Duration::from_secs(REQUEST_TIMEOUT_SECONDS);
    let http = Client::builder()
        .user_agent(&credentials.user_agent)
        .timeout(timeout)
        .build()?;

    debug!(client_id = %credentials.client_id, "requesting application-only token");
    let response = http
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(credentials.client_secret.expose_secret()))
        .form(&[("grant_type", "client_credentials")])
        .send()?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(AuthError::Rejected { status: status.as_u16(), body });
    }

    let response: TokenResponse = response.json()?;
    info!(
        token_type = response.token_type.as_deref().unwrap_or("bearer"),
        expires_in = response.expires_in.unwrap_or_default(),
        "acquired access token"
    );
    let token = response.into_token()?;

    let mut authorization = HeaderValue::from_str(&format!("bearer {}", token.expose_secret()))?;
    authorization.set_sensitive(true);
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);

    Ok(Client::builder()
        .user_agent(&credentials.user_agent)
        .default_headers(headers)
        .timeout(timeout)
        .build()?)
}
