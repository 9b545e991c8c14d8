use std::time::Duration;

use url::Url;

use crate::OAuthError;

pub const DEFAULT_BASE_URL: &str = "https://api.dashnex.com";

const ENV_CLIENT_ID: &str = "DASHNEX_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "DASHNEX_CLIENT_SECRET";
const ENV_REDIRECT_URI: &str = "DASHNEX_REDIRECT_URI";
const ENV_BASE_URL: &str = "DASHNEX_BASE_URL";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub client_id: String,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(client_id: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: None,
            redirect_uri: redirect_uri.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Reads `DASHNEX_CLIENT_ID`, `DASHNEX_REDIRECT_URI` and the optional
    /// `DASHNEX_CLIENT_SECRET` / `DASHNEX_BASE_URL` from the process environment.
    pub fn from_env() -> Result<Self, OAuthError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    pub fn from_env_with<F>(lookup: F) -> Result<Self, OAuthError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| OAuthError::configuration(format!("{key} is not set")))
        };

        let mut config = Self::new(required(ENV_CLIENT_ID)?, required(ENV_REDIRECT_URI)?);
        if let Some(secret) = lookup(ENV_CLIENT_SECRET) {
            config = config.with_client_secret(secret);
        }
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|value| !value.is_empty()) {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }

    /// An empty secret is treated the same as no secret.
    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        let client_secret = client_secret.into();
        self.client_secret = (!client_secret.is_empty()).then_some(client_secret);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn uses_pkce(&self) -> bool {
        self.client_secret.is_none()
    }

    pub fn validate(&self) -> Result<(), OAuthError> {
        if self.client_id.trim().is_empty() {
            return Err(OAuthError::configuration("client id must not be empty"));
        }

        let redirect = Url::parse(&self.redirect_uri).map_err(|err| {
            OAuthError::configuration(format!("redirect uri must be absolute: {err}"))
        })?;
        if redirect.cannot_be_a_base() {
            return Err(OAuthError::configuration(
                "redirect uri must be a hierarchical absolute uri",
            ));
        }

        Url::parse(&self.base_url)
            .map_err(|err| OAuthError::configuration(format!("invalid base url: {err}")))?;
        Ok(())
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
