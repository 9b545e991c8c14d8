use thiserror::Error;

#[derive(Debug, Error)]
pub enum OAuthError {
    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("os rng error: {message}")]
    OsRng { message: String },

    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid header: {name}={value}")]
    InvalidHeader { name: String, value: String },

    #[error("token exchange failed: {status} {status_text}")]
    TokenExchange { status: u16, status_text: String },

    #[error("token refresh failed: {status}")]
    TokenRefresh { status: u16 },

    #[error("invalid response: {message}")]
    InvalidResponse { message: String, body: String },

    #[error("missing authorization code in callback url")]
    MissingAuthorizationCode,

    #[error("authorization denied: {error}")]
    AuthorizationDenied {
        error: String,
        description: Option<String>,
    },
}

impl OAuthError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub(crate) fn missing_credential() -> Self {
        Self::configuration(
            "missing credential: either client secret or code verifier must be provided",
        )
    }
}
