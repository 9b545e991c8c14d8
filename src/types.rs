use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::{OAuthError, PkcePair};

#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub authorization_url: String,
    pub state: String,
    pub scope: String,
    /// Present only for public clients. Keep `code_verifier` for the code exchange.
    pub pkce: Option<PkcePair>,
}

impl AuthorizationRequest {
    pub fn code_verifier(&self) -> Option<&str> {
        self.pkce.as_ref().map(|pkce| pkce.code_verifier.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationResponse {
    pub code: String,
    pub state: Option<String>,
}

impl AuthorizationResponse {
    pub fn from_url(callback_url: &str) -> Result<Self, OAuthError> {
        let url = Url::parse(callback_url)?;
        let mut code = None;
        let mut state = None;
        let mut error = None;
        let mut description = None;

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "code" => code = Some(value.into_owned()),
                "state" => state = Some(value.into_owned()),
                "error" => error = Some(value.into_owned()),
                "error_description" => description = Some(value.into_owned()),
                _ => {}
            }
        }

        if let Some(error) = error {
            return Err(OAuthError::AuthorizationDenied { error, description });
        }

        let code = code
            .filter(|code| !code.is_empty())
            .ok_or(OAuthError::MissingAuthorizationCode)?;
        Ok(Self { code, state })
    }
}

/// Token payload exactly as the provider returned it.
///
/// The JSON is kept verbatim and serializes back unchanged. Accessors read the
/// standard fields leniently and return `None` when a field is missing or has
/// an unexpected type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(Value);

impl AuthToken {
    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn access_token(&self) -> Option<&str> {
        self.str_field("access_token")
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.str_field("refresh_token")
    }

    pub fn scope(&self) -> Option<&str> {
        self.str_field("scope")
    }

    pub fn token_type(&self) -> Option<&str> {
        self.str_field("token_type")
    }

    /// Seconds until expiry; numeric strings are accepted.
    pub fn expires_in(&self) -> Option<u64> {
        match self.0.get("expires_in")? {
            Value::Number(number) => number.as_u64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn bearer_header(&self) -> Option<String> {
        let access_token = self.access_token()?;
        let token_type = self.token_type().unwrap_or("Bearer");
        Some(format!("{token_type} {access_token}"))
    }

    fn str_field(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }
}

impl From<Value> for AuthToken {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
