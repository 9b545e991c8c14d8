use serde::Serialize;

pub(crate) const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";
pub(crate) const GRANT_REFRESH_TOKEN: &str = "refresh_token";

/// Body of the authorization code grant. Credential fields are omitted
/// entirely when absent.
#[derive(Debug, Serialize)]
pub(crate) struct AuthorizationCodeGrant<'a> {
    pub grant_type: &'static str,
    pub code: &'a str,
    pub redirect_uri: &'a str,
    pub client_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_verifier: Option<&'a str>,
}

/// Body of the refresh grant. `client_secret` is always sent and becomes
/// `null` for public clients.
#[derive(Debug, Serialize)]
pub(crate) struct RefreshTokenGrant<'a> {
    pub grant_type: &'static str,
    pub refresh_token: &'a str,
    pub client_id: &'a str,
    pub client_secret: Option<&'a str>,
}
