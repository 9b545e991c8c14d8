use serde::Serialize;
use tracing::{debug, trace};
use url::Url;

use crate::http::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::pkce::{self, CODE_CHALLENGE_METHOD};
use crate::request::{
    AuthorizationCodeGrant, GRANT_AUTHORIZATION_CODE, GRANT_REFRESH_TOKEN, RefreshTokenGrant,
};
use crate::{AuthToken, AuthorizationRequest, ClientConfig, OAuthError, PkcePair};

const AUTHORIZE_PATH: &str = "/oauth/v2/auth";
const TOKEN_PATH: &str = "/oauth/v2/token";
const USER_AGENT: &str = "DNX";

#[derive(Debug, Clone)]
pub struct OAuthClient<H: HttpClient = ReqwestHttpClient> {
    config: ClientConfig,
    http: H,
}

impl OAuthClient<ReqwestHttpClient> {
    pub fn new(config: ClientConfig) -> Result<Self, OAuthError> {
        config.validate()?;
        let http = ReqwestHttpClient::new(config.timeout)?;
        Ok(Self { config, http })
    }
}

impl<H: HttpClient> OAuthClient<H> {
    pub fn with_http_client(config: ClientConfig, http: H) -> Result<Self, OAuthError> {
        config.validate()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn http_client(&self) -> &H {
        &self.http
    }

    /// Builds the provider authorization URL for a browser redirect.
    ///
    /// Public clients get a PKCE challenge attached, but the matching verifier
    /// is dropped; use [`Self::authorization_request`] to keep it.
    pub fn authorization_url(&self, scope: &str) -> Result<String, OAuthError> {
        Ok(self.authorization_request(scope)?.authorization_url)
    }

    pub fn authorization_request(&self, scope: &str) -> Result<AuthorizationRequest, OAuthError> {
        let state = pkce::generate_state()?;
        let pkce = if self.config.uses_pkce() {
            Some(PkcePair::generate()?)
        } else {
            None
        };

        let mut url = Url::parse(&self.config.endpoint(AUTHORIZE_PATH))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("client_id", &self.config.client_id)
                .append_pair("redirect_uri", &self.config.redirect_uri)
                .append_pair("response_type", "code")
                .append_pair("scope", scope)
                .append_pair("state", &state);
            if let Some(pkce) = &pkce {
                pairs
                    .append_pair("code_challenge", &pkce.code_challenge)
                    .append_pair("code_challenge_method", CODE_CHALLENGE_METHOD);
            }
        }

        trace!(pkce = pkce.is_some(), "built authorization url");

        Ok(AuthorizationRequest {
            authorization_url: url.to_string(),
            state,
            scope: scope.to_string(),
            pkce,
        })
    }

    pub async fn exchange_code(
        &self,
        code: &str,
        code_verifier: Option<&str>,
    ) -> Result<AuthToken, OAuthError> {
        let client_secret = self.config.client_secret.as_deref();
        let code_verifier = code_verifier.filter(|verifier| !verifier.is_empty());
        if client_secret.is_none() && code_verifier.is_none() {
            return Err(OAuthError::missing_credential());
        }

        let body = AuthorizationCodeGrant {
            grant_type: GRANT_AUTHORIZATION_CODE,
            code,
            redirect_uri: &self.config.redirect_uri,
            client_id: &self.config.client_id,
            client_secret,
            code_verifier,
        };

        self.send_token_request(GRANT_AUTHORIZATION_CODE, &body, |response| {
            OAuthError::TokenExchange {
                status: response.status,
                status_text: response.status_text.clone(),
            }
        })
        .await
    }

    pub async fn refresh_token(&self, refresh_token: &str) -> Result<AuthToken, OAuthError> {
        let body = RefreshTokenGrant {
            grant_type: GRANT_REFRESH_TOKEN,
            refresh_token,
            client_id: &self.config.client_id,
            client_secret: self.config.client_secret.as_deref(),
        };

        self.send_token_request(GRANT_REFRESH_TOKEN, &body, |response| {
            OAuthError::TokenRefresh {
                status: response.status,
            }
        })
        .await
    }

    async fn send_token_request<B, F>(
        &self,
        grant_type: &str,
        body: &B,
        on_failure: F,
    ) -> Result<AuthToken, OAuthError>
    where
        B: Serialize,
        F: FnOnce(&HttpResponse) -> OAuthError,
    {
        let endpoint = self.config.endpoint(TOKEN_PATH);
        let request = HttpRequest {
            url: endpoint.clone(),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("User-Agent".to_string(), USER_AGENT.to_string()),
            ],
            body: serde_json::to_vec(body)?,
        };

        debug!(grant_type, endpoint = %endpoint, "sending token request");
        let response = self.http.post(request).await?;
        debug!(grant_type, status = response.status, "token endpoint responded");

        if !response.is_success() {
            return Err(on_failure(&response));
        }

        serde_json::from_slice(&response.body).map_err(|err| OAuthError::InvalidResponse {
            message: err.to_string(),
            body: String::from_utf8_lossy(&response.body).into_owned(),
        })
    }
}
