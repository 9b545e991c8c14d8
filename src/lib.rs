//! OAuth 2.0 authorization code client for the DashNex identity provider.
//!
//! Confidential clients authenticate token requests with their client secret.
//! Clients configured without a secret use PKCE instead: the authorization URL
//! carries an S256 code challenge and the matching verifier must be supplied
//! to [`OAuthClient::exchange_code`].

mod client;
mod config;
mod error;
mod http;
mod pkce;
mod request;
mod types;

pub use client::OAuthClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::OAuthError;
pub use http::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use pkce::{CODE_CHALLENGE_METHOD, PkcePair, generate_state};
pub use types::{AuthToken, AuthorizationRequest, AuthorizationResponse};
