use std::time::Duration;

use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::{
    Client, RequestBuilder, StatusCode,
    header::{HeaderName, HeaderValue},
};

use crate::OAuthError;

/// Outbound POST with a pre-encoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Reason phrase sent by the server, or the canonical one for the status.
    pub status_text: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport used by [`crate::OAuthClient`] for token requests.
///
/// Implementations surface network failures as [`OAuthError::Http`] or
/// [`OAuthError::Transport`] and must not retry.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, OAuthError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    http: Client,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, OAuthError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
        })
    }

    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, OAuthError> {
        let builder = apply_headers(self.http.post(&request.url), &request.headers)?;
        let response = builder.body(request.body).send().await?;

        let status = response.status();
        let status_text = status_text(status, response.extensions().get::<ReasonPhrase>());
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text,
            body: body.to_vec(),
        })
    }
}

/// hyper only records a reason phrase when it differs from the canonical one.
fn status_text(status: StatusCode, reason: Option<&ReasonPhrase>) -> String {
    match reason {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => status.canonical_reason().unwrap_or_default().to_string(),
    }
}

fn apply_headers(
    mut builder: RequestBuilder,
    headers: &[(String, String)],
) -> Result<RequestBuilder, OAuthError> {
    for (name, value) in headers {
        let name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|_| OAuthError::InvalidHeader {
                name: name.clone(),
                value: value.clone(),
            })?;
        let value = HeaderValue::from_str(value).map_err(|_| OAuthError::InvalidHeader {
            name: name.to_string(),
            value: value.clone(),
        })?;
        builder = builder.header(name, value);
    }
    Ok(builder)
}
