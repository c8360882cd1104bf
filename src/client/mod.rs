//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{Message, Response, ValidationError};

const DEFAULT_MESSAGES_ENDPOINT: &str = "https://api.pushover.net/1/messages.json";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`PushoverClient`].
///
/// Validation failures are detected locally before anything is sent; the
/// remaining variants surface transport and decode failures verbatim. Branch
/// on the variant to decide whether to fix the message
/// ([`PushoverError::Validation`]) or retry/alert (the rest).
pub enum PushoverError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status whose body was not a decodable API response.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected JSON shape.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The message failed one of the service's field constraints.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`PushoverClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct PushoverClientBuilder {
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PushoverClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent
    /// override.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_MESSAGES_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the message-submission endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`PushoverClient`].
    pub fn build(self) -> Result<PushoverClient, PushoverError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| PushoverError::Transport(Box::new(err)))?;

        Ok(PushoverClient {
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

impl Default for PushoverClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
/// High-level Pushover client.
///
/// This type orchestrates message validation, form encoding, and response
/// parsing. By default it posts to
/// `https://api.pushover.net/1/messages.json`. Credentials travel on each
/// [`Message`] (`token` + `user`), so one client serves any number of
/// applications and recipients; calls share no mutable state and the client
/// may be cloned freely across tasks.
pub struct PushoverClient {
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl PushoverClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`PushoverClient::builder`].
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_MESSAGES_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder() -> PushoverClientBuilder {
        PushoverClientBuilder::new()
    }

    /// Submit a message to the service.
    ///
    /// The message is validated first; on failure the violated rule is
    /// returned and no network call is made. The service reports per-request
    /// acceptance in [`Response::status`] and [`Response::errors`], including
    /// on 4xx responses, so a decodable body always yields `Ok`.
    ///
    /// Errors:
    /// - [`PushoverError::Validation`] for messages violating a field
    ///   constraint,
    /// - [`PushoverError::Transport`] for network/IO failures,
    /// - [`PushoverError::HttpStatus`] for non-2xx responses without a
    ///   decodable body,
    /// - [`PushoverError::Parse`] for 2xx responses without a decodable body.
    pub async fn send(&self, message: &Message) -> Result<Response, PushoverError> {
        let params = crate::transport::encode_message_form(message)?;

        let response = self
            .http
            .post_form(&self.endpoint, params)
            .await
            .map_err(PushoverError::Transport)?;

        match crate::transport::decode_message_json_response(&response.body) {
            Ok(parsed) => Ok(parsed),
            Err(err) if (200..=299).contains(&response.status) => {
                Err(PushoverError::Parse(Box::new(err)))
            }
            Err(_) => {
                let body = if response.body.trim().is_empty() {
                    None
                } else {
                    Some(response.body)
                };
                Err(PushoverError::HttpStatus {
                    status: response.status,
                    body,
                })
            }
        }
    }
}

impl Default for PushoverClient {
    fn default() -> Self {
        Self::new()
    }
}
