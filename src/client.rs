//! HTTP dispatcher for the Paystack API.

use std::time::Duration;

use reqwest::{header, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    resources::{Customers, Disputes, Plans, Refunds, Subscriptions, Transactions, Transfers},
    response::{decode_into, Envelope},
    Error,
};

/// Request timeout for Paystack API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("paystack_api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Paystack API.
///
/// Holds the base URL, the secret key, and one shared `reqwest::Client`
/// reused across calls. All fields are immutable after construction, so a
/// `Client` is safe to share across tasks; rotating the secret key means
/// constructing a new `Client`.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://api.paystack.co`.
    base_url: String,
    secret_key: String,
}

impl Client {
    /// Creates a new client pointing at the production Paystack API.
    pub fn new(secret_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url("https://api.paystack.co", secret_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with
    /// wiremock.
    pub fn with_base_url(base_url: &str, secret_key: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key: secret_key.into(),
        })
    }

    /// Performs one authenticated round-trip against the API.
    ///
    /// Serializes `payload` (if any) to JSON, sends `method` to the base URL
    /// joined with `path` (query string pre-encoded by the caller), and
    /// decodes the response body into `dest`, injecting the HTTP status code
    /// and the raw body bytes.
    ///
    /// Every received response is decoded, 4xx and 5xx included; inspect
    /// `dest`'s status-code field to judge success. Cancellation is the
    /// usual future cancellation: drop the returned future (or race it with
    /// a timer) and the in-flight request is aborted without decoding.
    ///
    /// On error `dest`'s contents are undefined and must not be relied upon.
    pub async fn call<P, D>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&P>,
        dest: &mut D,
    ) -> Result<(), Error>
    where
        P: Serialize + ?Sized,
        D: DeserializeOwned + Envelope,
    {
        if self.secret_key.is_empty() {
            return Err(Error::MissingSecretKey);
        }
        let body = match payload {
            Some(payload) => Some(serde_json::to_vec(payload).map_err(Error::Serialize)?),
            None => None,
        };
        let url = Url::parse(format!("{}{}", self.base_url, path).as_str())?;
        tracing::debug!(%method, %url, "dispatching request");

        let mut request = self
            .http
            .request(method, url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.secret_key),
            )
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }
        let response = request.send().await.map_err(|e| {
            tracing::error!("request failed: {}", e);
            Error::Transport(e)
        })?;

        decode_into(response, dest).await
    }

    /// Access the `/transaction` endpoint group.
    pub fn transactions(&self) -> Transactions<'_> {
        Transactions::new(self)
    }

    /// Access the `/customer` endpoint group.
    pub fn customers(&self) -> Customers<'_> {
        Customers::new(self)
    }

    /// Access the `/plan` endpoint group.
    pub fn plans(&self) -> Plans<'_> {
        Plans::new(self)
    }

    /// Access the `/subscription` endpoint group.
    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(self)
    }

    /// Access the `/transfer` and `/transferrecipient` endpoint groups.
    pub fn transfers(&self) -> Transfers<'_> {
        Transfers::new(self)
    }

    /// Access the `/refund` endpoint group.
    pub fn refunds(&self) -> Refunds<'_> {
        Refunds::new(self)
    }

    /// Access the `/dispute` endpoint group.
    pub fn disputes(&self) -> Disputes<'_> {
        Disputes::new(self)
    }
}
