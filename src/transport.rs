use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::{debug, warn};
use url::Url;

use crate::error::{Error, Result};

/// Performs a single GET and yields the raw response body
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url) -> Result<String>;
}

/// A [`Transport`] backed by reqwest
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = client_builder(user_agent)
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(Self::with_client(client))
    }

    /// Wraps an already configured reqwest client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn client_builder(user_agent: &str) -> reqwest::ClientBuilder {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .user_agent(user_agent)
        .default_headers(headers)
}

#[async_trait]
impl Transport for HttpTransport {
    /// Sends the request and reads the body
    ///
    /// A non-success status is not an error: the API describes failures in a
    /// JSON body, which is returned like any other.
    async fn get(&self, url: Url) -> Result<String> {
        let to_error = |url: &Url, err: reqwest::Error| Error::Transport {
            url: url.to_string(),
            source: Box::new(err),
        };

        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| to_error(&url, err))?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "response");
        } else {
            warn!(%status, %url, "API returned an error status");
        }

        response.text().await.map_err(|err| to_error(&url, err))
    }
}
