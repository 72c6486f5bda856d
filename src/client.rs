use tracing::info;

use crate::config::Config;
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::json;
use crate::params::{
    ListAuthorsParams, ListQuotesParams, ListTagsParams, RandomQuoteParams, SearchAuthorsParams,
    SearchQuotesParams,
};
use crate::query::QueryParams;
use crate::transport::{HttpTransport, Transport};

/// A client for the Quotable API
///
/// Every operation issues exactly one GET and returns the response body
/// re-indented for display. Required arguments are checked before anything
/// is sent.
pub struct Client<T = HttpTransport> {
    config: Config,
    transport: T,
}

impl Client<HttpTransport> {
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpTransport::new(&config.user_agent)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `GET quotes/random/`
    pub async fn random_quote(&self, params: &RandomQuoteParams) -> Result<String> {
        self.fetch(Endpoint::RandomQuote, &params.query()).await
    }

    /// `GET quotes`
    pub async fn list_quotes(&self, params: &ListQuotesParams) -> Result<String> {
        self.fetch(Endpoint::Quotes, &params.query()).await
    }

    /// `GET quotes/{id}`
    pub async fn quote_by_id(&self, id: &str) -> Result<String> {
        let id = check_id(id)?;
        self.fetch(Endpoint::Quote(id), &QueryParams::new()).await
    }

    /// `GET search/quotes`
    pub async fn search_quotes(&self, query: &str, params: &SearchQuotesParams) -> Result<String> {
        let query = check_query(query)?;
        self.fetch(Endpoint::SearchQuotes, &params.query(query)).await
    }

    /// `GET authors`
    pub async fn list_authors(&self, params: &ListAuthorsParams) -> Result<String> {
        self.fetch(Endpoint::Authors, &params.query()).await
    }

    /// `GET authors/{id}`
    pub async fn author_by_id(&self, id: &str) -> Result<String> {
        let id = check_id(id)?;
        self.fetch(Endpoint::Author(id), &QueryParams::new()).await
    }

    /// `GET search/authors`
    pub async fn search_authors(
        &self,
        query: &str,
        params: &SearchAuthorsParams,
    ) -> Result<String> {
        let query = check_query(query)?;
        self.fetch(Endpoint::SearchAuthors, &params.query(query)).await
    }

    /// `GET tags`
    pub async fn list_tags(&self, params: &ListTagsParams) -> Result<String> {
        self.fetch(Endpoint::Tags, &params.query()).await
    }

    async fn fetch(&self, endpoint: Endpoint<'_>, query: &QueryParams) -> Result<String> {
        let url = endpoint.url(&self.config.base_url, query)?;
        info!(endpoint = endpoint.path(), "fetching");

        let body = self.transport.get(url).await?;
        json::format(&body)
    }
}

/// Accepts an identifier that names exactly one resource
///
/// `.` and `..` are dropped when pushed as path segments, which would turn a
/// lookup into a listing request.
pub fn check_id(id: &str) -> Result<&str> {
    let id = required("id", id)?;
    match id {
        "." | ".." => Err(Error::InvalidId(id.to_string())),
        _ => Ok(id),
    }
}

/// Accepts a search string with at least one non-blank character
pub fn check_query(query: &str) -> Result<&str> {
    required("query", query)
}

fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        Err(Error::MissingArgument(name))
    } else {
        Ok(value)
    }
}
