use url::Url;

use crate::error::{Error, Result};
use crate::query::QueryParams;

/// The API's endpoint catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    RandomQuote,
    Quotes,
    Quote(&'a str),
    SearchQuotes,
    Authors,
    Author(&'a str),
    SearchAuthors,
    Tags,
}

impl<'a> Endpoint<'a> {
    /// The path relative to the API root, excluding any identifier segment
    pub fn path(&self) -> &'static str {
        match self {
            Self::RandomQuote => "quotes/random/",
            Self::Quotes | Self::Quote(_) => "quotes",
            Self::SearchQuotes => "search/quotes",
            Self::Authors | Self::Author(_) => "authors",
            Self::SearchAuthors => "search/authors",
            Self::Tags => "tags",
        }
    }

    fn id(&self) -> Option<&'a str> {
        match *self {
            Self::Quote(id) | Self::Author(id) => Some(id),
            _ => None,
        }
    }

    /// Builds the full request URL
    ///
    /// `base` must end with a `/`. Identifiers are pushed as a single encoded
    /// path segment, and the query string is only set when `query` has pairs.
    pub fn url(&self, base: &Url, query: &QueryParams) -> Result<Url> {
        let mut url = base.join(self.path())?;

        if let Some(id) = self.id() {
            url.path_segments_mut()
                .map_err(|_| Error::BaseUrl(base.to_string()))?
                .pop_if_empty()
                .push(id);
        }

        if !query.is_empty() {
            url.set_query(Some(&query.encode()));
        }

        Ok(url)
    }
}
