//! A client for the [Quotable](https://api.quotable.io/) quotes API
//!
//! [`Client`] builds one GET per operation from a typed filter set, drops
//! every filter left unset, and returns the response re-indented for display.

mod client;
mod config;
mod endpoint;
mod error;
mod json;
mod params;
mod query;
mod transport;

pub use client::{check_id, check_query, Client};
pub use config::{Config, DEFAULT_BASE_URL};
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use json::format;
pub use params::{
    AuthorSortBy, ListAuthorsParams, ListQuotesParams, ListTagsParams, QuoteSortBy,
    RandomQuoteParams, SearchAuthorsParams, SearchQuotesParams, SortOrder,
};
pub use query::QueryParams;
pub use transport::{HttpTransport, Transport};
