//! Filter sets for each API operation
//!
//! Field names follow local snake_case conventions. Each `query` method maps
//! them onto the API's camelCase keys.

use std::fmt;

use clap::ValueEnum;

use crate::query::QueryParams;

/// Fields quotes can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QuoteSortBy {
    #[value(name = "dateAdded")]
    DateAdded,
    #[value(name = "dateModified")]
    DateModified,
    #[value(name = "author")]
    Author,
    #[value(name = "content")]
    Content,
}

impl QuoteSortBy {
    pub fn as_str(&self) -> &str {
        match self {
            Self::DateAdded => "dateAdded",
            Self::DateModified => "dateModified",
            Self::Author => "author",
            Self::Content => "content",
        }
    }
}

/// Fields authors and tags can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AuthorSortBy {
    #[value(name = "dateAdded")]
    DateAdded,
    #[value(name = "dateModified")]
    DateModified,
    #[value(name = "name")]
    Name,
    #[value(name = "quoteCount")]
    QuoteCount,
}

impl AuthorSortBy {
    pub fn as_str(&self) -> &str {
        match self {
            Self::DateAdded => "dateAdded",
            Self::DateModified => "dateModified",
            Self::Name => "name",
            Self::QuoteCount => "quoteCount",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for QuoteSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AuthorSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for `GET quotes/random/`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RandomQuoteParams {
    /// Number of quotes to return (API range 1..=50)
    pub limit: Option<u32>,
    pub min_len: Option<u32>,
    pub max_len: Option<u32>,
    /// Comma-separated for AND, pipe-separated for OR
    pub tags: Option<String>,
    /// Pipe-separated for several authors
    pub author: Option<String>,
}

impl RandomQuoteParams {
    pub fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("limit", self.limit)
            .push_opt("minLength", self.min_len)
            .push_opt("maxLength", self.max_len)
            .push_opt("tags", self.tags.as_deref())
            .push_opt("author", self.author.as_deref());
        query
    }
}

/// Filters for `GET quotes`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListQuotesParams {
    pub min_len: Option<u32>,
    pub max_len: Option<u32>,
    pub tags: Option<String>,
    pub author: Option<String>,
    pub sort_by: Option<QuoteSortBy>,
    pub order: Option<SortOrder>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuotesParams {
    pub fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("minLength", self.min_len)
            .push_opt("maxLength", self.max_len)
            .push_opt("tags", self.tags.as_deref())
            .push_opt("author", self.author.as_deref())
            .push_opt("sortBy", self.sort_by)
            .push_opt("order", self.order)
            .push_opt("limit", self.limit)
            .push_opt("page", self.page);
        query
    }
}

/// Filters for `GET search/quotes`
///
/// The search string itself is passed separately to
/// [`Client::search_quotes`](crate::Client::search_quotes).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchQuotesParams {
    /// Comma-separated subset of `content`, `author`, `tags`
    pub fields: Option<String>,
    pub fuzzy_max_edits: Option<u32>,
    pub fuzzy_max_expansions: Option<u32>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl SearchQuotesParams {
    pub fn query(&self, search: &str) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("query", search)
            .push_opt("fields", self.fields.as_deref())
            .push_opt("fuzzyMaxEdits", self.fuzzy_max_edits)
            .push_opt("fuzzyMaxExpansions", self.fuzzy_max_expansions)
            .push_opt("limit", self.limit)
            .push_opt("page", self.page);
        query
    }
}

/// Filters for `GET authors`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListAuthorsParams {
    /// Pipe-separated for several slugs
    pub slug: Option<String>,
    pub sort_by: Option<AuthorSortBy>,
    pub order: Option<SortOrder>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl ListAuthorsParams {
    pub fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("slug", self.slug.as_deref())
            .push_opt("sortBy", self.sort_by)
            .push_opt("order", self.order)
            .push_opt("limit", self.limit)
            .push_opt("page", self.page);
        query
    }
}

/// Filters for `GET search/authors`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchAuthorsParams {
    pub autocomplete: Option<bool>,
    /// Minimum number of search terms that must match (API range 1..=3)
    pub match_threshold: Option<u32>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl SearchAuthorsParams {
    pub fn query(&self, search: &str) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("query", search)
            .push_opt("autocomplete", self.autocomplete)
            .push_opt("matchThreshold", self.match_threshold)
            .push_opt("limit", self.limit)
            .push_opt("page", self.page);
        query
    }
}

/// Filters for `GET tags`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListTagsParams {
    pub sort_by: Option<AuthorSortBy>,
    pub order: Option<SortOrder>,
}

impl ListTagsParams {
    pub fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("sortBy", self.sort_by)
            .push_opt("order", self.order);
        query
    }
}
