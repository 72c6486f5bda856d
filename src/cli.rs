use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};

use quotable::{
    AuthorSortBy, Client, Config, ListAuthorsParams, ListQuotesParams, ListTagsParams,
    QuoteSortBy, RandomQuoteParams, SearchAuthorsParams, SearchQuotesParams, SortOrder, Transport,
};

use crate::logging;

#[derive(Parser, Debug)]
#[command(version, about = "A CLI tool for the Quotable API", long_about = None)]
pub struct Cli {
    /// Use a different API root, e.g. a self-hosted mirror
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get random quotes
    GetRandomQuote(RandomQuoteArgs),

    /// Get all quotes matching a given query; by default a paginated list of
    /// all quotes
    GetQuote(ListQuotesArgs),

    /// Get a quote by its ID
    GetQuoteById(IdArgs),

    /// Search for quotes by keywords, content, and/or author name
    SearchQuote(SearchQuotesArgs),

    /// Get all authors matching a given query; by default a paginated list of
    /// all authors
    GetAuthor(ListAuthorsArgs),

    /// Search for authors by name
    SearchAuthor(SearchAuthorsArgs),

    /// Get an author by their ID
    GetAuthorById(IdArgs),

    /// Get a list of all tags
    GetTags(ListTagsArgs),
}

/// Filters shared by the two quote listings
#[derive(Args, Debug)]
pub struct QuoteFilterArgs {
    /// The maximum length in characters (can be combined with --min-length)
    #[arg(long)]
    max_length: Option<u32>,

    /// The minimum length in characters (can be combined with --max-length)
    #[arg(long)]
    min_length: Option<u32>,

    /// Quotes with specific tag(s): comma-separated for AND, pipe-separated
    /// for OR
    #[arg(long)]
    tags: Option<String>,

    /// Quotes by author name(s); pipe-separated for several
    #[arg(long)]
    author: Option<String>,
}

#[derive(Args, Debug)]
pub struct RandomQuoteArgs {
    /// Number of random quotes to retrieve (default 1, min 1, max 50)
    #[arg(long)]
    limit: Option<u32>,

    #[command(flatten)]
    filter: QuoteFilterArgs,
}

#[derive(Args, Debug)]
pub struct ListQuotesArgs {
    /// Results per page (default 20, min 1, max 150)
    #[arg(long)]
    limit: Option<u32>,

    #[command(flatten)]
    filter: QuoteFilterArgs,

    /// Field to sort by (default dateAdded)
    #[arg(short, long, value_enum)]
    sort_by: Option<QuoteSortBy>,

    #[arg(short, long, value_enum)]
    order: Option<SortOrder>,

    /// Page number (min 1, default 1)
    #[arg(long)]
    page: Option<u32>,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    #[arg(long, value_parser = parse_id)]
    id: String,
}

#[derive(Args, Debug)]
pub struct SearchQuotesArgs {
    /// The search string; wrap in single quotes to match an exact phrase
    #[arg(short, long, value_parser = parse_query)]
    query: String,

    /// Comma-separated fields to search: content, author, tags (default all)
    #[arg(short, long)]
    fields: Option<String>,

    /// Max single-character edits per term (0 to 2, 0 disables fuzzy search)
    #[arg(long)]
    fuzzy_max_edits: Option<u32>,

    /// Max variations per term when fuzzy search is enabled (0 to 150)
    #[arg(long)]
    fuzzy_max_expansions: Option<u32>,

    #[arg(long)]
    page: Option<u32>,

    /// Results per page (0 to 150, default 20)
    #[arg(long)]
    limit: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ListAuthorsArgs {
    /// Filter by one or more slugs; pipe-separated for several
    #[arg(long)]
    slug: Option<String>,

    /// Field to sort by (default name)
    #[arg(short, long, value_enum)]
    sort_by: Option<AuthorSortBy>,

    #[arg(short, long, value_enum)]
    order: Option<SortOrder>,

    #[arg(long)]
    limit: Option<u32>,

    #[arg(long)]
    page: Option<u32>,
}

#[derive(Args, Debug)]
pub struct SearchAuthorsArgs {
    #[arg(short, long, value_parser = parse_query)]
    query: String,

    /// Enable autocomplete matching (default true)
    #[arg(long, value_name = "BOOL")]
    autocomplete: Option<bool>,

    /// Minimum number of search terms that must match (1 to 3, default 2)
    #[arg(long)]
    match_threshold: Option<u32>,

    #[arg(long)]
    page: Option<u32>,

    #[arg(long)]
    limit: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ListTagsArgs {
    /// Field to sort by (default name)
    #[arg(short, long, value_enum, alias = "sort_by")]
    sort_by: Option<AuthorSortBy>,

    #[arg(short, long, value_enum)]
    order: Option<SortOrder>,
}

impl From<&RandomQuoteArgs> for RandomQuoteParams {
    fn from(args: &RandomQuoteArgs) -> Self {
        RandomQuoteParams {
            limit: args.limit,
            min_len: args.filter.min_length,
            max_len: args.filter.max_length,
            tags: args.filter.tags.clone(),
            author: args.filter.author.clone(),
        }
    }
}

impl From<&ListQuotesArgs> for ListQuotesParams {
    fn from(args: &ListQuotesArgs) -> Self {
        ListQuotesParams {
            min_len: args.filter.min_length,
            max_len: args.filter.max_length,
            tags: args.filter.tags.clone(),
            author: args.filter.author.clone(),
            sort_by: args.sort_by,
            order: args.order,
            page: args.page,
            limit: args.limit,
        }
    }
}

impl From<&SearchQuotesArgs> for SearchQuotesParams {
    fn from(args: &SearchQuotesArgs) -> Self {
        SearchQuotesParams {
            fields: args.fields.clone(),
            fuzzy_max_edits: args.fuzzy_max_edits,
            fuzzy_max_expansions: args.fuzzy_max_expansions,
            limit: args.limit,
            page: args.page,
        }
    }
}

impl From<&ListAuthorsArgs> for ListAuthorsParams {
    fn from(args: &ListAuthorsArgs) -> Self {
        ListAuthorsParams {
            slug: args.slug.clone(),
            sort_by: args.sort_by,
            order: args.order,
            limit: args.limit,
            page: args.page,
        }
    }
}

impl From<&SearchAuthorsArgs> for SearchAuthorsParams {
    fn from(args: &SearchAuthorsArgs) -> Self {
        SearchAuthorsParams {
            autocomplete: args.autocomplete,
            match_threshold: args.match_threshold,
            limit: args.limit,
            page: args.page,
        }
    }
}

impl From<&ListTagsArgs> for ListTagsParams {
    fn from(args: &ListTagsArgs) -> Self {
        ListTagsParams {
            sort_by: args.sort_by,
            order: args.order,
        }
    }
}

fn parse_id(value: &str) -> quotable::Result<String> {
    quotable::check_id(value).map(str::to_string)
}

fn parse_query(value: &str) -> quotable::Result<String> {
    quotable::check_query(value).map(str::to_string)
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match cli.base_url.as_deref() {
        Some(base_url) => Config::with_base_url(base_url).context("parse --base-url")?,
        None => Config::default(),
    };

    let client = Client::new(config).context("create HTTP client")?;
    let output = execute(&client, &cli.command).await?;
    println!("{}", output);

    Ok(())
}

async fn execute<T: Transport>(client: &Client<T>, command: &Command) -> Result<String> {
    let output = match command {
        Command::GetRandomQuote(args) => client
            .random_quote(&args.into())
            .await
            .context("fetch random quote")?,
        Command::GetQuote(args) => client
            .list_quotes(&args.into())
            .await
            .context("fetch quotes")?,
        Command::GetQuoteById(args) => client
            .quote_by_id(&args.id)
            .await
            .context("fetch quote")?,
        Command::SearchQuote(args) => client
            .search_quotes(&args.query, &args.into())
            .await
            .context("search quotes")?,
        Command::GetAuthor(args) => client
            .list_authors(&args.into())
            .await
            .context("fetch authors")?,
        Command::SearchAuthor(args) => client
            .search_authors(&args.query, &args.into())
            .await
            .context("search authors")?,
        Command::GetAuthorById(args) => client
            .author_by_id(&args.id)
            .await
            .context("fetch author")?,
        Command::GetTags(args) => client
            .list_tags(&args.into())
            .await
            .context("fetch tags")?,
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use clap::error::ErrorKind;
    use clap::CommandFactory;
    use url::Url;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("quotable").chain(args.iter().copied())).unwrap()
    }

    fn parse_error(args: &[&str]) -> ErrorKind {
        Cli::try_parse_from(std::iter::once("quotable").chain(args.iter().copied()))
            .unwrap_err()
            .kind()
    }

    #[derive(Default)]
    struct RecordingTransport {
        requests: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl<'a> Transport for &'a RecordingTransport {
        async fn get(&self, url: Url) -> quotable::Result<String> {
            self.requests.lock().unwrap().push(url.to_string());
            Ok(r#"{"ok":true}"#.to_string())
        }
    }

    async fn requested_url(args: &[&str]) -> String {
        let cli = parse(args);
        let transport = RecordingTransport::default();
        let client = Client::with_transport(Config::default(), &transport);

        let output = execute(&client, &cli.command).await.unwrap();
        assert_eq!(output, "{\n    \"ok\": true\n}");

        let mut requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        requests.remove(0)
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn maps_random_quote_flags() {
        let cli = parse(&[
            "get-random-quote",
            "--limit",
            "3",
            "--min-length",
            "10",
            "--tags",
            "love|life",
        ]);

        let Command::GetRandomQuote(args) = &cli.command else {
            panic!("expected get-random-quote");
        };

        assert_eq!(
            RandomQuoteParams::from(args),
            RandomQuoteParams {
                limit: Some(3),
                min_len: Some(10),
                tags: Some("love|life".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn maps_quote_sort_choices() {
        let cli = parse(&["get-quote", "-s", "dateModified", "-o", "desc", "--page", "2"]);

        let Command::GetQuote(args) = &cli.command else {
            panic!("expected get-quote");
        };
        let params = ListQuotesParams::from(args);

        assert_eq!(params.sort_by, Some(QuoteSortBy::DateModified));
        assert_eq!(params.order, Some(SortOrder::Desc));
        assert_eq!(params.page, Some(2));
        assert_eq!(params.limit, None);
    }

    #[test]
    fn rejects_unknown_sort_field() {
        assert_eq!(
            parse_error(&["get-quote", "--sort-by", "quoteCount"]),
            ErrorKind::InvalidValue
        );
        assert_eq!(
            parse_error(&["get-author", "--sort-by", "content"]),
            ErrorKind::InvalidValue
        );
    }

    #[test]
    fn requires_id_and_query() {
        assert_eq!(
            parse_error(&["get-quote-by-id"]),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse_error(&["get-author-by-id"]),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse_error(&["search-quote"]),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse_error(&["search-author"]),
            ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn rejects_blank_id_and_query() {
        for args in [
            &["get-quote-by-id", "--id", ""][..],
            &["get-author-by-id", "--id", "   "],
            &["search-quote", "-q", ""],
            &["search-author", "-q", " \t "],
        ] {
            assert_eq!(parse_error(args), ErrorKind::ValueValidation, "{args:?}");
        }
    }

    #[test]
    fn rejects_dot_segment_ids() {
        assert_eq!(
            parse_error(&["get-quote-by-id", "--id", ".."]),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse_error(&["get-author-by-id", "--id", "."]),
            ErrorKind::ValueValidation
        );
    }

    #[test]
    fn parses_autocomplete_as_bool() {
        let cli = parse(&["search-author", "-q", "einstein", "--autocomplete", "false"]);

        let Command::SearchAuthor(args) = &cli.command else {
            panic!("expected search-author");
        };

        assert_eq!(SearchAuthorsParams::from(args).autocomplete, Some(false));
        assert_eq!(
            parse_error(&["search-author", "-q", "x", "--autocomplete", "maybe"]),
            ErrorKind::InvalidValue
        );
    }

    #[test]
    fn accepts_underscore_sort_by_for_tags() {
        let cli = parse(&["get-tags", "--sort_by", "quoteCount"]);

        let Command::GetTags(args) = &cli.command else {
            panic!("expected get-tags");
        };

        assert_eq!(
            ListTagsParams::from(args).sort_by,
            Some(AuthorSortBy::QuoteCount)
        );
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = parse(&["get-tags", "-vv", "--base-url", "http://localhost:4000"]);

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:4000"));
    }

    #[test]
    fn requires_subcommand() {
        assert_eq!(
            parse_error(&[]),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[tokio::test]
    async fn dispatches_every_subcommand() {
        assert_eq!(
            requested_url(&["get-random-quote", "--author", "Ada Lovelace"]).await,
            "https://api.quotable.io/quotes/random/?author=Ada+Lovelace"
        );
        assert_eq!(
            requested_url(&["get-quote", "--max-length", "50"]).await,
            "https://api.quotable.io/quotes?maxLength=50"
        );
        assert_eq!(
            requested_url(&["get-quote-by-id", "--id", "abc"]).await,
            "https://api.quotable.io/quotes/abc"
        );
        assert_eq!(
            requested_url(&["search-quote", "-q", "wisdom", "-f", "content"]).await,
            "https://api.quotable.io/search/quotes?query=wisdom&fields=content"
        );
        assert_eq!(
            requested_url(&["get-author", "--slug", "albert-einstein"]).await,
            "https://api.quotable.io/authors?slug=albert-einstein"
        );
        assert_eq!(
            requested_url(&["search-author", "-q", "einstein", "--match-threshold", "1"]).await,
            "https://api.quotable.io/search/authors?query=einstein&matchThreshold=1"
        );
        assert_eq!(
            requested_url(&["get-author-by-id", "--id", "xyz"]).await,
            "https://api.quotable.io/authors/xyz"
        );
        assert_eq!(
            requested_url(&["get-tags", "-o", "asc"]).await,
            "https://api.quotable.io/tags?order=asc"
        );
    }
}
