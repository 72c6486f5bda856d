use thiserror::Error;

/// Errors returned by the Quotable client
#[derive(Error, Debug)]
pub enum Error {
    /// A required identifier or search string was empty
    #[error("missing required argument: '{0}'")]
    MissingArgument(&'static str),

    /// An identifier that would not stay a single path segment
    #[error("invalid identifier: '{0}'")]
    InvalidId(String),

    /// The HTTP request could not be completed
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// The response body was not valid JSON
    #[error("decode JSON response")]
    Decode(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("base URL cannot carry a path: {0}")]
    BaseUrl(String),
}

pub type Result<T> = std::result::Result<T, Error>;
