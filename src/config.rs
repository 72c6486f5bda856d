use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.quotable.io/";

/// Settings fixed when a [`Client`](crate::Client) is constructed
#[derive(Debug, Clone)]
pub struct Config {
    /// The API root every endpoint path is joined onto
    ///
    /// Always ends with a `/` so that relative joins append rather than
    /// replace the last path segment.
    pub base_url: Url,

    /// The `User-Agent` sent with each request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Creates a config that talks to `base_url` instead of the public API
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Config {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }
}

fn normalize_base_url(input: &str) -> Result<Url> {
    let mut url = Url::parse(input)?;

    if url.cannot_be_a_base() {
        return Err(Error::BaseUrl(input.to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
