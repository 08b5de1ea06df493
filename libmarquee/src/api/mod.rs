//! TMDB catalog client
//!
//! Wraps a [`reqwest::Client`] with the endpoints and credentials resolved
//! from configuration. Request URLs are built by the pure functions in
//! [`request`] and responses are judged by [`status::classify_status`], so
//! both halves of the pipeline test without any network.

pub mod request;
pub mod status;

pub use request::{build_detail_url, build_list_url};
pub use status::classify_status;

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{ConfigError, FetchError, MarqueeError};
use crate::session::SessionSnapshot;
use crate::types::{MovieDetail, MovieListPage};

#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    api_base: Url,
    image_base: String,
    language: String,
    api_key: String,
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("api_base", &self.api_base.as_str())
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl TmdbClient {
    /// Build a client from configuration.
    ///
    /// Fails when no API key resolves or the base URL is not absolute
    /// http(s). Validating the base here keeps the URL builders infallible.
    pub fn from_config(config: &Config) -> Result<Self, MarqueeError> {
        let api_key = config.api_key()?;

        let api_base = Url::parse(&config.tmdb.api_base_url)
            .map_err(|err| ConfigError::InvalidValue(format!("tmdb.api_base_url: {}", err)))?;
        if api_base.scheme() != "http" && api_base.scheme() != "https" {
            return Err(ConfigError::InvalidValue(format!(
                "tmdb.api_base_url: unsupported scheme '{}'",
                api_base.scheme()
            ))
            .into());
        }

        Ok(Self {
            http: reqwest::Client::new(),
            api_base,
            image_base: config.tmdb.image_base_url.clone(),
            language: config.tmdb.language.clone(),
            api_key,
        })
    }

    /// Image host base for composing poster URLs.
    pub fn image_base(&self) -> &str {
        &self.image_base
    }

    /// Fetch one page of the listing described by `snapshot`.
    pub async fn fetch_movie_list(
        &self,
        snapshot: &SessionSnapshot,
    ) -> Result<MovieListPage, FetchError> {
        let url = build_list_url(&self.api_base, &self.api_key, &self.language, snapshot);
        tracing::debug!(listing = ?snapshot.listing, page = snapshot.page, "fetching movie list");
        self.get_json(url).await
    }

    /// Fetch the full record for one movie.
    pub async fn fetch_movie_detail(&self, movie_id: u64) -> Result<MovieDetail, FetchError> {
        let url = build_detail_url(&self.api_base, &self.api_key, &self.language, movie_id);
        tracing::debug!(movie_id, "fetching movie detail");
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        // Log the path only; the full URL carries the api_key.
        let path = url.path().to_string();

        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();

        if let Err(err) = classify_status(status) {
            tracing::warn!(status, path = %path, "catalog request failed");
            return Err(err);
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
