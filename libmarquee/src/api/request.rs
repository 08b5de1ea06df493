//! Outbound catalog request construction
//!
//! Pure URL building, no I/O. One builder serves both the popular and search
//! listings; the endpoint comes from the snapshot's listing and the `query`
//! parameter is appended only when a non-empty query is present.

use url::Url;

use crate::session::{Listing, SessionSnapshot};

/// Build the URL for one page of a listing.
///
/// Always carries `api_key`, `language`, and `page`. Callers keep
/// `snapshot.page >= 1`; the builder does not defend the floor. `base` must
/// be an http(s) URL, which client construction guarantees.
pub fn build_list_url(
    base: &Url,
    api_key: &str,
    language: &str,
    snapshot: &SessionSnapshot,
) -> Url {
    let path = match snapshot.listing {
        Listing::Popular => "movie/popular",
        Listing::Search => "search/movie",
    };
    let mut url = append_path(base, path);

    url.query_pairs_mut()
        .append_pair("api_key", api_key)
        .append_pair("language", language)
        .append_pair("page", &snapshot.page.to_string());

    if let Some(query) = snapshot.query.as_deref() {
        if !query.is_empty() {
            url.query_pairs_mut().append_pair("query", query);
        }
    }

    url
}

/// Build the URL for a single movie's detail record.
///
/// Detail requests carry `api_key` and `language` but never `page` or
/// `query`.
pub fn build_detail_url(base: &Url, api_key: &str, language: &str, movie_id: u64) -> Url {
    let mut url = append_path(base, &format!("movie/{}", movie_id));

    url.query_pairs_mut()
        .append_pair("api_key", api_key)
        .append_pair("language", language);

    url
}

fn append_path(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let joined = format!("{}/{}", base.path().trim_end_matches('/'), path);
    url.set_path(&joined);
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base() -> Url {
        Url::parse("https://api.themoviedb.org/3").unwrap()
    }

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    fn popular_snapshot(page: u32) -> SessionSnapshot {
        SessionSnapshot {
            listing: Listing::Popular,
            page,
            query: None,
        }
    }

    fn search_snapshot(page: u32, query: &str) -> SessionSnapshot {
        SessionSnapshot {
            listing: Listing::Search,
            page,
            query: Some(query.to_string()),
        }
    }

    #[test]
    fn test_popular_list_url() {
        let url = build_list_url(&base(), "test-key", "ko-KR", &popular_snapshot(1));

        assert_eq!(url.path(), "/3/movie/popular");
        let params = query_map(&url);
        assert_eq!(params.get("api_key").map(String::as_str), Some("test-key"));
        assert_eq!(params.get("language").map(String::as_str), Some("ko-KR"));
        assert_eq!(params.get("page").map(String::as_str), Some("1"));
        assert!(!params.contains_key("query"));
    }

    #[test]
    fn test_search_list_url_carries_query() {
        let url = build_list_url(&base(), "test-key", "ko-KR", &search_snapshot(3, "기생충"));

        assert_eq!(url.path(), "/3/search/movie");
        let params = query_map(&url);
        assert_eq!(params.get("page").map(String::as_str), Some("3"));
        assert_eq!(params.get("query").map(String::as_str), Some("기생충"));
    }

    #[test]
    fn test_empty_query_is_dropped() {
        let url = build_list_url(&base(), "test-key", "ko-KR", &search_snapshot(1, ""));

        assert_eq!(url.path(), "/3/search/movie");
        assert!(!query_map(&url).contains_key("query"));
    }

    #[test]
    fn test_absent_query_on_search_listing_is_dropped() {
        let snapshot = SessionSnapshot {
            listing: Listing::Search,
            page: 1,
            query: None,
        };
        let url = build_list_url(&base(), "test-key", "ko-KR", &snapshot);

        assert!(!query_map(&url).contains_key("query"));
    }

    #[test]
    fn test_korean_query_is_percent_encoded() {
        let url = build_list_url(&base(), "test-key", "ko-KR", &search_snapshot(1, "기생충"));

        let raw = url.query().unwrap();
        assert!(raw.contains("query=%EA%B8%B0%EC%83%9D%EC%B6%A9"));
    }

    #[test]
    fn test_detail_url_shape() {
        let url = build_detail_url(&base(), "test-key", "ko-KR", 496243);

        assert_eq!(url.path(), "/3/movie/496243");
        let params = query_map(&url);
        assert_eq!(params.get("api_key").map(String::as_str), Some("test-key"));
        assert_eq!(params.get("language").map(String::as_str), Some("ko-KR"));
        assert!(!params.contains_key("page"));
        assert!(!params.contains_key("query"));
    }

    #[test]
    fn test_base_with_trailing_slash() {
        let base = Url::parse("https://api.themoviedb.org/3/").unwrap();
        let url = build_list_url(&base, "test-key", "ko-KR", &popular_snapshot(1));

        assert_eq!(url.path(), "/3/movie/popular");
    }

    #[test]
    fn test_base_without_path() {
        let base = Url::parse("http://127.0.0.1:8080").unwrap();
        let url = build_detail_url(&base, "test-key", "ko-KR", 42);

        assert_eq!(url.path(), "/movie/42");
        assert_eq!(url.host_str(), Some("127.0.0.1"));
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn test_language_is_configurable() {
        let url = build_list_url(&base(), "test-key", "en-US", &popular_snapshot(1));

        assert_eq!(
            query_map(&url).get("language").map(String::as_str),
            Some("en-US")
        );
    }
}
