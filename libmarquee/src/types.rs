//! Core types for Marquee

use serde::{Deserialize, Serialize};

/// Text shown in place of a missing or empty overview.
pub const NO_OVERVIEW_TEXT: &str = "줄거리가 없습니다.";

/// One movie as it appears in a listing (popular or search results).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    pub vote_average: f64,
}

/// One decoded page of a listing response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieListPage {
    pub page: u32,
    pub results: Vec<MovieSummary>,
    pub total_pages: u32,
    pub total_results: u32,
}

impl MovieListPage {
    /// Whether another page can be requested after this one.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Full record for a single movie, fetched when its detail view opens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub vote_average: f64,
}

impl MovieDetail {
    /// Overview text, falling back to the placeholder when the catalog has
    /// none. The catalog sends an empty string for untranslated overviews.
    pub fn overview_text(&self) -> &str {
        match self.overview.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => NO_OVERVIEW_TEXT,
        }
    }

    /// Genre names joined for display, in catalog order.
    pub fn genres_line(&self) -> String {
        self.genres
            .iter()
            .map(|genre| genre.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Catalog vote average formatted to one decimal place.
    pub fn vote_display(&self) -> String {
        format!("{:.1}", self.vote_average)
    }

    pub fn poster_url(&self, image_base: &str, size: PosterSize) -> Option<String> {
        poster_url(self.poster_path.as_deref(), image_base, size)
    }
}

impl MovieSummary {
    pub fn vote_display(&self) -> String {
        format!("{:.1}", self.vote_average)
    }

    pub fn poster_url(&self, image_base: &str, size: PosterSize) -> Option<String> {
        poster_url(self.poster_path.as_deref(), image_base, size)
    }
}

/// Poster widths offered by the image host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PosterSize {
    W92,
    W185,
    W342,
    #[default]
    W500,
}

impl PosterSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::W92 => "w92",
            Self::W185 => "w185",
            Self::W342 => "w342",
            Self::W500 => "w500",
        }
    }
}

impl std::fmt::Display for PosterSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compose a full poster URL from the image host, size segment, and the
/// catalog's poster path (which carries a leading slash).
fn poster_url(poster_path: Option<&str>, image_base: &str, size: PosterSize) -> Option<String> {
    poster_path.map(|path| {
        format!(
            "{}/{}{}",
            image_base.trim_end_matches('/'),
            size.as_str(),
            path
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_detail() -> MovieDetail {
        MovieDetail {
            id: 496243,
            title: "기생충".to_string(),
            poster_path: Some("/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg".to_string()),
            overview: Some("전원 백수로 살 길 막막하지만...".to_string()),
            genres: vec![
                Genre {
                    id: 35,
                    name: "코미디".to_string(),
                },
                Genre {
                    id: 53,
                    name: "스릴러".to_string(),
                },
            ],
            vote_average: 8.256,
        }
    }

    #[test]
    fn test_movie_summary_decoding() {
        let json = r#"{
            "id": 496243,
            "title": "기생충",
            "poster_path": "/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg",
            "vote_average": 8.5,
            "release_date": "2019-05-30",
            "popularity": 83.2
        }"#;

        let summary: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, 496243);
        assert_eq!(summary.title, "기생충");
        assert_eq!(
            summary.poster_path.as_deref(),
            Some("/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg")
        );
        assert_eq!(summary.vote_average, 8.5);
    }

    #[test]
    fn test_movie_summary_null_poster() {
        let json = r#"{"id": 1, "title": "무제", "poster_path": null, "vote_average": 0.0}"#;

        let summary: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.poster_path, None);
    }

    #[test]
    fn test_movie_list_page_decoding() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 1, "title": "첫 번째", "poster_path": null, "vote_average": 7.1},
                {"id": 2, "title": "두 번째", "poster_path": "/a.jpg", "vote_average": 6.4}
            ],
            "total_pages": 42,
            "total_results": 833
        }"#;

        let page: MovieListPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].title, "첫 번째");
        assert_eq!(page.total_pages, 42);
        assert_eq!(page.total_results, 833);
    }

    #[test]
    fn test_movie_list_page_has_more() {
        let mut page = MovieListPage {
            page: 1,
            results: vec![],
            total_pages: 3,
            total_results: 60,
        };
        assert!(page.has_more());

        page.page = 3;
        assert!(!page.has_more());
    }

    #[test]
    fn test_movie_detail_decoding_preserves_genre_order() {
        let json = r#"{
            "id": 496243,
            "title": "기생충",
            "poster_path": "/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg",
            "overview": "전원 백수로 살 길 막막하지만...",
            "genres": [
                {"id": 35, "name": "코미디"},
                {"id": 53, "name": "스릴러"},
                {"id": 18, "name": "드라마"}
            ],
            "vote_average": 8.5,
            "runtime": 132
        }"#;

        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["코미디", "스릴러", "드라마"]);
    }

    #[test]
    fn test_overview_text_present() {
        let detail = sample_detail();
        assert_eq!(detail.overview_text(), "전원 백수로 살 길 막막하지만...");
    }

    #[test]
    fn test_overview_text_empty_string_uses_placeholder() {
        let mut detail = sample_detail();
        detail.overview = Some(String::new());
        assert_eq!(detail.overview_text(), "줄거리가 없습니다.");
    }

    #[test]
    fn test_overview_text_missing_uses_placeholder() {
        let mut detail = sample_detail();
        detail.overview = None;
        assert_eq!(detail.overview_text(), "줄거리가 없습니다.");
    }

    #[test]
    fn test_overview_missing_field_decodes_to_none() {
        let json = r#"{"id": 1, "title": "무제", "genres": [], "vote_average": 5.0}"#;

        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.overview, None);
        assert_eq!(detail.overview_text(), "줄거리가 없습니다.");
    }

    #[test]
    fn test_genres_line_joins_names() {
        let detail = sample_detail();
        assert_eq!(detail.genres_line(), "코미디, 스릴러");
    }

    #[test]
    fn test_genres_line_empty() {
        let mut detail = sample_detail();
        detail.genres.clear();
        assert_eq!(detail.genres_line(), "");
    }

    #[test]
    fn test_vote_display_one_decimal() {
        let detail = sample_detail();
        assert_eq!(detail.vote_display(), "8.3");

        let summary = MovieSummary {
            id: 1,
            title: "무제".to_string(),
            poster_path: None,
            vote_average: 7.0,
        };
        assert_eq!(summary.vote_display(), "7.0");
    }

    #[test]
    fn test_poster_url_composition() {
        let detail = sample_detail();
        assert_eq!(
            detail
                .poster_url("https://image.tmdb.org/t/p", PosterSize::W500)
                .unwrap(),
            "https://image.tmdb.org/t/p/w500/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg"
        );
    }

    #[test]
    fn test_poster_url_trims_trailing_slash() {
        let detail = sample_detail();
        assert_eq!(
            detail
                .poster_url("https://image.tmdb.org/t/p/", PosterSize::W342)
                .unwrap(),
            "https://image.tmdb.org/t/p/w342/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg"
        );
    }

    #[test]
    fn test_poster_url_none_without_path() {
        let mut detail = sample_detail();
        detail.poster_path = None;
        assert_eq!(
            detail.poster_url("https://image.tmdb.org/t/p", PosterSize::W500),
            None
        );
    }

    #[test]
    fn test_poster_size_as_str() {
        assert_eq!(PosterSize::W92.as_str(), "w92");
        assert_eq!(PosterSize::W185.as_str(), "w185");
        assert_eq!(PosterSize::W342.as_str(), "w342");
        assert_eq!(PosterSize::W500.as_str(), "w500");
    }

    #[test]
    fn test_poster_size_default_is_w500() {
        assert_eq!(PosterSize::default(), PosterSize::W500);
    }

    #[test]
    fn test_poster_size_display() {
        assert_eq!(format!("{}", PosterSize::W500), "w500");
    }

    #[test]
    fn test_movie_detail_serialization_round_trip() {
        let detail = sample_detail();

        let json = serde_json::to_string(&detail).unwrap();
        let deserialized: MovieDetail = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, detail);
    }
}
