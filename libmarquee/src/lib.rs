//! Marquee - terminal tools for browsing the TMDB movie catalog
//!
//! This library provides the fetch pipeline, session state, and rating rules
//! shared by the Marquee binaries.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod rating;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use api::TmdbClient;
pub use config::Config;
pub use error::{FetchError, MarqueeError, Result};
pub use rating::Rating;
pub use session::{Listing, Session, SessionSnapshot};
pub use types::{Genre, MovieDetail, MovieListPage, MovieSummary, PosterSize};
