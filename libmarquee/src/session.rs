//! Browsing session state

/// Which catalog listing the session is browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Listing {
    #[default]
    Popular,
    Search,
}

/// Mutable browsing state: active listing, current page, search query.
///
/// Fields are private so every mutation goes through a method that keeps the
/// page floor at 1 and the query consistent with the listing. The fetch
/// pipeline never reads this directly; it takes a [`SessionSnapshot`] captured
/// at dispatch time, so a mutation landing while a request is in flight cannot
/// alter that request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    listing: Listing,
    page: u32,
    query: Option<String>,
}

impl Session {
    /// A fresh session starts on page 1 of the popular listing.
    pub fn new() -> Self {
        Self {
            listing: Listing::Popular,
            page: 1,
            query: None,
        }
    }

    pub fn listing(&self) -> Listing {
        self.listing
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Switch to the popular listing, back at page 1 with no query.
    pub fn browse_popular(&mut self) {
        self.listing = Listing::Popular;
        self.page = 1;
        self.query = None;
    }

    /// Switch to the search listing for `query`, back at page 1.
    pub fn begin_search(&mut self, query: String) {
        self.listing = Listing::Search;
        self.page = 1;
        self.query = Some(query);
    }

    /// Move to the next page of the current listing.
    pub fn advance_page(&mut self) {
        self.page += 1;
    }

    /// Freeze the current state for one fetch.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            listing: self.listing,
            page: self.page,
            query: self.query.clone(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable per-fetch view of a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub listing: Listing,
    pub page: u32,
    pub query: Option<String>,
}
