mod auth;
pub use auth::*;

mod client;
pub use client::*;

mod filter;
pub use filter::*;

mod paginate;
pub use paginate::*;

mod query;
pub use query::*;

use thiserror::Error;

/// Reddit never returns more than this many items in one listing page.
pub const PAGE_SIZE: u32 = 100;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    /// The submission's base36 id, such as "abc123".
    pub id: String,
    /// The title of the post.
    pub title: String,
    /// The link the post points at, or the post itself for self posts.
    pub url: String,
    /// The path of the post's comment page, such as "/r/rust/comments/abc123/title/".
    pub permalink: String,
}

/// One page of a listing request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    /// Cursor returned by the previous page.
    pub after: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub submissions: Vec<Submission>,
    pub after: Option<String>,
}

/// What to ask for: the top `limit` submissions of `community` over `time_filter`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopQuery {
    pub community: Community,
    pub time_filter: TimeFilter,
    pub limit: u32,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("failed to fetch top submissions of r/{community}: {reason}")]
pub struct FetchError {
    pub community: String,
    pub reason: String,
}

/// A source of "top" listing pages.
pub trait TopListing {
    fn top_page(
        &self,
        community: &Community,
        time_filter: TimeFilter,
        request: &PageRequest,
    ) -> Result<Page, FetchError>;
}

impl<T> TopListing for &T
where
    T: TopListing + ?Sized,
{
    fn top_page(
        &self,
        community: &Community,
        time_filter: TimeFilter,
        request: &PageRequest,
    ) -> Result<Page, FetchError> {
        (**self).top_page(community, time_filter, request)
    }
}
