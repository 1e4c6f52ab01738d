pub mod cli;
pub mod error;
pub mod logging;
pub mod reddit;
pub mod stream;

pub use error::{Error, Result};
pub use reddit::*;

use indicatif::ProgressBar;
use std::io::Write;
use tracing::info;

/// Stream the URLs of the top submissions described by `query` to `out`.
///
/// Returns the number of URLs written.
pub fn run<L, W>(listing: &L, query: &TopQuery, out: &mut W, progress: &ProgressBar) -> Result<usize>
where
    L: TopListing + ?Sized,
    W: Write,
{
    info!(
        community = %query.community,
        time_filter = %query.time_filter,
        limit = query.limit,
        "fetching top submissions"
    );
    stream::stream_urls(out, TopSubmissions::new(listing, query), progress)
}
