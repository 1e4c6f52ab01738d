use super::{Community, FetchError, PageRequest, Submission, TimeFilter, TopListing, TopQuery, PAGE_SIZE};
use std::collections::VecDeque;
use tracing::debug;

/// Lazily pages through a top listing, yielding at most `limit` submissions.
///
/// A page is only requested once the previous one has been consumed. Iteration ends
/// when the limit is reached, when Reddit stops returning an `after` cursor, when a
/// page comes back empty, or right after the first error.
pub struct TopSubmissions<'a, L: ?Sized> {
    listing: &'a L,
    community: &'a Community,
    time_filter: TimeFilter,
    remaining: u32,
    after: Option<String>,
    buffer: VecDeque<Submission>,
    exhausted: bool,
}

impl<'a, L> TopSubmissions<'a, L>
where
    L: TopListing + ?Sized,
{
    pub fn new(listing: &'a L, query: &'a TopQuery) -> Self {
        Self {
            listing,
            community: &query.community,
            time_filter: query.time_filter,
            remaining: query.limit,
            after: None,
            buffer: VecDeque::new(),
            exhausted: false,
        }
    }

    fn fetch_page(&mut self) -> Result<(), FetchError> {
        let request = PageRequest {
            limit: self.remaining.min(PAGE_SIZE),
            after: self.after.take(),
        };
        debug!(
            community = %self.community,
            time_filter = %self.time_filter,
            limit = request.limit,
            after = ?request.after,
            "requesting top page"
        );

        let page = self.listing.top_page(self.community, self.time_filter, &request)?;
        if page.submissions.is_empty() || page.after.is_none() {
            self.exhausted = true;
        }
        self.after = page.after;
        self.buffer.extend(page.submissions);
        Ok(())
    }
}

impl<'a, L> Iterator for TopSubmissions<'a, L>
where
    L: TopListing + ?Sized,
{
    type Item = Result<Submission, FetchError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.remaining == 0 {
                return None;
            }
            if let Some(submission) = self.buffer.pop_front() {
                self.remaining -= 1;
                return Some(Ok(submission));
            }
            if self.exhausted {
                return None;
            }
            if let Err(err) = self.fetch_page() {
                self.exhausted = true;
                return Some(Err(err));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.buffer.len().min(self.remaining as usize);
        let upper = if self.exhausted { buffered } else { self.remaining as usize };
        (buffered, Some(upper))
    }
}
