use super::{authenticate, AuthError, Community, Credentials, FetchError, Page, PageRequest, Submission, TimeFilter, TopListing};
use reqwest::blocking::{Client, RequestBuilder};
use roux::submission::{SubmissionData, Submissions};
use tracing::debug;

pub const REDDIT_URL: &str = "https://www.reddit.com";
pub const OAUTH_URL: &str = "https://oauth.reddit.com";

/// Top listings fetched with an authenticated client and decoded into roux's listing types.
#[derive(Clone, Debug)]
pub struct OAuthListing {
    client: Client,
    base_url: String,
}

impl OAuthListing {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, OAUTH_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }

    pub fn connect(credentials: &Credentials) -> Result<Self, AuthError> {
        authenticate(credentials).map(Self::new)
    }

    /// `GET /r/{community}/top.json` with the time filter passed through as `t`.
    fn top_request(&self, community: &Community, time_filter: TimeFilter, request: &PageRequest) -> RequestBuilder {
        let mut query = vec![
            ("limit", request.limit.to_string()),
            ("t", time_filter.as_str().to_string()),
            ("raw_json", "1".to_string()),
        ];
        if let Some(after) = &request.after {
            query.push(("after", after.clone()));
        }
        self.client
            .get(format!("{}/r/{}/top.json", self.base_url, community))
            .query(&query)
    }
}

impl TopListing for OAuthListing {
    fn top_page(
        &self,
        community: &Community,
        time_filter: TimeFilter,
        request: &PageRequest,
    ) -> Result<Page, FetchError> {
        let failed = |reason: String| FetchError {
            community: community.to_string(),
            reason,
        };

        let response = self
            .top_request(community, time_filter, request)
            .send()
            .map_err(|err| failed(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(failed(format!("Reddit answered {status}")));
        }
        let listing: Submissions = response.json().map_err(|err| failed(err.to_string()))?;

        debug!(
            community = %community,
            returned = listing.data.children.len(),
            after = ?listing.data.after,
            "received listing page"
        );

        Ok(Page {
            after: listing.data.after,
            submissions: listing
                .data
                .children
                .into_iter()
                .map(|child| to_submission(child.data))
                .collect(),
        })
    }
}

fn to_submission(post: SubmissionData) -> Submission {
    Submission {
        url: submission_url(post.url, &post.permalink),
        id: post.id,
        title: post.title,
        permalink: post.permalink,
    }
}

/// The link of a submission, falling back to its comment page when Reddit leaves `url` out.
pub fn submission_url(url: Option<String>, permalink: &str) -> String {
    match url {
        Some(url) if !url.is_empty() => url,
        _ if permalink.starts_with("http") => permalink.to_string(),
        _ => format!("{REDDIT_URL}{permalink}"),
    }
}
