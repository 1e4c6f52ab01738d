use std::fmt;
use thiserror::Error;

/// Separator Reddit uses to address several subreddits in one listing, as in `r/rust+programming`.
pub const SEPARATOR: char = '+';

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("at least one subreddit is required")]
    NoCommunities,
}

/// One or more subreddits combined into a single listing identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Community(String);

impl Community {
    /// Join `names` with `+`, keeping their order.
    pub fn combine<T>(names: &[T]) -> Result<Self, QueryError>
    where
        T: AsRef<str>,
    {
        let mut names = names.iter();
        let mut combined = match names.next() {
            Some(first) => first.as_ref().to_string(),
            None => return Err(QueryError::NoCommunities),
        };
        for name in names {
            combined.push(SEPARATOR);
            combined.push_str(name.as_ref());
        }
        Ok(Self(combined))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Community {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Community {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
