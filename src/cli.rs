use crate::reddit::{Community, Credentials, QueryError, TimeFilter, TopQuery};
use clap::Parser;
use std::ffi::OsString;

/// Positional order, printed when too few arguments are given.
pub const USAGE: &str =
    "client_id client_secret user_agent search_limit time_filter subreddit1 [subreddit2...n]";

/// Program name plus the five fixed positionals plus at least one subreddit.
pub const MIN_ARGS: usize = 7;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, override_usage = USAGE)]
pub struct Args {
    /// Client id of the registered Reddit application
    #[arg(allow_hyphen_values = true)]
    pub client_id: String,
    /// Client secret of the registered Reddit application
    #[arg(allow_hyphen_values = true)]
    pub client_secret: String,
    /// User agent sent with every request, e.g. "linux:reddit-top:0.1.0 (by /u/you)"
    #[arg(allow_hyphen_values = true)]
    pub user_agent: String,
    /// Maximum number of submissions to print
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub search_limit: u32,
    /// Window the ranking covers
    #[arg(value_enum, ignore_case = true)]
    pub time_filter: TimeFilter,
    /// Subreddits to combine into one listing
    #[arg(required = true, num_args = 1..)]
    pub subreddits: Vec<String>,
}

impl Args {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.client_id, &self.client_secret, &self.user_agent)
    }

    pub fn query(&self) -> Result<TopQuery, QueryError> {
        Ok(TopQuery {
            community: Community::combine(&self.subreddits)?,
            time_filter: self.time_filter,
            limit: self.search_limit,
        })
    }
}

#[derive(Debug)]
pub enum Invocation {
    /// Too few arguments; print [`USAGE`] and stop.
    Usage,
    Run(Args),
}

pub fn parse_from<I, T>(argv: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    if argv.len() < MIN_ARGS {
        return Ok(Invocation::Usage);
    }
    Args::try_parse_from(argv).map(Invocation::Run)
}

pub fn usage(program: &str) -> String {
    format!("not enough args!  {program} {USAGE}")
}
