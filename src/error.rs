use thiserror::Error;

use crate::reddit::{AuthError, FetchError, QueryError};

#[derive(Error, Debug)]
pub enum Error {
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("invalid query: {0}")]
    Query(#[from] QueryError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid progress template: {0}")]
    Progress(#[from] indicatif::style::TemplateError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
