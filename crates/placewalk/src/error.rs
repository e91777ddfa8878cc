use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacewalkError {
    #[error("Search backend error: {0}")]
    Backend(#[from] crate::backend::BackendError),
    #[error("Resolution deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PlacewalkError>;
