//! Error types shared by the statistics source and the cache.
//!
//! Every variant is `Clone`: one fetch result is handed to every caller that
//! attached to the same in-flight request.

use crate::dimension::Dimension;
use thiserror::Error;

/// Why a single fetch did not produce records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchCause {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("status {status} body {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse body: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("failed to fetch {dimension} statistics: {cause}")]
    Fetch {
        dimension: Dimension,
        cause: FetchCause,
    },
    #[error("no {dimension} statistics for key {key:?}")]
    NotFound { dimension: Dimension, key: String },
    #[error("{dimension} statistics have not been loaded")]
    NotLoaded { dimension: Dimension },
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl StatsError {
    pub fn fetch(dimension: Dimension, cause: FetchCause) -> Self {
        StatsError::Fetch { dimension, cause }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, StatsError::Fetch { .. })
    }
}
