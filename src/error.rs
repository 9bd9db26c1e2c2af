use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no trade with id {0:?}")]
    TradeNotFound(String),

    #[error("no trades match {0:?}")]
    NoSearchMatches(String),

    #[error("failed to read trade data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse trade data from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::TradeNotFound(_) | StoreError::NoSearchMatches(_)
        )
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
