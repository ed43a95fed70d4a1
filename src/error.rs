use std::{
    io,
    path::PathBuf,
    string::FromUtf8Error,
};
use thiserror::Error;




/// Everything that can stop a scan before it prints.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read {path:?}")]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path:?} is not valid UTF-8")]
    Decoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("cannot read config {path:?}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path:?}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid pattern")]
    Pattern(#[from] regex::Error),

    #[error("conflicting options: {0}")]
    Conflict(String),
}
