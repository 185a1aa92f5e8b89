use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Could not match the VERSION token")]
    TokenNotFound,

    #[error("Invalid version format: {0:?}")]
    InvalidFormat(String),
}
