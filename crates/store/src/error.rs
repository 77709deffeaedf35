use thiserror::Error;

/// Failures coming from the identity provider or the record store.
///
/// These propagate to the caller unchanged: the core neither retries nor
/// suppresses them.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
    #[error("\"{0}\" not found")]
    NotFound(String),
    #[error("user \"{0}\" already exists")]
    ExistingUser(String),
    #[error("invalid credentials")]
    InvalidCredentials,
}
