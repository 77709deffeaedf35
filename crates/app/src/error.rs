use thiserror::Error;

use ledger::LedgerError;
use store::StoreError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Application-level failures.
///
/// `Ledger` values are recoverable, user-correctable validation problems.
/// `Store` values come from the external collaborators and are passed along
/// unchanged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("no signed-in user")]
    NotSignedIn,
}
