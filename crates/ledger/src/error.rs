//! The module contains the errors the ledger can throw.
//!
//! All of them are recoverable, user-correctable conditions: the caller is
//! expected to show them next to the offending form field and let the user
//! retry. Store/auth failures are not represented here, they belong to the
//! collaborator that produced them.
use thiserror::Error;

/// Ledger validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("group name must not be blank")]
    EmptyGroupName,
    #[error("select a group for a group expense")]
    MissingGroupSelection,
    #[error("invalid expense input: {0}")]
    InvalidExpenseInput(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}
