//! Application layer for the shared-expense ledger.
//!
//! All form and session state lives in one explicit [`AppState`] value.
//! Local edits go through the pure [`update`] reducer; anything that talks
//! to the identity provider or the record store goes through the async
//! [`App`] driver, which is generic over the collaborator traits and never
//! assumes a particular backend.

pub use error::{AppError, Result};
pub use session::App;
pub use state::{
    Action, AppState, AuthState, CredentialsForm, ExpenseForm, GroupForm, PaymentMode, update,
};

mod error;
mod session;
mod state;
