//! Pure shared-expense ledger: records, splits and settlement balances.
//!
//! The crate holds no connection to any backend. Records enter as immutable
//! snapshots (fetched by the caller through whatever store it uses) and every
//! operation is a plain function of its input.

pub use balance::{BalanceSummary, compute_balances};
pub use error::LedgerError;
pub use expense::{Expense, ExpenseDraft, GroupRef, SplitType};
pub use group::{Group, GroupDraft, canonical_member};
pub use money::MoneyCents;
pub use split::{compute_shares, reconcile_custom_split_edit};

mod balance;
mod error;
mod expense;
mod group;
mod money;
mod split;

pub type ResultLedger<T> = Result<T, LedgerError>;
