//! External collaborator seams for the ledger: identity and record storage.
//!
//! The application talks to its hosted backend exclusively through the
//! [`Identity`], [`ExpenseStore`] and [`GroupStore`] traits defined here, so
//! the ledger itself carries zero dependency on any particular auth or
//! database technology. [`MemoryIdentity`] and [`MemoryStore`] are the
//! in-process reference implementations used by the demo binary and the
//! integration tests.

pub use error::StoreError;
pub use identity::Identity;
pub use memory::{MemoryIdentity, MemoryStore};
pub use records::{ExpenseStore, GroupStore};

mod error;
mod identity;
mod memory;
mod records;

pub type ResultStore<T> = Result<T, StoreError>;
