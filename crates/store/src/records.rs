use ledger::{Expense, ExpenseDraft, Group, GroupDraft};

use crate::ResultStore;

/// Persistence collaborator for expense records.
pub trait ExpenseStore {
    /// Persists a draft, assigning the record id and `created_at`.
    async fn create(&self, draft: ExpenseDraft) -> ResultStore<Expense>;

    /// All expenses whose `split_with` contains `user_id`. Ordering is
    /// unspecified; the ledger's balance computation does not depend on it.
    async fn list_for_user(&self, user_id: &str) -> ResultStore<Vec<Expense>>;

    /// Removes an expense by id. Exposed by the storage interface but never
    /// invoked by the core flows.
    async fn delete(&self, expense_id: &str) -> ResultStore<()>;
}

/// Persistence collaborator for group records.
pub trait GroupStore {
    /// Persists a draft, assigning the record id and `created_at`.
    async fn create(&self, draft: GroupDraft) -> ResultStore<Group>;

    /// All groups whose `members` contains `user_id`.
    async fn list_for_user(&self, user_id: &str) -> ResultStore<Vec<Group>>;
}
