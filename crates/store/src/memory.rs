//! In-process reference implementation of the collaborator traits.
//!
//! Backs the demo binary and the integration tests. Real deployments replace
//! this with an adapter for their hosted backend; nothing outside this module
//! may assume records live in memory.

use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use tokio::sync::{Mutex, watch};
use uuid::Uuid;

use ledger::{Expense, ExpenseDraft, Group, GroupDraft, canonical_member};

use crate::{ExpenseStore, GroupStore, Identity, ResultStore, StoreError};

/// In-memory identity provider: a map of registered accounts plus the
/// current session broadcast on a watch channel.
#[derive(Clone)]
pub struct MemoryIdentity {
    inner: Arc<IdentityInner>,
}

struct IdentityInner {
    /// email -> password. Plaintext is fine here: this is a test double, not
    /// an auth backend.
    users: Mutex<HashMap<String, String>>,
    session: watch::Sender<Option<String>>,
}

impl MemoryIdentity {
    pub fn new() -> Self {
        let (session, _) = watch::channel(None);
        Self {
            inner: Arc::new(IdentityInner {
                users: Mutex::new(HashMap::new()),
                session,
            }),
        }
    }
}

impl Default for MemoryIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl Identity for MemoryIdentity {
    fn current_user(&self) -> Option<String> {
        self.inner.session.borrow().clone()
    }

    fn watch(&self) -> watch::Receiver<Option<String>> {
        self.inner.session.subscribe()
    }

    async fn sign_up(&self, email: &str, password: &str) -> ResultStore<String> {
        let email = canonical_member(email);
        if email.is_empty() || password.is_empty() {
            return Err(StoreError::InvalidCredentials);
        }

        let mut users = self.inner.users.lock().await;
        if users.contains_key(&email) {
            return Err(StoreError::ExistingUser(email));
        }
        users.insert(email.clone(), password.to_string());
        drop(users);

        tracing::debug!(user = %email, "signed up");
        let _ = self.inner.session.send(Some(email.clone()));
        Ok(email)
    }

    async fn sign_in(&self, email: &str, password: &str) -> ResultStore<String> {
        let email = canonical_member(email);
        let users = self.inner.users.lock().await;
        match users.get(&email) {
            Some(stored) if stored == password => {
                drop(users);
                tracing::debug!(user = %email, "signed in");
                let _ = self.inner.session.send(Some(email.clone()));
                Ok(email)
            }
            _ => Err(StoreError::InvalidCredentials),
        }
    }

    async fn sign_out(&self) {
        tracing::debug!("signed out");
        let _ = self.inner.session.send(None);
    }
}

/// In-memory record store for expenses and groups.
///
/// Clones share the same underlying records, so one instance can serve as
/// both the expense and the group collaborator.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    expenses: Mutex<Vec<Expense>>,
    groups: Mutex<Vec<Group>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExpenseStore for MemoryStore {
    async fn create(&self, draft: ExpenseDraft) -> ResultStore<Expense> {
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            description: draft.description,
            amount: draft.amount,
            group: draft.group,
            paid_by: draft.paid_by,
            split_type: draft.split_type,
            split_with: draft.split_with,
            custom_splits: draft.custom_splits,
            created_at: Utc::now(),
        };

        tracing::debug!(id = %expense.id, amount = %expense.amount, "expense created");
        self.inner.expenses.lock().await.push(expense.clone());
        Ok(expense)
    }

    async fn list_for_user(&self, user_id: &str) -> ResultStore<Vec<Expense>> {
        let expenses = self.inner.expenses.lock().await;
        Ok(expenses
            .iter()
            .filter(|expense| expense.split_with.iter().any(|member| member == user_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, expense_id: &str) -> ResultStore<()> {
        let mut expenses = self.inner.expenses.lock().await;
        let before = expenses.len();
        expenses.retain(|expense| expense.id != expense_id);
        if expenses.len() == before {
            return Err(StoreError::NotFound(expense_id.to_string()));
        }
        Ok(())
    }
}

impl GroupStore for MemoryStore {
    async fn create(&self, draft: GroupDraft) -> ResultStore<Group> {
        let group = Group {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            members: draft.members,
            created_at: Utc::now(),
        };

        tracing::debug!(id = %group.id, name = %group.name, "group created");
        self.inner.groups.lock().await.push(group.clone());
        Ok(group)
    }

    async fn list_for_user(&self, user_id: &str) -> ResultStore<Vec<Group>> {
        let groups = self.inner.groups.lock().await;
        Ok(groups
            .iter()
            .filter(|group| group.members.iter().any(|member| member == user_id))
            .cloned()
            .collect())
    }
}
