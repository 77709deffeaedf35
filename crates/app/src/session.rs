//! Async driver: everything that crosses into the identity provider or the
//! record store. Generic over the collaborator traits so any backend can sit
//! behind it.

use tokio::sync::watch;

use ledger::{BalanceSummary, ExpenseDraft, GroupDraft, LedgerError, MoneyCents};
use store::{ExpenseStore, GroupStore, Identity};

use crate::{
    Action, AppError, AppState, AuthState, PaymentMode, Result,
    state::{CredentialsForm, update},
};

/// Owns the application state and the collaborator handles.
pub struct App<I, E, G> {
    identity: I,
    expense_store: E,
    group_store: G,
    session: watch::Receiver<Option<String>>,
    pub state: AppState,
}

impl<I, E, G> App<I, E, G>
where
    I: Identity,
    E: ExpenseStore,
    G: GroupStore,
{
    pub fn new(identity: I, expense_store: E, group_store: G) -> Self {
        let session = identity.watch();
        Self {
            identity,
            expense_store,
            group_store,
            session,
            state: AppState::default(),
        }
    }

    /// Applies a local edit through the pure reducer.
    pub fn apply(&mut self, action: Action) {
        update(&mut self.state, action);
    }

    pub fn dashboard(&self) -> BalanceSummary {
        self.state.dashboard()
    }

    /// Submits the credentials form: signs up or in depending on its toggle,
    /// then reloads the working set. The typed credentials are cleared on
    /// success.
    pub async fn submit_auth(&mut self) -> Result<()> {
        let AuthState::SignedOut(form) = &self.state.auth else {
            return Ok(());
        };
        let CredentialsForm {
            email,
            password,
            sign_up,
        } = form.clone();

        if sign_up {
            self.identity.sign_up(&email, &password).await?;
        } else {
            self.identity.sign_in(&email, &password).await?;
        }
        self.sync_session().await
    }

    pub async fn sign_out(&mut self) -> Result<()> {
        self.identity.sign_out().await;
        self.sync_session().await
    }

    /// Blocks until the sign-in state changes (e.g. another component of the
    /// host signed the user out), then reloads the working set.
    pub async fn auth_changed(&mut self) -> Result<()> {
        // The sender lives in `self.identity`, so this only fails if the
        // identity implementation dropped its channel; treat that as a
        // sign-out.
        let _ = self.session.changed().await;
        self.sync_session().await
    }

    /// Reloads expenses and groups for the current session; clears both when
    /// nobody is signed in.
    pub async fn sync_session(&mut self) -> Result<()> {
        match self.identity.current_user() {
            Some(user) => {
                self.state.expenses = self.expense_store.list_for_user(&user).await?;
                self.state.groups = self.group_store.list_for_user(&user).await?;
                tracing::info!(
                    user = %user,
                    expenses = self.state.expenses.len(),
                    groups = self.state.groups.len(),
                    "session loaded"
                );
                self.state.auth = AuthState::SignedIn { user };
            }
            None => {
                self.state.expenses.clear();
                self.state.groups.clear();
                self.state.auth = AuthState::default();
            }
        }
        Ok(())
    }

    /// Validates the group form, persists the group and reloads the list.
    pub async fn create_group(&mut self) -> Result<()> {
        let user = self.signed_in_user()?;

        let members: Vec<String> = self
            .state
            .group_form
            .members
            .split(',')
            .map(str::trim)
            .filter(|member| !member.is_empty())
            .map(str::to_string)
            .collect();
        let draft = GroupDraft::new(&self.state.group_form.name, members, &user)?;

        let group = self.group_store.create(draft).await?;
        tracing::info!(group = %group.id, name = %group.name, "group created");

        self.state.groups = self.group_store.list_for_user(&user).await?;
        self.state.group_form.reset();
        Ok(())
    }

    /// Validates the expense form, persists the expense and reloads the
    /// working set.
    pub async fn add_expense(&mut self) -> Result<()> {
        let user = self.signed_in_user()?;
        let form = self.state.expense_form.clone();

        let amount: MoneyCents = form.amount.trim().parse().map_err(|_| {
            LedgerError::InvalidExpenseInput("amount must be a positive decimal".to_string())
        })?;

        let draft = match form.payment_mode {
            PaymentMode::Personal => ExpenseDraft::personal(&form.description, amount, &user)?,
            PaymentMode::Group => {
                let group_id = form
                    .selected_group
                    .as_deref()
                    .ok_or(LedgerError::MissingGroupSelection)?;
                // A vanished group degrades to a payer-only expense, matching
                // the permissive lookup in the entry flow.
                let participants = self
                    .state
                    .group(group_id)
                    .map(|group| group.members.clone())
                    .unwrap_or_else(|| vec![user.clone()]);
                ExpenseDraft::for_group(
                    &form.description,
                    amount,
                    group_id,
                    &user,
                    participants,
                    form.split_type,
                    form.custom_splits,
                )?
            }
        };

        let expense = self.expense_store.create(draft).await?;
        tracing::info!(expense = %expense.id, amount = %expense.amount, "expense added");

        self.state.expenses = self.expense_store.list_for_user(&user).await?;
        self.state.expense_form.reset();
        Ok(())
    }

    fn signed_in_user(&self) -> Result<String> {
        self.state
            .signed_in_user()
            .map(str::to_string)
            .ok_or(AppError::NotSignedIn)
    }
}
