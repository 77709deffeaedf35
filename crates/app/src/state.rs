//! Explicit application state plus the pure reducer for local edits.
//!
//! The state is a single value handed through [`update`]; nothing here
//! performs I/O. Store and identity interactions live in [`crate::App`].

use std::collections::HashMap;

use ledger::{
    BalanceSummary, Expense, Group, MoneyCents, SplitType, compute_balances,
    reconcile_custom_split_edit,
};

/// Whether the expense being entered is personal or shared with a group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaymentMode {
    #[default]
    Personal,
    Group,
}

/// Credentials form shown while signed out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialsForm {
    pub email: String,
    pub password: String,
    /// `true` = the submit action registers a new account.
    pub sign_up: bool,
}

/// Sign-in state of the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthState {
    SignedOut(CredentialsForm),
    SignedIn { user: String },
}

impl Default for AuthState {
    fn default() -> Self {
        Self::SignedOut(CredentialsForm::default())
    }
}

/// Expense entry form.
///
/// `amount` stays raw text until submission; while the user edits custom
/// splits it is read leniently (unparseable input counts as zero, matching
/// how a half-typed amount behaves in the entry screen).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub payment_mode: PaymentMode,
    pub selected_group: Option<String>,
    pub split_type: SplitType,
    pub custom_splits: HashMap<String, MoneyCents>,
}

impl ExpenseForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Lenient amount reading used during custom-split editing.
    pub fn amount_or_zero(&self) -> MoneyCents {
        self.amount.trim().parse().unwrap_or(MoneyCents::ZERO)
    }
}

/// Group creation form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupForm {
    pub open: bool,
    pub name: String,
    /// Comma-separated member identifiers, as typed.
    pub members: String,
}

impl GroupForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The whole application state: session, working set, forms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub auth: AuthState,
    pub expenses: Vec<Expense>,
    pub groups: Vec<Group>,
    pub expense_form: ExpenseForm,
    pub group_form: GroupForm,
}

impl AppState {
    pub fn signed_in_user(&self) -> Option<&str> {
        match &self.auth {
            AuthState::SignedIn { user } => Some(user),
            AuthState::SignedOut(_) => None,
        }
    }

    pub fn group(&self, group_id: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.id == group_id)
    }

    /// Settlement figures for the signed-in user; zeroes while signed out.
    pub fn dashboard(&self) -> BalanceSummary {
        match self.signed_in_user() {
            Some(user) => compute_balances(&self.expenses, user),
            None => BalanceSummary::default(),
        }
    }
}

/// Local edits to the application state.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetAuthEmail(String),
    SetAuthPassword(String),
    ToggleSignUp,
    SetDescription(String),
    SetAmount(String),
    SetPaymentMode(PaymentMode),
    SelectGroup(Option<String>),
    SetSplitType(SplitType),
    /// One keystroke in a custom-split field. Triggers the last-member
    /// auto-balance when the edited member is not last in the group order.
    EditCustomSplit { member: String, value: MoneyCents },
    ToggleGroupForm,
    SetGroupName(String),
    SetGroupMembers(String),
}

/// Applies one local edit. Pure: no I/O, no collaborator calls.
pub fn update(state: &mut AppState, action: Action) {
    match action {
        Action::SetAuthEmail(email) => {
            if let AuthState::SignedOut(form) = &mut state.auth {
                form.email = email;
            }
        }
        Action::SetAuthPassword(password) => {
            if let AuthState::SignedOut(form) = &mut state.auth {
                form.password = password;
            }
        }
        Action::ToggleSignUp => {
            if let AuthState::SignedOut(form) = &mut state.auth {
                form.sign_up = !form.sign_up;
            }
        }
        Action::SetDescription(description) => state.expense_form.description = description,
        Action::SetAmount(amount) => state.expense_form.amount = amount,
        Action::SetPaymentMode(mode) => state.expense_form.payment_mode = mode,
        Action::SelectGroup(group_id) => state.expense_form.selected_group = group_id,
        Action::SetSplitType(split_type) => state.expense_form.split_type = split_type,
        Action::EditCustomSplit { member, value } => {
            let members = state
                .expense_form
                .selected_group
                .as_deref()
                .and_then(|id| state.group(id))
                .map(|group| group.members.clone())
                .unwrap_or_default();
            let amount = state.expense_form.amount_or_zero();
            state.expense_form.custom_splits = reconcile_custom_split_edit(
                &members,
                amount,
                &member,
                value,
                &state.expense_form.custom_splits,
            );
        }
        Action::ToggleGroupForm => state.group_form.open = !state.group_form.open,
        Action::SetGroupName(name) => state.group_form.name = name,
        Action::SetGroupMembers(members) => state.group_form.members = members,
    }
}
