//! Settlement balance computation: the "total paid / you owe / you get"
//! figures shown on the dashboard.

use serde::Serialize;

use crate::{Expense, MoneyCents, compute_shares};

/// Aggregate figures for one user across every expense visible to them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BalanceSummary {
    /// Everything the user has paid out, whether or not they participate in
    /// the split.
    pub total_paid: MoneyCents,
    /// Sum of the user's shares in expenses somebody else paid.
    pub you_owe: MoneyCents,
    /// Amount the user fronted on behalf of others in expenses they paid.
    pub you_are_owed: MoneyCents,
}

/// Computes the settlement balance of `user_id` over `expenses`.
///
/// The input is expected to be the store's "visible to this user" query
/// result, but stray records are harmless: an expense where the user is not
/// a participant only counts towards `total_paid` (when they paid it) and is
/// otherwise skipped.
///
/// The result does not depend on the order of `expenses`.
pub fn compute_balances(expenses: &[Expense], user_id: &str) -> BalanceSummary {
    let mut summary = BalanceSummary::default();

    for expense in expenses {
        let paid_by_user = expense.paid_by == user_id;
        if paid_by_user {
            summary.total_paid += expense.amount;
        }

        if !expense.split_with.iter().any(|member| member == user_id) {
            continue;
        }

        let shares = compute_shares(expense);
        let your_share = shares.get(user_id).copied().unwrap_or(MoneyCents::ZERO);

        if paid_by_user {
            summary.you_are_owed += expense.amount - your_share;
        } else {
            summary.you_owe += your_share;
        }
    }

    summary
}
