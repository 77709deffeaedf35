//! Share computation and the interactive custom-split auto-balance rule.

use std::collections::HashMap;

use crate::{Expense, MoneyCents, SplitType};

/// Returns each participant's share of an expense.
///
/// Equal splits divide the amount across `split_with` with largest-remainder
/// rounding, so the shares always sum back to the full amount. Custom splits
/// are returned exactly as recorded: the ledger does not enforce that they
/// sum to the amount, and a mismatch flows into the balances unchanged.
pub fn compute_shares(expense: &Expense) -> HashMap<String, MoneyCents> {
    match expense.split_type {
        SplitType::Equal => {
            let parts = expense.amount.split_evenly(expense.split_with.len());
            expense
                .split_with
                .iter()
                .cloned()
                .zip(parts)
                .collect()
        }
        SplitType::Custom => expense.custom_splits.clone(),
    }
}

/// Applies one edit to a custom-split form and re-balances the last member.
///
/// `members` is the group's member ordering; its last element is the
/// designated balancing member. Editing any other member sets the last
/// member's value to `max(amount - sum(others), 0)`, which keeps the splits
/// summing to `amount`. Editing the last member itself is taken verbatim and
/// can break that invariant — intentional, the user asked for exactly that
/// value.
pub fn reconcile_custom_split_edit(
    members: &[String],
    amount: MoneyCents,
    edited_member: &str,
    value: MoneyCents,
    splits: &HashMap<String, MoneyCents>,
) -> HashMap<String, MoneyCents> {
    let mut updated = splits.clone();
    updated.insert(edited_member.to_string(), value);

    let Some(last) = members.last() else {
        return updated;
    };
    if edited_member == last {
        return updated;
    }

    let others: MoneyCents = members
        .iter()
        .filter(|member| *member != last)
        .map(|member| updated.get(member).copied().unwrap_or(MoneyCents::ZERO))
        .sum();
    updated.insert(last.clone(), (amount - others).max(MoneyCents::ZERO));

    updated
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::GroupRef;

    fn expense(
        amount: i64,
        split_type: SplitType,
        split_with: &[&str],
        custom: &[(&str, i64)],
    ) -> Expense {
        Expense {
            id: "e-1".to_string(),
            description: "Dinner".to_string(),
            amount: MoneyCents::new(amount),
            group: GroupRef::Group("g-1".to_string()),
            paid_by: "alice@x.io".to_string(),
            split_type,
            split_with: split_with.iter().map(|s| s.to_string()).collect(),
            custom_splits: custom
                .iter()
                .map(|(member, cents)| (member.to_string(), MoneyCents::new(*cents)))
                .collect(),
            created_at: Utc::now(),
        }
    }

    fn members(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn equal_shares_are_uniform() {
        let shares = compute_shares(&expense(
            90_00,
            SplitType::Equal,
            &["alice@x.io", "bob@x.io", "carol@x.io"],
            &[],
        ));

        assert_eq!(shares.len(), 3);
        assert!(shares.values().all(|share| share.cents() == 30_00));
    }

    #[test]
    fn equal_shares_sum_to_amount_with_remainder() {
        let exp = expense(
            100_00,
            SplitType::Equal,
            &["alice@x.io", "bob@x.io", "carol@x.io"],
            &[],
        );
        let shares = compute_shares(&exp);

        assert_eq!(
            shares.values().copied().sum::<MoneyCents>(),
            exp.amount
        );
        // The extra cent lands on the first participant.
        assert_eq!(shares["alice@x.io"].cents(), 33_34);
        assert_eq!(shares["bob@x.io"].cents(), 33_33);
    }

    #[test]
    fn custom_shares_pass_through_even_when_inconsistent() {
        // 20 + 30 != 100: returned unmodified.
        let shares = compute_shares(&expense(
            100_00,
            SplitType::Custom,
            &["alice@x.io", "bob@x.io"],
            &[("alice@x.io", 20_00), ("bob@x.io", 30_00)],
        ));

        assert_eq!(shares["alice@x.io"].cents(), 20_00);
        assert_eq!(shares["bob@x.io"].cents(), 30_00);
        assert_eq!(shares.len(), 2);
    }

    #[test]
    fn editing_non_last_member_rebalances_last() {
        let members = members(&["a@x.io", "b@x.io", "c@x.io"]);
        let updated = reconcile_custom_split_edit(
            &members,
            MoneyCents::new(100_00),
            "b@x.io",
            MoneyCents::new(40_00),
            &HashMap::new(),
        );

        assert_eq!(updated["b@x.io"].cents(), 40_00);
        assert_eq!(updated["c@x.io"].cents(), 60_00);
        assert_eq!(
            updated.values().copied().sum::<MoneyCents>().cents(),
            100_00
        );
    }

    #[test]
    fn rebalance_clamps_last_member_at_zero() {
        let members = members(&["a@x.io", "b@x.io", "c@x.io"]);
        let splits = HashMap::from([("a@x.io".to_string(), MoneyCents::new(70_00))]);
        let updated = reconcile_custom_split_edit(
            &members,
            MoneyCents::new(100_00),
            "b@x.io",
            MoneyCents::new(50_00),
            &splits,
        );

        assert_eq!(updated["c@x.io"], MoneyCents::ZERO);
    }

    #[test]
    fn editing_last_member_is_verbatim() {
        let members = members(&["a@x.io", "b@x.io", "c@x.io"]);
        let splits = HashMap::from([
            ("a@x.io".to_string(), MoneyCents::new(40_00)),
            ("b@x.io".to_string(), MoneyCents::new(40_00)),
            ("c@x.io".to_string(), MoneyCents::new(20_00)),
        ]);
        let updated = reconcile_custom_split_edit(
            &members,
            MoneyCents::new(100_00),
            "c@x.io",
            MoneyCents::new(99_00),
            &splits,
        );

        // No other member moves; the sum invariant is knowingly broken.
        assert_eq!(updated["a@x.io"].cents(), 40_00);
        assert_eq!(updated["b@x.io"].cents(), 40_00);
        assert_eq!(updated["c@x.io"].cents(), 99_00);
    }

    #[test]
    fn repeated_non_last_edits_keep_sum_invariant() {
        let members = members(&["a@x.io", "b@x.io", "c@x.io"]);
        let amount = MoneyCents::new(100_00);

        let splits =
            reconcile_custom_split_edit(&members, amount, "a@x.io", MoneyCents::new(10_00), &HashMap::new());
        let splits =
            reconcile_custom_split_edit(&members, amount, "b@x.io", MoneyCents::new(25_50), &splits);
        let splits =
            reconcile_custom_split_edit(&members, amount, "a@x.io", MoneyCents::new(5_00), &splits);

        assert_eq!(splits.values().copied().sum::<MoneyCents>(), amount);
    }
}
