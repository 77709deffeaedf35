//! Expense records and the drafts used to create them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{LedgerError, MoneyCents, ResultLedger};

/// How an expense is divided across its participants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitType {
    #[default]
    Equal,
    Custom,
}

impl SplitType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Custom => "custom",
        }
    }
}

/// Group association of an expense.
///
/// Serializes as the group id, with the sentinel string `"personal"` meaning
/// no group at all. Decoding is total: anything that is not the sentinel is
/// treated as a group id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GroupRef {
    Personal,
    Group(String),
}

impl GroupRef {
    const PERSONAL: &'static str = "personal";

    pub fn is_personal(&self) -> bool {
        matches!(self, Self::Personal)
    }

    pub fn group_id(&self) -> Option<&str> {
        match self {
            Self::Personal => None,
            Self::Group(id) => Some(id),
        }
    }
}

impl From<String> for GroupRef {
    fn from(value: String) -> Self {
        if value == Self::PERSONAL {
            Self::Personal
        } else {
            Self::Group(value)
        }
    }
}

impl From<GroupRef> for String {
    fn from(value: GroupRef) -> Self {
        match value {
            GroupRef::Personal => GroupRef::PERSONAL.to_string(),
            GroupRef::Group(id) => id,
        }
    }
}

/// A persisted expense, as returned by the record store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: MoneyCents,
    pub group: GroupRef,
    pub paid_by: String,
    pub split_type: SplitType,
    /// Distinct participants, in group-member order. For personal expenses
    /// this is exactly the payer.
    pub split_with: Vec<String>,
    /// Per-participant amounts; populated only for custom splits. The ledger
    /// does not check that the values sum to `amount`: a mismatch produces an
    /// inconsistent ledger and is surfaced as-is rather than silently fixed.
    pub custom_splits: HashMap<String, MoneyCents>,
    /// Assigned by the store at creation; used only for ordering.
    pub created_at: DateTime<Utc>,
}

/// An expense as submitted for creation, before the store assigns an id and
/// a timestamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: MoneyCents,
    pub group: GroupRef,
    pub paid_by: String,
    pub split_type: SplitType,
    pub split_with: Vec<String>,
    pub custom_splits: HashMap<String, MoneyCents>,
}

impl ExpenseDraft {
    /// A personal expense: the payer is its sole participant and the split
    /// is trivially equal.
    pub fn personal(description: &str, amount: MoneyCents, paid_by: &str) -> ResultLedger<Self> {
        let description = validate_description(description)?;
        validate_amount(amount)?;

        Ok(Self {
            description,
            amount,
            group: GroupRef::Personal,
            paid_by: paid_by.to_string(),
            split_type: SplitType::Equal,
            split_with: vec![paid_by.to_string()],
            custom_splits: HashMap::new(),
        })
    }

    /// A group expense split across `participants`.
    ///
    /// `custom_splits` is kept only for custom splits; an equal split always
    /// stores an empty map, whatever the form accumulated beforehand.
    pub fn for_group(
        description: &str,
        amount: MoneyCents,
        group_id: &str,
        paid_by: &str,
        participants: Vec<String>,
        split_type: SplitType,
        custom_splits: HashMap<String, MoneyCents>,
    ) -> ResultLedger<Self> {
        let description = validate_description(description)?;
        validate_amount(amount)?;
        if participants.is_empty() {
            return Err(LedgerError::InvalidExpenseInput(
                "an expense needs at least one participant".to_string(),
            ));
        }

        Ok(Self {
            description,
            amount,
            group: GroupRef::Group(group_id.to_string()),
            paid_by: paid_by.to_string(),
            split_type,
            split_with: participants,
            custom_splits: match split_type {
                SplitType::Equal => HashMap::new(),
                SplitType::Custom => custom_splits,
            },
        })
    }
}

fn validate_description(description: &str) -> ResultLedger<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidExpenseInput(
            "description must not be blank".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_amount(amount: MoneyCents) -> ResultLedger<()> {
    if !amount.is_positive() {
        return Err(LedgerError::InvalidExpenseInput(
            "amount must be positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_ref_roundtrips_through_sentinel() {
        let personal: GroupRef = serde_json::from_str("\"personal\"").unwrap();
        assert!(personal.is_personal());
        assert_eq!(serde_json::to_string(&personal).unwrap(), "\"personal\"");

        let group: GroupRef = serde_json::from_str("\"g-42\"").unwrap();
        assert_eq!(group.group_id(), Some("g-42"));
        assert_eq!(serde_json::to_string(&group).unwrap(), "\"g-42\"");
    }

    #[test]
    fn personal_draft_has_payer_as_sole_participant() {
        let draft =
            ExpenseDraft::personal("Coffee", MoneyCents::new(100_00), "alice@x.io").unwrap();
        assert_eq!(draft.split_with, vec!["alice@x.io"]);
        assert_eq!(draft.split_type, SplitType::Equal);
        assert!(draft.custom_splits.is_empty());
        assert!(draft.group.is_personal());
    }

    #[test]
    fn blank_description_is_rejected() {
        let err = ExpenseDraft::personal("  ", MoneyCents::new(100), "alice@x.io").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidExpenseInput(_)));
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        for cents in [0, -500] {
            let err =
                ExpenseDraft::personal("Coffee", MoneyCents::new(cents), "alice@x.io").unwrap_err();
            assert!(matches!(err, LedgerError::InvalidExpenseInput(_)));
        }
    }

    #[test]
    fn equal_group_draft_discards_stale_custom_splits() {
        let stale = HashMap::from([("bob@x.io".to_string(), MoneyCents::new(1000))]);
        let draft = ExpenseDraft::for_group(
            "Dinner",
            MoneyCents::new(90_00),
            "g-1",
            "alice@x.io",
            vec!["alice@x.io".to_string(), "bob@x.io".to_string()],
            SplitType::Equal,
            stale,
        )
        .unwrap();

        assert!(draft.custom_splits.is_empty());
    }

    #[test]
    fn custom_group_draft_keeps_splits_unvalidated() {
        // 20 + 40 != 90: the ledger keeps the mismatch rather than fixing it.
        let splits = HashMap::from([
            ("alice@x.io".to_string(), MoneyCents::new(20_00)),
            ("bob@x.io".to_string(), MoneyCents::new(40_00)),
        ]);
        let draft = ExpenseDraft::for_group(
            "Dinner",
            MoneyCents::new(90_00),
            "g-1",
            "alice@x.io",
            vec!["alice@x.io".to_string(), "bob@x.io".to_string()],
            SplitType::Custom,
            splits.clone(),
        )
        .unwrap();

        assert_eq!(draft.custom_splits, splits);
    }
}
