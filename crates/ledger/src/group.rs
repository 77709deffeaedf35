//! Groups of users that share expenses. A group is created once and is
//! immutable afterwards; the record store assigns its id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::{LedgerError, ResultLedger};

/// Canonical form of a user identifier or group name: trimmed and
/// NFC-normalized, so visually identical inputs compare equal.
pub fn canonical_member(raw: &str) -> String {
    raw.trim().nfc().collect()
}

/// A persisted group, as returned by the record store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    /// Distinct user identifiers; the creator is always first. Ordering is
    /// meaningful: the custom-split auto-balance rule designates the last
    /// member.
    pub members: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A group as submitted for creation, before the store assigns an id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDraft {
    pub name: String,
    pub members: Vec<String>,
}

impl GroupDraft {
    /// Builds a validated draft.
    ///
    /// The creator is always the first member. Remaining members keep their
    /// input order, with blanks dropped and duplicates removed.
    pub fn new(
        name: &str,
        members: impl IntoIterator<Item = String>,
        creator: &str,
    ) -> ResultLedger<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::EmptyGroupName);
        }

        let mut canonical = vec![canonical_member(creator)];
        for member in members {
            let member = canonical_member(&member);
            if !member.is_empty() && !canonical.contains(&member) {
                canonical.push(member);
            }
        }

        Ok(Self {
            name: name.to_string(),
            members: canonical,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creator_is_first_and_duplicates_collapse() {
        let draft = GroupDraft::new(
            "Trip",
            [
                "bob@example.com".to_string(),
                "alice@example.com".to_string(),
                " bob@example.com ".to_string(),
            ],
            "alice@example.com",
        )
        .unwrap();

        assert_eq!(
            draft.members,
            vec!["alice@example.com", "bob@example.com"]
        );
    }

    #[test]
    fn blank_members_are_dropped() {
        let draft = GroupDraft::new(
            "Trip",
            ["".to_string(), "  ".to_string(), "bob@x.io".to_string()],
            "alice@x.io",
        )
        .unwrap();

        assert_eq!(draft.members, vec!["alice@x.io", "bob@x.io"]);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = GroupDraft::new("   ", [], "alice@x.io").unwrap_err();
        assert_eq!(err, LedgerError::EmptyGroupName);
    }

    #[test]
    fn unicode_variants_compare_equal() {
        // "é" precomposed vs "e" + combining acute.
        let draft = GroupDraft::new(
            "Trip",
            ["ame\u{0301}lie@x.io".to_string()],
            "am\u{00e9}lie@x.io",
        )
        .unwrap();

        assert_eq!(draft.members.len(), 1);
    }
}
