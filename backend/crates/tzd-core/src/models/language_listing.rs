use crate::UserRecord;

/// Result of a language lookup: operators first, then everyone else.
///
/// Both lists are ordered by the raw timezone string (unset first). This is
/// plain lexical order, not the UTC order used by [`crate::group_by_timezone`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageListing {
    pub operators: Vec<UserRecord>,
    pub members: Vec<UserRecord>,
}

impl LanguageListing {
    pub fn from_records(records: Vec<UserRecord>) -> Self {
        let (mut operators, mut members): (Vec<_>, Vec<_>) =
            records.into_iter().partition(|r| r.is_operator);

        operators.sort_by(|a, b| a.timezone.cmp(&b.timezone));
        members.sort_by(|a, b| a.timezone.cmp(&b.timezone));

        Self { operators, members }
    }

    pub fn total(&self) -> usize {
        self.operators.len() + self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
