//! Alias roll-up - deduplicated, order-preserving list of a celebrity's aliases

use std::collections::HashSet;

/// Separator used when aliases are displayed as a single string
pub const ALIAS_SEPARATOR: &str = ", ";

/// Ordered, duplicate-free aliases
///
/// Entries are trimmed and blanks dropped; the first occurrence of a
/// value wins, so later duplicates never move an alias.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AliasList(Vec<String>);

impl AliasList {
    /// Build from aliases in first-seen order
    pub fn from_aliases<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut list = Vec::new();

        for alias in aliases {
            let alias = alias.as_ref().trim();
            if alias.is_empty() {
                continue;
            }
            if seen.insert(alias.to_string()) {
                list.push(alias.to_string());
            }
        }

        Self(list)
    }

    /// Build from a comma-joined string as produced by `STRING_AGG`
    pub fn from_joined(joined: Option<&str>) -> Self {
        match joined {
            Some(joined) => Self::from_aliases(joined.split(',')),
            None => Self::default(),
        }
    }

    /// Joined display string, `None` when there are no aliases
    pub fn joined(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(ALIAS_SEPARATOR))
        }
    }

    /// Short form: the first alias, with an ellipsis when more exist
    pub fn summary(&self) -> Option<String> {
        match self.0.as_slice() {
            [] => None,
            [only] => Some(only.clone()),
            [first, ..] => Some(format!("{first} ...")),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}
