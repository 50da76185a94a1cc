//! Sequential identifier minting.
//!
//! Ids are `PREFIX-NNN`. The next id is one past the highest numeric suffix
//! among existing ids with the generator's prefix. Ids with another prefix,
//! or ones that do not parse, are ignored rather than treated as errors.

use crate::types::IssueId;

/// Mints the next identifier for a fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    prefix: String,
}

impl IdGenerator {
    /// Create a generator for `prefix`.
    ///
    /// # Errors
    /// Returns an error if the prefix is empty or not ASCII alphanumeric.
    pub fn new(prefix: &str) -> crate::Result<Self> {
        // Validates the prefix.
        IssueId::new(prefix, 0)?;
        Ok(Self {
            prefix: prefix.to_string(),
        })
    }

    /// The prefix this generator mints.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Highest numeric suffix among `existing` that carries this prefix.
    pub fn max_suffix<'a, I>(&self, existing: I) -> u64
    where
        I: IntoIterator<Item = &'a str>,
    {
        existing
            .into_iter()
            .filter_map(|raw| IssueId::parse(raw).ok())
            .filter(|id| id.prefix() == self.prefix)
            .map(|id| id.number())
            .max()
            .unwrap_or(0)
    }

    /// Next identifier after every id in `existing`.
    ///
    /// Returns `None` once the numeric suffix space is exhausted.
    pub fn next<'a, I>(&self, existing: I) -> Option<IssueId>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.next_after(existing, 0)
    }

    /// Next identifier after every id in `existing` and after `floor`.
    ///
    /// `floor` is the highest suffix ever issued, so ids of deleted issues are
    /// never minted again. Returns `None` when the highest suffix is already
    /// `u64::MAX`; there is no id left that has not been issued.
    pub fn next_after<'a, I>(&self, existing: I, floor: u64) -> Option<IssueId>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let number = self.max_suffix(existing).max(floor).checked_add(1)?;
        Some(IssueId {
            prefix: self.prefix.clone(),
            number,
        })
    }
}
