//! The in-memory issue collection.
//!
//! An [`IssueBook`] is the whole mutable state of a tracker: issues in
//! most-recent-first order, the assignee registry, and the highest id suffix
//! ever issued per prefix. It is plain data; locking lives in
//! [`Database`](crate::Database).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sprintflow_core::{Issue, IssueId};

use crate::registry::AssigneeRegistry;

/// Issues plus the bookkeeping needed to mutate them.
#[derive(Debug, Clone, Default)]
pub struct IssueBook {
    issues: Vec<Issue>,
    assignees: AssigneeRegistry,
    high_water: BTreeMap<String, u64>,
}

impl IssueBook {
    /// An empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// A book holding `issues` in the given order (first = most recent).
    ///
    /// The high-water mark of every prefix starts at its largest suffix.
    pub fn with_issues(issues: Vec<Issue>) -> Self {
        let mut book = Self::new();
        for issue in &issues {
            book.record_issued(&issue.id);
        }
        book.issues = issues;
        book
    }

    /// Issues, most recent first.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Identifiers of all issues, most recent first.
    pub fn ids(&self) -> impl Iterator<Item = String> + '_ {
        self.issues.iter().map(|i| i.id.to_string())
    }

    /// Look up an issue.
    pub fn get(&self, id: &IssueId) -> Option<&Issue> {
        self.issues.iter().find(|i| &i.id == id)
    }

    /// Position of an issue in the collection.
    pub fn position(&self, id: &IssueId) -> Option<usize> {
        self.issues.iter().position(|i| &i.id == id)
    }

    /// The assignee registry.
    pub fn assignees(&self) -> &AssigneeRegistry {
        &self.assignees
    }

    /// Mutable access to the assignee registry.
    pub fn assignees_mut(&mut self) -> &mut AssigneeRegistry {
        &mut self.assignees
    }

    /// Highest suffix ever issued for `prefix`, including deleted issues.
    pub fn high_water(&self, prefix: &str) -> u64 {
        self.high_water.get(prefix).copied().unwrap_or(0)
    }

    pub(crate) fn record_issued(&mut self, id: &IssueId) {
        let mark = self.high_water.entry(id.prefix().to_string()).or_insert(0);
        if id.number() > *mark {
            *mark = id.number();
        }
    }

    pub(crate) fn push_front(&mut self, issue: Issue) {
        self.record_issued(&issue.id);
        self.issues.insert(0, issue);
    }

    pub(crate) fn replace_at(&mut self, index: usize, issue: Issue) {
        self.issues[index] = issue;
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Issue {
        self.issues.remove(index)
    }

    /// Clear `name` from every issue assigned to it, returning their ids.
    pub(crate) fn unassign_all(&mut self, name: &str, now: DateTime<Utc>) -> Vec<IssueId> {
        let mut touched = Vec::new();
        for issue in self.issues.iter_mut() {
            if issue.assignee.as_deref() == Some(name) {
                issue.assignee = None;
                issue.touch(now);
                touched.push(issue.id.clone());
            }
        }
        touched
    }
}
