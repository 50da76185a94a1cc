//! Assignee registry: a flat, case-insensitively unique set of names.

use sprintflow_core::{SentinelSet, ValidationReport};

use crate::error::{EngineError, EngineResult};

/// Known assignee names.
///
/// Names keep the casing they were registered with; lookups ignore case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssigneeRegistry {
    names: Vec<String>,
}

impl AssigneeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered name matching `name` case-insensitively.
    pub fn canonical(&self, name: &str) -> Option<&str> {
        let folded = name.trim().to_lowercase();
        self.names
            .iter()
            .find(|n| n.to_lowercase() == folded)
            .map(String::as_str)
    }

    /// True if `name` is registered (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.canonical(name).is_some()
    }

    /// Register a name.
    ///
    /// # Errors
    /// [`EngineError::AssigneeExists`] if a name differing only in case is
    /// already registered; [`EngineError::Validation`] for a blank name or
    /// one that collides with an "unassigned" placeholder.
    pub fn add(&mut self, name: &str) -> EngineResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::Validation(ValidationReport::single(
                "name",
                "must not be empty",
            )));
        }
        if SentinelSet::ASSIGNEE.contains(name) {
            return Err(EngineError::Validation(ValidationReport::single(
                "name",
                format!("'{}' is reserved", name),
            )));
        }
        if let Some(existing) = self.canonical(name) {
            return Err(EngineError::AssigneeExists {
                name: existing.to_string(),
            });
        }
        self.names.push(name.to_string());
        Ok(name.to_string())
    }

    /// Unregister a name, returning the registered casing.
    ///
    /// # Errors
    /// [`EngineError::AssigneeNotFound`] if nothing matches.
    pub fn remove(&mut self, name: &str) -> EngineResult<String> {
        let canonical = self
            .canonical(name)
            .map(str::to_string)
            .ok_or_else(|| EngineError::AssigneeNotFound {
                name: name.trim().to_string(),
            })?;
        self.names.retain(|n| *n != canonical);
        Ok(canonical)
    }

    /// Registered names, sorted case-insensitively.
    pub fn names(&self) -> Vec<String> {
        let mut names = self.names.clone();
        names.sort_by_key(|n| n.to_lowercase());
        names
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
