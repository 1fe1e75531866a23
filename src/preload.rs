//! Eager-load (preload) sets.
//!
//! A [`PreloadSet`] maps relation names to per-relation conditions and
//! attaches every entry to a handle. Relation names are unique; attachment
//! order across different relations is unspecified and must not affect the
//! final result set; each relation's preload is structurally independent.
//!
//! ```rust,ignore
//! let preloads = PreloadSet::new()
//!     .with("comments", Arc::new(|h: Db| h.filter("visible = true")))
//!     .with_unfiltered("author");
//!
//! let handle = preloads.apply(db);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::handle::{PreloadCondition, QueryHandle};

/// A set of relations to eager-load, each with its own condition.
pub struct PreloadSet<H> {
    conditions: HashMap<String, PreloadCondition<H>>,
}

impl<H: QueryHandle> PreloadSet<H> {
    /// Create an empty preload set.
    pub fn new() -> Self {
        Self {
            conditions: HashMap::new(),
        }
    }

    /// The no-op condition, for relations needing no extra filtering.
    pub fn unfiltered() -> PreloadCondition<H> {
        Arc::new(|handle| handle)
    }

    /// Add a relation with a condition.
    pub fn with(mut self, relation: impl Into<String>, condition: PreloadCondition<H>) -> Self {
        self.conditions.insert(relation.into(), condition);
        self
    }

    /// Add a relation with the no-op condition.
    pub fn with_unfiltered(self, relation: impl Into<String>) -> Self {
        self.with(relation, Self::unfiltered())
    }

    /// Insert a relation with a condition.
    pub fn insert(&mut self, relation: impl Into<String>, condition: PreloadCondition<H>) {
        self.conditions.insert(relation.into(), condition);
    }

    /// Check if a relation is in the set.
    pub fn contains(&self, relation: &str) -> bool {
        self.conditions.contains_key(relation)
    }

    /// Iterate over the relation names in the set.
    pub fn relations(&self) -> impl Iterator<Item = &str> {
        self.conditions.keys().map(String::as_str)
    }

    /// Number of relations in the set.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Merge another set into this one; the other set wins on name clashes.
    pub fn merge(mut self, other: Self) -> Self {
        self.conditions.extend(other.conditions);
        self
    }

    /// Attach every relation's preload instruction to a handle.
    pub fn apply(&self, mut handle: H) -> H {
        for (relation, condition) in &self.conditions {
            handle = handle.preload(relation, Arc::clone(condition));
        }
        handle
    }
}

impl<H: QueryHandle> Default for PreloadSet<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Clone for PreloadSet<H> {
    fn clone(&self) -> Self {
        Self {
            conditions: self.conditions.clone(),
        }
    }
}

impl<H> fmt::Debug for PreloadSet<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreloadSet")
            .field("relations", &self.conditions.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<H: QueryHandle> FromIterator<(String, PreloadCondition<H>)> for PreloadSet<H> {
    fn from_iter<T: IntoIterator<Item = (String, PreloadCondition<H>)>>(iter: T) -> Self {
        Self {
            conditions: iter.into_iter().collect(),
        }
    }
}
