//! Ordered, de-duplicated tag sets.
//!
//! Every element carries a [`TagSet`]. The tags that define an element's
//! type are registered as *required* when the set is created and can never
//! be removed afterwards; [`TagSet::remove`] is the only mutator that
//! deletes tags and it enforces this.

use std::fmt;

use serde::{Serialize, Serializer};

pub const ELEMENT: &str = "Element";
pub const SOFTWARE_SYSTEM: &str = "Software System";
pub const CONTAINER: &str = "Container";
pub const DEPLOYMENT_NODE: &str = "Deployment Node";
pub const CONTAINER_INSTANCE: &str = "Container Instance";
pub const SOFTWARE_SYSTEM_INSTANCE: &str = "Software System Instance";
pub const RELATIONSHIP: &str = "Relationship";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
    required: Vec<&'static str>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set whose first tags are `required` and cannot be removed.
    pub fn with_required(required: &[&'static str]) -> Self {
        let mut set = Self {
            tags: Vec::with_capacity(required.len()),
            required: Vec::with_capacity(required.len()),
        };
        for tag in required {
            if set.add(tag) {
                set.required.push(*tag);
            }
        }
        set
    }

    /// Append a tag. Blank tags and tags already present are ignored.
    /// Returns whether the set changed.
    pub fn add(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn add_all<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.add(tag.as_ref());
        }
    }

    /// Remove a tag, trimmed the same way [`TagSet::add`] trims it. Required
    /// tags are left in place and `false` is returned.
    pub fn remove(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if self.is_required(tag) {
            return false;
        }
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_required(&self, tag: &str) -> bool {
        self.required.iter().any(|t| *t == tag)
    }

    pub fn required(&self) -> &[&'static str] {
        &self.required
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// A new set holding `self` followed by `other`, with both required subsets.
    pub fn merged(&self, other: &TagSet) -> TagSet {
        let mut merged = self.clone();
        for tag in other.iter() {
            merged.add(tag);
        }
        for tag in &other.required {
            if !merged.is_required(tag) {
                merged.required.push(*tag);
            }
        }
        merged
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tags.join(","))
    }
}

impl Serialize for TagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
