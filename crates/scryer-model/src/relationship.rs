use serde::Serialize;

use crate::tags::{self, TagSet};
use crate::ElementId;

/// A directed "uses" relationship between two elements.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub(crate) id: ElementId,
    pub(crate) source_id: ElementId,
    pub(crate) destination_id: ElementId,
    pub(crate) description: String,
    pub(crate) technology: String,
    pub(crate) tags: TagSet,
    /// Element-level relationship this one was replicated from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) linked_relationship_id: Option<ElementId>,
}

impl Relationship {
    pub(crate) fn new(
        id: ElementId,
        source_id: &str,
        destination_id: &str,
        description: &str,
        technology: &str,
    ) -> Self {
        Self {
            id,
            source_id: source_id.to_string(),
            destination_id: destination_id.to_string(),
            description: description.to_string(),
            technology: technology.to_string(),
            tags: TagSet::with_required(&[tags::RELATIONSHIP]),
            linked_relationship_id: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn destination_id(&self) -> &str {
        &self.destination_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn technology(&self) -> &str {
        &self.technology
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn linked_relationship_id(&self) -> Option<&str> {
        self.linked_relationship_id.as_deref()
    }

    /// Two relationships collide when they join the same elements with the same description.
    pub(crate) fn duplicates(&self, source_id: &str, destination_id: &str, description: &str) -> bool {
        self.source_id == source_id
            && self.destination_id == destination_id
            && self.description == description
    }
}
